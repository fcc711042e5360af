//! `export` command: every app as an aws_opsworks_application resource

use std::fs;

use colored::Colorize;
use log::info;

use crate::cli::progress::spinner;
use crate::cli::{CommandContext, ExportFormat, GlobalOptions};
use crate::encode::{Encoder, HclEncoder, JsonEncoder};
use crate::error::Result;
use crate::pipeline::{self, ExportOptions};

/// Run the export command
pub async fn run(opts: &GlobalOptions, format: ExportFormat, output: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let options = ExportOptions {
        concurrency: ctx.config.concurrency,
    };

    let blocks = match format {
        ExportFormat::Hcl => render(&ctx, &HclEncoder, &options).await?,
        ExportFormat::Json => render(&ctx, &JsonEncoder, &options).await?,
    };

    info!("Exported {} applications", blocks.len());
    let document = join_blocks(&blocks);

    match output {
        Some(path) => {
            fs::write(path, &document)?;
            eprintln!(
                "{} Wrote {} resources to {}",
                "✓".green(),
                blocks.len(),
                path.bold()
            );
        }
        None => print!("{}", document),
    }

    Ok(())
}

async fn render<E: Encoder>(
    ctx: &CommandContext,
    encoder: &E,
    options: &ExportOptions,
) -> Result<Vec<String>> {
    let progress = spinner("Discovering OpsWorks applications...");
    let result = pipeline::export(&ctx.client, encoder, options).await;
    progress.finish_and_clear();
    result
}

/// Join blocks with one blank line between them, newline-terminated.
fn join_blocks(blocks: &[String]) -> String {
    let mut document = blocks
        .iter()
        .map(|b| b.trim_end())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !document.is_empty() {
        document.push('\n');
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_blocks_separates_with_blank_line() {
        let blocks = vec!["a {\n}\n".to_string(), "b {\n}\n".to_string()];
        assert_eq!(join_blocks(&blocks), "a {\n}\n\nb {\n}\n");
    }

    #[test]
    fn test_join_blocks_empty() {
        assert_eq!(join_blocks(&[]), "");
    }
}
