//! Spinner shown on stderr while the API is being walked

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner on stderr. Hidden automatically when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
