//! Terminal progress rendering

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    match ProgressStyle::default_bar().template("{msg:40!} [{bar:30.cyan/blue}] {pos}/{len}") {
        Ok(style) => bar.set_style(style.progress_chars("=> ")),
        Err(e) => tracing::debug!("Falling back to default progress style: {}", e),
    }
    bar
}

/// Apply one `(current, total, message)` update
pub fn update(bar: &ProgressBar, current: usize, total: usize, message: &str) {
    bar.set_length(total as u64);
    bar.set_position(current as u64);
    bar.set_message(message.to_string());
}
