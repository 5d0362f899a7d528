//! Progress spinner shown while waiting on the catalog service.

use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner with `msg`, or a hidden bar when `quiet`.
pub(crate) fn start(msg: impl Into<String>, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
