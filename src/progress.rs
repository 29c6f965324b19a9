//! Upload progress on the terminal
//!
//! The transfer is simulated: a tokio interval ticks the dashboard's upload
//! form until it reports 100%, mirrored on an indicatif bar.

use indicatif::{ProgressBar, ProgressStyle};
use mcu_dashboard_common::Dashboard;
use std::time::Duration;

fn upload_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// Tick the open upload form until complete; returns false without a file
pub async fn run_upload_progress(dashboard: &mut Dashboard, tick: Duration) -> bool {
    let Some(form) = dashboard.upload() else {
        return false;
    };
    let Some(file_name) = form.file_name().map(str::to_string) else {
        return false;
    };

    let bar = upload_bar();
    bar.set_message(file_name);

    let mut interval = tokio::time::interval(tick);
    // the first tick fires immediately
    interval.tick().await;
    loop {
        interval.tick().await;
        let done = dashboard.tick_upload();
        let percent = dashboard.upload().map_or(100, |f| f.progress());
        bar.set_position(u64::from(percent));
        if done {
            break;
        }
    }
    bar.finish_with_message("Upload selesai");
    true
}
