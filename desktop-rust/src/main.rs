mod app;
mod model;
mod theme;
mod views;

use anyhow::anyhow;
use app::DesktopApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mcu_desktop=info,mcu_dashboard_common=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MCU Dashboard")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MCU Dashboard",
        options,
        Box::new(|cc| {
            theme::configure_style(&cc.egui_ctx);
            Box::new(DesktopApp::default())
        }),
    )
    .map_err(|err| anyhow!("desktop app failed: {err}"))
}
