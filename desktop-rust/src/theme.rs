//! Colors and spacing

use egui::Color32;
use mcu_dashboard_common::InspectionResult;

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod colors {
    use egui::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
    pub const BADGE: Color32 = Color32::from_rgb(239, 68, 68);
    pub const MUTED: Color32 = Color32::from_gray(120);
    pub const SIDEBAR: Color32 = Color32::from_rgb(241, 245, 249);
}

/// Badge color of a result cell
pub fn result_color(result: InspectionResult) -> Color32 {
    match result {
        InspectionResult::Normal => colors::SUCCESS,
        InspectionResult::Abnormal => colors::DANGER,
        InspectionResult::Atensi => Color32::from_rgb(234, 179, 8),
        InspectionResult::Kritis => Color32::from_rgb(147, 51, 234),
    }
}

pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(spacing::SM, spacing::XS + 2.0);
    style.spacing.button_padding = egui::vec2(spacing::SM + 2.0, spacing::XS);
    ctx.set_style(style);
}
