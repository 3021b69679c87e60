//! Dark security-tool theme with severity accent colors.

use eframe::egui::{self, Color32, Visuals};

use mobdash_core::report::Severity;
use mobdash_core::samples::AnalysisStatus;

pub const COLOR_CRITICAL: Color32 = Color32::from_rgb(230, 70, 70);
pub const COLOR_HIGH: Color32 = Color32::from_rgb(235, 130, 60);
pub const COLOR_MEDIUM: Color32 = Color32::from_rgb(230, 180, 50);
pub const COLOR_LOW: Color32 = Color32::from_rgb(110, 160, 220);
pub const COLOR_INFO: Color32 = Color32::from_rgb(150, 150, 150);
pub const COLOR_OK: Color32 = Color32::from_rgb(70, 200, 100);
pub const COLOR_ERROR: Color32 = Color32::from_rgb(230, 70, 70);

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Critical => COLOR_CRITICAL,
        Severity::High => COLOR_HIGH,
        Severity::Medium => COLOR_MEDIUM,
        Severity::Low => COLOR_LOW,
        Severity::Info => COLOR_INFO,
    }
}

pub fn status_color(status: AnalysisStatus) -> Color32 {
    match status {
        AnalysisStatus::Completed => COLOR_OK,
        AnalysisStatus::Failed => COLOR_ERROR,
        AnalysisStatus::InProgress => COLOR_MEDIUM,
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(Color32::from_rgb(220, 220, 220));
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
