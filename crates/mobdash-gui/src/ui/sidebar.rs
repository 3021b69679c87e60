//! Left panel: package upload, scanner selection entry point, run controls,
//! and the recent-analyses list.

use eframe::egui;

use mobdash_core::controller::WorkflowPhase;
use mobdash_core::samples::RECENT_ANALYSES;

use crate::app::DashboardApp;
use crate::ui::theme;

pub fn draw_sidebar(ctx: &egui::Context, app: &mut DashboardApp) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(240.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("MOBILE SECURITY");
                ui.label("v0.1.0");
                ui.separator();

                // Package picker
                ui.label("PACKAGE");
                if ui.button("Select Package...").clicked() {
                    app.pick_file();
                }
                if let Some(p) = &app.controller.selected_file {
                    ui.small(
                        p.file_name()
                            .map(|f| f.to_string_lossy().to_string())
                            .unwrap_or_else(|| "?".into()),
                    );
                    if let Ok(meta) = std::fs::metadata(p) {
                        ui.small(format_size(meta.len()));
                    }
                }
                ui.add_space(4.0);
                ui.separator();

                // Scanner selection
                ui.label("SCANNERS");
                ui.small(format!(
                    "{} of {} selected",
                    app.controller.selected_scanners().len(),
                    mobdash_core::catalog::SCANNERS.len()
                ));
                if ui.button("Configure Scanners...").clicked() {
                    app.controller.dialog_open = true;
                }

                ui.add_space(8.0);

                // Start / Cancel buttons
                let is_processing = app.controller.phase() == WorkflowPhase::Processing;
                ui.add_enabled_ui(!is_processing, |ui| {
                    if ui
                        .add_sized(
                            [ui.available_width(), 32.0],
                            egui::Button::new("START ANALYSIS"),
                        )
                        .clicked()
                    {
                        app.start_analysis();
                    }
                });

                if is_processing
                    && ui
                        .add_sized([ui.available_width(), 28.0], egui::Button::new("CANCEL"))
                        .clicked()
                {
                    app.cancel_analysis();
                }

                // Error message
                if let Some(err) = &app.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(theme::COLOR_ERROR, err);
                }

                ui.add_space(8.0);
                ui.separator();

                // Recent analyses (sample data)
                ui.label("RECENT ANALYSES");
                for recent in RECENT_ANALYSES {
                    ui.horizontal(|ui| {
                        ui.small(recent.file_name);
                    });
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            theme::status_color(recent.status),
                            recent.status.label(),
                        );
                        if let Some(score) = recent.score {
                            ui.small(format!("{score}/100"));
                        }
                        ui.small(recent.analyzed_at);
                    });
                    ui.add_space(2.0);
                }
            });
        });
}

fn format_size(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    const KB: u64 = 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
