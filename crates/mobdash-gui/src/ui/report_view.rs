//! Main panel: idle hint, progress bar, and the summary report.

use eframe::egui;

use mobdash_core::controller::WorkflowPhase;
use mobdash_core::report::ReportSummary;

use crate::app::DashboardApp;
use crate::ui::theme;

pub fn draw_report_view(ctx: &egui::Context, app: &mut DashboardApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        match app.controller.phase() {
            WorkflowPhase::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label("Select a package, configure scanners, then start the analysis.");
                });
            }
            WorkflowPhase::Processing => {
                draw_progress(ui, app);
            }
            WorkflowPhase::Summary => {
                draw_summary(ui, app);
            }
        }
    });
}

fn draw_progress(ui: &mut egui::Ui, app: &DashboardApp) {
    ui.add_space(20.0);
    ui.heading("Analyzing");
    ui.add_space(8.0);

    if let Some(file) = &app.controller.selected_file {
        ui.label(format!(
            "Running {} scanner(s) on {}",
            app.controller.selected_scanners().len(),
            file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "?".into()),
        ));
        ui.add_space(8.0);
    }

    let progress = app.controller.progress();
    ui.add(
        egui::ProgressBar::new(progress / 100.0)
            .text(format!("{progress:.0}%"))
            .animate(true),
    );
}

fn draw_summary(ui: &mut egui::Ui, app: &mut DashboardApp) {
    let Some(report) = app.report.clone() else {
        ui.label("No report available.");
        return;
    };

    ui.heading(format!("{} — Analysis Report", report.app_name));
    ui.small(format!("{} ({})", report.file_name, report.package));
    ui.add_space(4.0);

    draw_metrics_row(ui, &report);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            draw_vulnerabilities(ui, &report);
            ui.add_space(8.0);
            draw_findings(ui, &report);
            ui.add_space(8.0);
            draw_remediation(ui, &report);
        });

    ui.separator();
    if ui.button("New Analysis").clicked() {
        app.cancel_analysis();
    }
}

fn draw_metrics_row(ui: &mut egui::Ui, report: &ReportSummary) {
    let m = &report.metrics;
    ui.horizontal(|ui| {
        ui.label(format!("Score: {}/100", m.security_score));
        ui.label(" | ");
        ui.colored_label(theme::COLOR_CRITICAL, format!("Critical: {}", m.critical));
        ui.label(" | ");
        ui.colored_label(theme::COLOR_HIGH, format!("High: {}", m.high));
        ui.label(" | ");
        ui.colored_label(theme::COLOR_MEDIUM, format!("Medium: {}", m.medium));
        ui.label(" | ");
        ui.colored_label(theme::COLOR_LOW, format!("Low: {}", m.low));
        ui.label(" | ");
        ui.label(format!("Files: {}", m.files_analyzed));
        ui.label(" | ");
        ui.label(format!("Duration: {:.1}s", m.duration_secs));
    });
}

fn draw_vulnerabilities(ui: &mut egui::Ui, report: &ReportSummary) {
    ui.strong("Vulnerabilities");
    ui.add_space(4.0);

    let mut vulns: Vec<_> = report.vulnerabilities.iter().collect();
    vulns.sort_by_key(|v| v.severity);

    egui::Grid::new("vulnerabilities_grid")
        .striped(true)
        .min_col_width(60.0)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Severity");
            ui.strong("Issue");
            ui.strong("Category");
            ui.strong("Location");
            ui.end_row();

            for v in vulns {
                ui.colored_label(theme::severity_color(v.severity), v.severity.label());
                ui.label(&v.title).on_hover_text(&v.description);
                ui.label(&v.category);
                ui.monospace(&v.location);
                ui.end_row();
            }
        });
}

fn draw_findings(ui: &mut egui::Ui, report: &ReportSummary) {
    ui.strong("Findings");
    ui.add_space(4.0);
    for f in &report.findings {
        ui.horizontal_wrapped(|ui| {
            ui.monospace(format!("[{}]", f.scanner));
            ui.label(format!("{}: {}", f.title, f.detail));
        });
    }
}

fn draw_remediation(ui: &mut egui::Ui, report: &ReportSummary) {
    ui.strong("Remediation");
    ui.add_space(4.0);
    for r in &report.remediation {
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{}.", r.priority));
            ui.label(&r.title).on_hover_text(&r.detail);
        });
    }
}
