//! Application state wrapping the workflow controller.

use std::time::Instant;

use mobdash_core::controller::{WorkflowController, WorkflowPhase};
use mobdash_core::engine::{AnalysisEngine, SampleReportEngine};
use mobdash_core::report::ReportSummary;

pub struct DashboardApp {
    pub controller: WorkflowController,
    pub report: Option<ReportSummary>,
    pub error_message: Option<String>,

    engine: Box<dyn AnalysisEngine>,
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            controller: WorkflowController::new(),
            report: None,
            error_message: None,
            engine: Box::new(SampleReportEngine),
        }
    }

    /// Open the native picker and hand the result to the controller.
    /// Cancelling the picker leaves the previous choice in place.
    pub fn pick_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Mobile application package", &["apk", "ipa", "aab"])
            .pick_file();
        self.controller.set_file(picked);
    }

    pub fn start_analysis(&mut self) {
        match self.controller.try_start(Instant::now()) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    pub fn cancel_analysis(&mut self) {
        self.controller.reset();
        self.error_message = None;
    }

    /// Advance the simulation and resolve the report on the edge into the
    /// summary phase.
    fn poll(&mut self) {
        let before = self.controller.phase();
        self.controller.poll(Instant::now());

        if before == WorkflowPhase::Processing && self.controller.phase() == WorkflowPhase::Summary
        {
            let Some(file) = self.controller.selected_file.clone() else {
                return;
            };
            match self.engine.analyze(&file, self.controller.selected_scanners()) {
                Ok(report) => self.report = Some(report),
                Err(e) => self.error_message = Some(e.to_string()),
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        // Request repaint during the run for progress updates
        if self.controller.phase() == WorkflowPhase::Processing {
            ctx.request_repaint();
        }

        crate::ui::sidebar::draw_sidebar(ctx, self);
        crate::ui::scanner_dialog::draw_scanner_dialog(ctx, self);
        crate::ui::report_view::draw_report_view(ctx, self);
    }
}
