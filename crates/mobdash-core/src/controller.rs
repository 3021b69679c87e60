//! The workflow controller — owns all mutable state for an analysis session
//! and drives the upload → configure → run → summarize state machine.
//!
//! Timing is deadline-based: the controller stores the next tick and the
//! pending summary hop as `Instant`s and advances when `poll` is called with
//! the current time. The frontends supply the clock (the GUI polls every
//! frame, the CLI polls between sleeps), so all transitions happen on one
//! logical thread and tests can drive the machine with synthetic instants.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::catalog;

/// Interval between simulated progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
/// Pause between progress hitting 100 and the summary appearing.
pub const SUMMARY_DELAY: Duration = Duration::from_millis(600);

/// Per-tick progress increment bounds, in percentage points.
const MIN_STEP: f32 = 3.0;
const MAX_STEP: f32 = 18.0;

/// Coarse state of the analysis session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    Idle,
    Processing,
    Summary,
}

/// Why a start request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("no scanners selected")]
    NoScannersSelected,
}

pub struct WorkflowController {
    pub selected_file: Option<PathBuf>,
    pub dialog_open: bool,
    selected_scanners: HashSet<String>,
    phase: WorkflowPhase,
    progress: f32,
    next_tick: Option<Instant>,
    summary_at: Option<Instant>,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            dialog_open: false,
            selected_scanners: catalog::default_selection(),
            phase: WorkflowPhase::Idle,
            progress: 0.0,
            next_tick: None,
            summary_at: None,
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// Progress percentage in [0, 100]. Meaningful only while `Processing`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn selected_scanners(&self) -> &HashSet<String> {
        &self.selected_scanners
    }

    /// A run can start once a file is chosen and the selection is non-empty.
    pub fn analysis_ready(&self) -> bool {
        self.selected_file.is_some() && !self.selected_scanners.is_empty()
    }

    /// Record the file chosen in the picker. `None` (picker cancelled) leaves
    /// the previous choice in place; `Some` replaces it unconditionally — no
    /// validation of extension, size, or content.
    pub fn set_file(&mut self, file: Option<PathBuf>) {
        if let Some(path) = file {
            debug!(file = %path.display(), "package selected");
            self.selected_file = Some(path);
        }
    }

    /// Toggle a scanner in or out of the selection. Required scanners cannot
    /// be deselected; the check lives here so callers need not pre-filter.
    pub fn toggle_scanner(&mut self, id: &str) {
        if catalog::is_required(id) {
            return;
        }
        if !self.selected_scanners.remove(id) {
            self.selected_scanners.insert(id.to_string());
        }
    }

    /// Start a run, reporting why it could not start.
    pub fn try_start(&mut self, now: Instant) -> Result<(), ValidationError> {
        if self.selected_file.is_none() {
            return Err(ValidationError::NoFileSelected);
        }
        if self.selected_scanners.is_empty() {
            return Err(ValidationError::NoScannersSelected);
        }

        debug!(scanners = self.selected_scanners.len(), "analysis started");
        self.dialog_open = false;
        self.phase = WorkflowPhase::Processing;
        self.progress = 0.0;
        self.next_tick = Some(now + TICK_INTERVAL);
        self.summary_at = None;
        Ok(())
    }

    /// Start a run; requests that fail the preconditions are absorbed as
    /// no-ops with no state change.
    pub fn request_start(&mut self, now: Instant) {
        let _ = self.try_start(now);
    }

    /// Abandon the current run. Progress and phase are cleared along with
    /// any pending tick or summary hop, so nothing scheduled before the
    /// reset can fire afterwards. The selected file and scanner set are
    /// deliberately kept — the user can re-run the same configuration.
    pub fn reset(&mut self) {
        debug!("workflow reset");
        self.progress = 0.0;
        self.phase = WorkflowPhase::Idle;
        self.next_tick = None;
        self.summary_at = None;
    }

    /// Advance the simulation to `now`. Outside `Processing` this is a no-op.
    ///
    /// Each elapsed tick interval bumps progress by a bounded random step,
    /// clamped to 100. When 100 is first reached the recurring tick stops
    /// and the one-shot summary hop is armed; once its delay elapses the
    /// phase becomes `Summary`.
    pub fn poll(&mut self, now: Instant) {
        if self.phase != WorkflowPhase::Processing {
            return;
        }

        if let Some(at) = self.summary_at {
            if now >= at {
                self.summary_at = None;
                self.phase = WorkflowPhase::Summary;
                debug!("analysis complete");
            }
            return;
        }

        let Some(mut tick) = self.next_tick else {
            return;
        };

        let mut rng = rand::rng();
        while now >= tick && self.progress < 100.0 {
            let step = rng.random_range(MIN_STEP..MAX_STEP);
            self.progress = (self.progress + step).min(100.0);
            tick += TICK_INTERVAL;
        }

        if self.progress >= 100.0 {
            self.next_tick = None;
            self.summary_at = Some(now + SUMMARY_DELAY);
        } else {
            self.next_tick = Some(tick);
        }
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_controller() -> (WorkflowController, Instant) {
        let mut c = WorkflowController::new();
        c.set_file(Some(PathBuf::from("app.apk")));
        (c, Instant::now())
    }

    /// Drive a started controller until progress reaches 100.
    fn run_to_full(c: &mut WorkflowController, start: Instant) -> Instant {
        for i in 1..=200 {
            let now = start + TICK_INTERVAL * i;
            c.poll(now);
            if c.progress() >= 100.0 {
                return now;
            }
        }
        panic!("progress never reached 100");
    }

    #[test]
    fn required_scanner_cannot_be_removed() {
        let mut c = WorkflowController::new();
        for _ in 0..5 {
            c.toggle_scanner("mobsf");
            assert!(c.selected_scanners().contains("mobsf"));
        }
        assert_eq!(c.selected_scanners().len(), 1);
    }

    #[test]
    fn optional_scanner_toggles_on_and_off() {
        let mut c = WorkflowController::new();
        c.toggle_scanner("frida");
        assert!(c.selected_scanners().contains("frida"));
        c.toggle_scanner("frida");
        assert!(!c.selected_scanners().contains("frida"));
        assert!(c.selected_scanners().contains("mobsf"));
    }

    #[test]
    fn start_without_file_is_a_noop() {
        let mut c = WorkflowController::new();
        c.toggle_scanner("frida");
        assert!(!c.analysis_ready());

        assert_eq!(
            c.try_start(Instant::now()),
            Err(ValidationError::NoFileSelected)
        );
        c.request_start(Instant::now());
        assert_eq!(c.phase(), WorkflowPhase::Idle);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn start_without_scanners_is_a_noop() {
        // Not reachable through toggle_scanner while the catalog has a
        // required entry, but the gate must hold if the catalog changes.
        let (mut c, now) = ready_controller();
        c.selected_scanners.clear();
        assert!(!c.analysis_ready());

        assert_eq!(c.try_start(now), Err(ValidationError::NoScannersSelected));
        assert_eq!(c.phase(), WorkflowPhase::Idle);
    }

    #[test]
    fn start_with_file_and_default_scanners() {
        let (mut c, now) = ready_controller();
        c.dialog_open = true;
        assert!(c.analysis_ready());

        c.request_start(now);
        assert_eq!(c.phase(), WorkflowPhase::Processing);
        assert!(!c.dialog_open);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn set_file_replaces_and_none_is_ignored() {
        let mut c = WorkflowController::new();
        c.set_file(None);
        assert!(c.selected_file.is_none());

        c.set_file(Some(PathBuf::from("a.apk")));
        c.set_file(Some(PathBuf::from("b.ipa")));
        assert_eq!(c.selected_file, Some(PathBuf::from("b.ipa")));

        c.set_file(None);
        assert_eq!(c.selected_file, Some(PathBuf::from("b.ipa")));
    }

    #[test]
    fn progress_is_monotone_and_clamped() {
        let (mut c, now) = ready_controller();
        c.request_start(now);

        let mut last = 0.0;
        for i in 1..=200 {
            c.poll(now + TICK_INTERVAL * i);
            let p = c.progress();
            assert!(p >= last, "progress went backwards: {last} -> {p}");
            assert!(p <= 100.0);
            last = p;
        }
        assert_eq!(last, 100.0);
        // Still Processing: the summary hop has its own delay.
        assert_eq!(c.phase(), WorkflowPhase::Processing);
    }

    #[test]
    fn summary_appears_only_after_the_delay() {
        let (mut c, now) = ready_controller();
        c.request_start(now);
        let full_at = run_to_full(&mut c, now);

        c.poll(full_at + SUMMARY_DELAY / 2);
        assert_eq!(c.phase(), WorkflowPhase::Processing);
        assert_eq!(c.progress(), 100.0);

        c.poll(full_at + SUMMARY_DELAY);
        assert_eq!(c.phase(), WorkflowPhase::Summary);
    }

    #[test]
    fn reset_during_processing_cancels_everything() {
        let (mut c, now) = ready_controller();
        c.request_start(now);
        c.poll(now + TICK_INTERVAL);
        assert!(c.progress() > 0.0);

        c.reset();
        assert_eq!(c.phase(), WorkflowPhase::Idle);
        assert_eq!(c.progress(), 0.0);

        // Nothing scheduled before the reset may fire afterwards.
        c.poll(now + TICK_INTERVAL * 1000);
        assert_eq!(c.phase(), WorkflowPhase::Idle);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn reset_cancels_a_pending_summary_hop() {
        let (mut c, now) = ready_controller();
        c.request_start(now);
        let full_at = run_to_full(&mut c, now);

        // The hop is armed but has not fired yet.
        c.reset();
        c.poll(full_at + SUMMARY_DELAY * 10);
        assert_eq!(c.phase(), WorkflowPhase::Idle);
    }

    #[test]
    fn reset_preserves_file_and_selection() {
        let (mut c, now) = ready_controller();
        c.toggle_scanner("quark");
        c.request_start(now);

        c.reset();
        assert_eq!(c.selected_file, Some(PathBuf::from("app.apk")));
        assert!(c.selected_scanners().contains("mobsf"));
        assert!(c.selected_scanners().contains("quark"));
    }

    #[test]
    fn rerun_is_possible_from_summary() {
        let (mut c, now) = ready_controller();
        c.request_start(now);
        let full_at = run_to_full(&mut c, now);
        c.poll(full_at + SUMMARY_DELAY);
        assert_eq!(c.phase(), WorkflowPhase::Summary);

        c.try_start(full_at + SUMMARY_DELAY).unwrap();
        assert_eq!(c.phase(), WorkflowPhase::Processing);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn poll_outside_processing_does_nothing() {
        let (mut c, now) = ready_controller();
        c.poll(now + TICK_INTERVAL * 50);
        assert_eq!(c.phase(), WorkflowPhase::Idle);
        assert_eq!(c.progress(), 0.0);
    }
}
