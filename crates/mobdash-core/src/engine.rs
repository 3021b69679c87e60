//! The analysis-engine seam.
//!
//! The dashboard itself never computes a report; this trait fixes the
//! contract a real engine must satisfy so one can be slotted in behind the
//! same interface. The shipped implementation returns the canned sample
//! report for any input and never fails.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::report::ReportSummary;
use crate::samples;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("scanner '{0}' is not available")]
    ScannerUnavailable(String),
    #[error("scanner '{scanner}' failed: {message}")]
    ScannerFailed { scanner: String, message: String },
}

/// Produces a report for a file and a set of scanner ids.
pub trait AnalysisEngine {
    fn analyze(
        &self,
        file: &Path,
        scanners: &HashSet<String>,
    ) -> Result<ReportSummary, AnalysisError>;
}

/// Engine that reveals the static sample report regardless of input.
#[derive(Debug, Default)]
pub struct SampleReportEngine;

impl AnalysisEngine for SampleReportEngine {
    fn analyze(
        &self,
        file: &Path,
        scanners: &HashSet<String>,
    ) -> Result<ReportSummary, AnalysisError> {
        info!(
            file = %file.display(),
            scanners = scanners.len(),
            "serving sample report"
        );
        Ok(samples::sample_report().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sample_engine_returns_the_constant_report() {
        let engine = SampleReportEngine;
        let scanners: HashSet<String> = ["mobsf".to_string()].into();

        let report = engine
            .analyze(&PathBuf::from("app.apk"), &scanners)
            .unwrap();
        assert_eq!(&report, samples::sample_report());
    }

    #[test]
    fn sample_engine_ignores_inputs() {
        let engine = SampleReportEngine;
        let a = engine
            .analyze(&PathBuf::from("one.apk"), &HashSet::new())
            .unwrap();
        let b = engine
            .analyze(
                &PathBuf::from("two.ipa"),
                &["mobsf".to_string(), "frida".to_string()].into(),
            )
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn analysis_error_messages() {
        let err = AnalysisError::ScannerUnavailable("frida".into());
        assert_eq!(err.to_string(), "scanner 'frida' is not available");

        let err = AnalysisError::ScannerFailed {
            scanner: "mobsf".into(),
            message: "decompilation timed out".into(),
        };
        assert!(err.to_string().contains("decompilation timed out"));
    }
}
