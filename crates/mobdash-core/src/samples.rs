//! Static sample data: the canned analysis report and the recent-analyses
//! list shown in the dashboard. Loaded once, read-only afterwards.

use std::sync::LazyLock;

use crate::report::{
    Finding, RemediationItem, ReportMetrics, ReportSummary, Severity, Vulnerability,
};

/// Status of a past run in the recent-analyses list. Sample data only; a
/// `Failed` entry here has no behavioral effect on the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Completed,
    Failed,
    InProgress,
}

impl AnalysisStatus {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisStatus::Completed => "Completed",
            AnalysisStatus::Failed => "Failed",
            AnalysisStatus::InProgress => "In progress",
        }
    }
}

/// One row of the recent-analyses list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentAnalysis {
    pub file_name: &'static str,
    pub platform: &'static str,
    pub status: AnalysisStatus,
    /// Security score 0-100; absent for runs that did not finish.
    pub score: Option<u8>,
    pub analyzed_at: &'static str,
}

pub const RECENT_ANALYSES: &[RecentAnalysis] = &[
    RecentAnalysis {
        file_name: "shopfast-2.4.1.apk",
        platform: "Android",
        status: AnalysisStatus::Completed,
        score: Some(74),
        analyzed_at: "2026-08-05 14:12",
    },
    RecentAnalysis {
        file_name: "medtrack.ipa",
        platform: "iOS",
        status: AnalysisStatus::Completed,
        score: Some(88),
        analyzed_at: "2026-08-04 09:38",
    },
    RecentAnalysis {
        file_name: "gamehub-beta.apk",
        platform: "Android",
        status: AnalysisStatus::Failed,
        score: None,
        analyzed_at: "2026-08-02 17:51",
    },
    RecentAnalysis {
        file_name: "fieldops-1.0.0.aab",
        platform: "Android",
        status: AnalysisStatus::Completed,
        score: Some(61),
        analyzed_at: "2026-07-30 11:05",
    },
];

static SAMPLE_REPORT: LazyLock<ReportSummary> = LazyLock::new(|| ReportSummary {
    app_name: "ShopFast".into(),
    package: "com.shopfast.android".into(),
    file_name: "shopfast-2.4.1.apk".into(),
    metrics: ReportMetrics {
        security_score: 62,
        files_analyzed: 412,
        duration_secs: 184.6,
        critical: 1,
        high: 2,
        medium: 2,
        low: 1,
        info: 1,
    },
    vulnerabilities: vec![
        Vulnerability {
            id: "VULN-001".into(),
            title: "Cleartext traffic permitted".into(),
            severity: Severity::Critical,
            category: "Network".into(),
            description: "android:usesCleartextTraffic is enabled, allowing unencrypted HTTP \
                          connections to any host."
                .into(),
            location: "AndroidManifest.xml".into(),
        },
        Vulnerability {
            id: "VULN-002".into(),
            title: "Hardcoded API credentials".into(),
            severity: Severity::High,
            category: "Secrets".into(),
            description: "A production API key is embedded as a string constant and is \
                          recoverable from the decompiled bytecode."
                .into(),
            location: "com/shopfast/net/ApiClient.java".into(),
        },
        Vulnerability {
            id: "VULN-003".into(),
            title: "Exported activity without permission".into(),
            severity: Severity::High,
            category: "Platform".into(),
            description: "CheckoutActivity is exported and can be launched by any installed \
                          app with attacker-controlled extras."
                .into(),
            location: "AndroidManifest.xml".into(),
        },
        Vulnerability {
            id: "VULN-004".into(),
            title: "Weak hash algorithm (MD5)".into(),
            severity: Severity::Medium,
            category: "Cryptography".into(),
            description: "MD5 is used to fingerprint cached responses; collisions allow cache \
                          poisoning."
                .into(),
            location: "com/shopfast/util/CacheKey.java".into(),
        },
        Vulnerability {
            id: "VULN-005".into(),
            title: "WebView JavaScript interface exposed".into(),
            severity: Severity::Medium,
            category: "Platform".into(),
            description: "addJavascriptInterface exposes native methods to remotely loaded \
                          pages."
                .into(),
            location: "com/shopfast/ui/HelpWebView.java".into(),
        },
        Vulnerability {
            id: "VULN-006".into(),
            title: "Verbose logging in release build".into(),
            severity: Severity::Low,
            category: "Logging".into(),
            description: "Request and response bodies are logged at DEBUG level in the release \
                          configuration."
                .into(),
            location: "com/shopfast/net/HttpLogger.java".into(),
        },
        Vulnerability {
            id: "VULN-007".into(),
            title: "Backup of app data allowed".into(),
            severity: Severity::Info,
            category: "Platform".into(),
            description: "android:allowBackup is enabled; local attackers with ADB access can \
                          extract app data."
                .into(),
            location: "AndroidManifest.xml".into(),
        },
    ],
    findings: vec![
        Finding {
            title: "Permission surface".into(),
            detail: "14 permissions requested, 3 flagged dangerous (CAMERA, ACCESS_FINE_LOCATION, \
                     READ_CONTACTS)."
                .into(),
            scanner: "mobsf".into(),
        },
        Finding {
            title: "No certificate pinning".into(),
            detail: "TLS connections accept any CA-signed certificate; pinning was not detected."
                .into(),
            scanner: "frida".into(),
        },
        Finding {
            title: "Third-party trackers".into(),
            detail: "2 analytics SDKs identified (AppMetrics, AdBeacon).".into(),
            scanner: "apkid".into(),
        },
    ],
    remediation: vec![
        RemediationItem {
            priority: 1,
            title: "Disable cleartext traffic".into(),
            detail: "Remove usesCleartextTraffic or scope it to debug builds via a network \
                     security config."
                .into(),
        },
        RemediationItem {
            priority: 2,
            title: "Move secrets out of the binary".into(),
            detail: "Fetch API credentials from the backend after authentication instead of \
                     shipping them in the package."
                .into(),
        },
        RemediationItem {
            priority: 3,
            title: "Restrict exported components".into(),
            detail: "Mark CheckoutActivity as not exported or guard it with a signature-level \
                     permission."
                .into(),
        },
        RemediationItem {
            priority: 4,
            title: "Replace MD5".into(),
            detail: "Use SHA-256 for cache fingerprints.".into(),
        },
    ],
});

/// The canned report revealed when a simulated run completes.
pub fn sample_report() -> &'static ReportSummary {
    &SAMPLE_REPORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_counts_match_the_vulnerability_list() {
        let report = sample_report();
        let count = |sev: Severity| {
            report
                .vulnerabilities
                .iter()
                .filter(|v| v.severity == sev)
                .count() as u32
        };
        assert_eq!(report.metrics.critical, count(Severity::Critical));
        assert_eq!(report.metrics.high, count(Severity::High));
        assert_eq!(report.metrics.medium, count(Severity::Medium));
        assert_eq!(report.metrics.low, count(Severity::Low));
        assert_eq!(report.metrics.info, count(Severity::Info));
        assert_eq!(
            report.metrics.total_issues() as usize,
            report.vulnerabilities.len()
        );
    }

    #[test]
    fn recent_analyses_include_a_failed_run() {
        assert!(RECENT_ANALYSES
            .iter()
            .any(|r| r.status == AnalysisStatus::Failed && r.score.is_none()));
    }

    #[test]
    fn sample_report_is_stable_across_reads() {
        // LazyLock hands out the same instance every time.
        assert!(std::ptr::eq(sample_report(), sample_report()));
    }

    #[test]
    fn finding_scanners_exist_in_the_catalog() {
        for finding in &sample_report().findings {
            assert!(
                crate::catalog::find(&finding.scanner).is_some(),
                "unknown scanner id: {}",
                finding.scanner
            );
        }
    }
}
