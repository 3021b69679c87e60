//! Report model and output formatting for completed analyses.

use serde::Serialize;

/// How bad a vulnerability is. Ordered from worst to least severe so that
/// sorting by severity puts critical issues first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        }
    }
}

/// A concrete security defect found in the package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vulnerability {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub category: String,
    pub description: String,
    /// Where in the package the issue was observed (file or manifest entry).
    pub location: String,
}

/// An informational observation that is not a defect by itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub title: String,
    pub detail: String,
    /// Id of the scanner that produced this finding.
    pub scanner: String,
}

/// A recommended fix, ordered by priority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemediationItem {
    pub priority: u8,
    pub title: String,
    pub detail: String,
}

/// Aggregate numbers for the summary header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportMetrics {
    /// 0-100, higher is better.
    pub security_score: u8,
    pub files_analyzed: u32,
    pub duration_secs: f32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub info: u32,
}

impl ReportMetrics {
    pub fn total_issues(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// The structured output of one completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub app_name: String,
    pub package: String,
    pub file_name: String,
    pub metrics: ReportMetrics,
    pub vulnerabilities: Vec<Vulnerability>,
    pub findings: Vec<Finding>,
    pub remediation: Vec<RemediationItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_report(report: &ReportSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(report).unwrap_or_default()
            );
        }
    }
}

/// Render the plain-text report.
pub fn render_text(report: &ReportSummary) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let m = &report.metrics;

    let _ = writeln!(out, "\n{}", "=".repeat(70));
    let _ = writeln!(out, "ANALYSIS REPORT — {} ({})", report.app_name, report.package);
    let _ = writeln!(out, "{}", "=".repeat(70));

    if !report.vulnerabilities.is_empty() {
        let _ = writeln!(out, "\nVULNERABILITIES ({}):", report.vulnerabilities.len());
        let mut vulns: Vec<_> = report.vulnerabilities.iter().collect();
        vulns.sort_by_key(|v| v.severity);
        for v in vulns {
            let _ = writeln!(out, "  [{:<8}] {} -- {}", v.severity.label(), v.title, v.location);
        }
    }

    if !report.findings.is_empty() {
        let _ = writeln!(out, "\nFINDINGS ({}):", report.findings.len());
        for f in &report.findings {
            let _ = writeln!(out, "  [{}] {}: {}", f.scanner, f.title, f.detail);
        }
    }

    if !report.remediation.is_empty() {
        let _ = writeln!(out, "\nREMEDIATION:");
        for r in &report.remediation {
            let _ = writeln!(out, "  {}. {} -- {}", r.priority, r.title, r.detail);
        }
    }

    let _ = writeln!(out, "\nSUMMARY:");
    let _ = writeln!(out, "  Security score:  {}/100", m.security_score);
    let _ = writeln!(out, "  Files analyzed:  {}", m.files_analyzed);
    let _ = writeln!(out, "  Total issues:    {}", m.total_issues());
    let _ = writeln!(
        out,
        "  By severity:     {} critical, {} high, {} medium, {} low, {} info",
        m.critical, m.high, m.medium, m.low, m.info
    );
    let _ = writeln!(out, "{}", "=".repeat(70));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_report;

    #[test]
    fn severity_orders_worst_first() {
        let mut severities = vec![Severity::Low, Severity::Critical, Severity::Medium];
        severities.sort();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Medium, Severity::Low]
        );
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn metrics_total_sums_all_severities() {
        let m = ReportMetrics {
            security_score: 50,
            files_analyzed: 10,
            duration_secs: 1.0,
            critical: 1,
            high: 2,
            medium: 3,
            low: 4,
            info: 5,
        };
        assert_eq!(m.total_issues(), 15);
    }

    #[test]
    fn render_text_lists_critical_issues_first() {
        let text = render_text(sample_report());
        let critical = text.find("[CRITICAL").expect("critical entry present");
        let low = text.find("[LOW").expect("low entry present");
        assert!(critical < low, "critical issues should be listed before low");
        assert!(text.contains("SUMMARY:"));
        assert!(text.contains("Security score:"));
    }

    #[test]
    fn report_serializes_to_json() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["app_name"], sample_report().app_name);
        assert!(json["vulnerabilities"].as_array().unwrap().len() > 0);
        assert_eq!(json["vulnerabilities"][0]["severity"], "critical");
        assert!(json["metrics"]["security_score"].is_u64());
    }
}
