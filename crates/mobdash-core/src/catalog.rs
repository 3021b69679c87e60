//! The scanner catalog — static configuration describing the analysis
//! techniques a user can enable for a run.
//!
//! The catalog is immutable and process-wide. Entries flagged `required`
//! are always part of the selection and cannot be deselected; the flag is
//! checked generically so the invariant survives catalog changes.

use std::collections::HashSet;

/// One selectable analysis technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Every scanner the dashboard offers, in display order.
pub const SCANNERS: &[ScannerDescriptor] = &[
    ScannerDescriptor {
        id: "mobsf",
        name: "MobSF Static Analysis",
        description: "Decompiles the package and audits the manifest, permissions, and code patterns.",
        required: true,
    },
    ScannerDescriptor {
        id: "frida",
        name: "Frida Dynamic Instrumentation",
        description: "Hooks the running app to observe runtime API usage and TLS behavior.",
        required: false,
    },
    ScannerDescriptor {
        id: "apkid",
        name: "APKiD Packer Detection",
        description: "Identifies packers, obfuscators, and anti-analysis tooling in the binary.",
        required: false,
    },
    ScannerDescriptor {
        id: "quark",
        name: "Quark Malware Scoring",
        description: "Scores the package against known malicious behavior rules.",
        required: false,
    },
];

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static ScannerDescriptor> {
    SCANNERS.iter().find(|s| s.id == id)
}

/// Whether the catalog marks `id` as required. Unknown ids are not required.
pub fn is_required(id: &str) -> bool {
    find(id).map(|s| s.required).unwrap_or(false)
}

/// The initial scanner selection: exactly the required entries.
pub fn default_selection() -> HashSet<String> {
    SCANNERS
        .iter()
        .filter(|s| s.required)
        .map(|s| s.id.to_string())
        .collect()
}
