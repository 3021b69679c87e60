//! mobdash-core — shared library for the mobile security dashboard.
//!
//! Provides the workflow controller (upload → configure → run → summarize),
//! the scanner catalog, the report model with sample data, and the
//! analysis-engine contract used by both the CLI and GUI frontends.

pub mod catalog;
pub mod controller;
pub mod engine;
pub mod report;
pub mod samples;
