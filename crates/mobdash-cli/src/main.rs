//! Mobile Security Dashboard CLI - runs one simulated analysis headless.
//!
//! Usage:
//!   mobdash app.apk
//!   mobdash app.apk --scanner frida --scanner quark --format json
//!   mobdash app.apk --tick-ms 10

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mobdash_core::controller::{WorkflowController, WorkflowPhase};
use mobdash_core::engine::{AnalysisEngine, SampleReportEngine};
use mobdash_core::report::{print_report, OutputFormat};

#[derive(Parser)]
#[command(name = "mobdash")]
#[command(about = "Mobile application security analysis (simulated)")]
struct Cli {
    /// Application package to analyze (.apk, .ipa, .aab)
    file: PathBuf,

    /// Additional scanners to enable (the required scanner is always on)
    #[arg(short, long)]
    scanner: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Poll interval for the progress simulation, in milliseconds
    #[arg(long, default_value = "40")]
    tick_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut controller = WorkflowController::new();
    controller.set_file(Some(cli.file.clone()));
    for id in &cli.scanner {
        controller.toggle_scanner(id);
    }

    eprintln!("[*] Analyzing {}...", cli.file.display());
    eprintln!(
        "[*] Scanners: {}",
        controller
            .selected_scanners()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );

    controller.try_start(Instant::now())?;

    while controller.phase() != WorkflowPhase::Summary {
        std::thread::sleep(Duration::from_millis(cli.tick_ms));
        controller.poll(Instant::now());
        eprint!("\r[*] Progress: {:>3.0}%", controller.progress());
        let _ = std::io::stderr().flush();
    }
    eprintln!();

    let engine = SampleReportEngine;
    let report = engine.analyze(&cli.file, controller.selected_scanners())?;

    print_report(&report, cli.format);

    Ok(())
}
