//! Generates the LUME desktop app icons: a lightning bolt in the brand
//! orange, written at every size the Tauri bundler and the Microsoft Store
//! expect.

use std::process;

use clap::Parser;

use lume_icons::commands::generate::{self, GenerationReport, ProgressEvent, RunOutcome};
use lume_icons::config::IconConfig;

#[derive(Parser)]
#[command(name = "lume-icons")]
#[command(version, about = "Generate the LUME app icon set with the lightning bolt design")]
struct Cli {}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn format_event(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::Started { output_dir, accent } => format!(
            "🔄 Generating LUME app icons with lightning bolt design...\n\
             📁 Output directory: {}\n\
             🎨 Primary color: {}",
            output_dir.display(),
            accent
        ),
        ProgressEvent::BackupDirCreated { path } => {
            format!("📦 Created backup directory: {}", path.display())
        }
        ProgressEvent::BackedUp { file } => format!("📦 Backed up: {}", file),
        ProgressEvent::AlreadyBackedUp { file } => format!("   Already backed up: {}", file),
        ProgressEvent::Created { path, detail } => {
            format!("Created: {} ({})", path.display(), detail)
        }
    }
}

fn print_summary(config: &IconConfig, report: &GenerationReport) {
    println!("\n✅ Icon generation complete!");
    println!("\n📋 Generated files:");
    for file in &report.files {
        println!("   • {}", file);
    }

    println!("\n🔄 To apply changes:");
    println!("   1. The icons are already in the correct location");
    println!(
        "   2. Rebuild the Tauri app: cd {} && npm run tauri build",
        config.app_dir().display()
    );
    println!(
        "   3. Original icons backed up in: {}",
        report.backup_dir.display()
    );
}

fn main() {
    Cli::parse();
    setup_logging();

    let config = IconConfig::default();

    let result = generate::run(&config, |event| println!("{}", format_event(&event)));

    match result {
        Ok(RunOutcome::Generated(report)) => print_summary(&config, &report),
        Ok(RunOutcome::MissingOutputDir(dir)) => {
            eprintln!("Error: Icon directory not found: {}", dir.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
