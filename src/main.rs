//! certwatch - certificate expiry reporting for exported CA certificates
//!
//! Scans a folder of PEM/DER certificate files, classifies each by days
//! until expiry, and writes CSV and HTML reports plus an optional email
//! summary.

use certwatch::cli::Cli;
use certwatch::config::Settings;
use certwatch::runner::{self, RunOptions, RunOutcome};
use certwatch::utils::progress::{print_fail, print_pass, print_warning};
use certwatch::utils::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Run logs are a required observable; default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    // CLI arguments override file configuration
    if let Some(dir) = cli.cert_dir {
        settings.scan.cert_dir = dir;
    }
    if let Some(path) = cli.csv {
        settings.output.csv_path = path;
    }
    if let Some(path) = cli.html {
        settings.output.html_path = path;
    }
    if let Some(parallel) = cli.parallel {
        settings.scan.parallel = parallel.max(1);
    }
    if cli.sequential {
        settings.scan.parallel = 1;
    }

    let options = RunOptions {
        show_progress: !cli.quiet,
        send_email: !cli.no_email,
    };

    let outcome = runner::run(&settings, &options).await?;

    if !cli.quiet {
        print_summary(&outcome);
    }

    Ok(())
}

fn print_summary(outcome: &RunOutcome) {
    println!();
    println!(
        "{}",
        style(format!(
            "Scanned {} files: {} records, {} failures",
            outcome.files_found, outcome.records, outcome.failures
        ))
        .bold()
    );

    if outcome.files_found == 0 {
        println!("  No certificate files found; no reports generated.");
        return;
    }

    let summary = &outcome.summary;
    print_pass(&format!("Valid: {}", summary.valid));
    print_warning(&format!("Expiring soon: {}", summary.expiring_soon));
    print_fail(&format!(
        "Critical: {}, Expired: {}",
        summary.critical, summary.expired
    ));

    match &outcome.csv_written {
        Some(path) => print_pass(&format!("CSV report: {}", path.display())),
        None => print_fail("CSV report not written"),
    }
    match &outcome.html_written {
        Some(path) => print_pass(&format!("HTML report: {}", path.display())),
        None => print_fail("HTML report not written"),
    }
}
