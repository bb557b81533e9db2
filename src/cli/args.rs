//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certwatch")]
#[command(version)]
#[command(about = "Certificate expiry classification and reporting", long_about = None)]
pub struct Cli {
    /// Directory containing exported certificate files
    #[arg(value_name = "CERT_DIR")]
    pub cert_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV report output path
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// HTML report output path
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Number of parallel extraction workers
    #[arg(short, long, value_name = "N")]
    pub parallel: Option<usize>,

    /// Process files sequentially in enumeration order
    #[arg(long, conflicts_with = "parallel")]
    pub sequential: bool,

    /// Skip the email notification even if configured
    #[arg(long)]
    pub no_email: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress the terminal summary and progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
