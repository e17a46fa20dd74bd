use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "grade-report")]
#[command(about = "Render an aligned, colorized score table from a test-harness grading report")]
#[command(version)]
pub struct CliArgs {
    /// Path to the grading report produced by the test harness
    #[arg(long, short = 'i', value_name = "PATH", default_value = "grade")]
    pub input: PathBuf,

    /// Write "0" (all required tests passed) or "1" to this sentinel file
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export the extracted categories and totals as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Disable ANSI colors in the rendered table
    #[arg(long)]
    pub no_color: bool,
}
