use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jsstrip binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsstrip",
    version,
    about = "Strip comments and insignificant whitespace from JavaScript"
)]
pub struct CliArgs {
    /// Files or directories to strip. Reads stdin when empty or `-`.
    pub inputs: Vec<PathBuf>,

    /// Output file for a single input, otherwise an output directory.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// JSON config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Strip in memory and report errors without writing anything.
    #[arg(long)]
    pub check: bool,
}

impl CliArgs {
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty() || (self.inputs.len() == 1 && self.inputs[0].as_os_str() == "-")
    }
}
