//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::LogTarget;

#[derive(Debug, Parser)]
#[command(
    name = "tcalc",
    about = "Terminal calculator with a running history",
    version
)]
pub struct Cli {
    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
    pub eval: Option<String>,

    /// With --eval, print the full response as JSON
    #[arg(long, requires = "eval")]
    pub json: bool,

    /// Append logs to this file while the interactive calculator runs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        self.eval.is_some()
    }

    /// One-shot runs log to stderr; the interactive UI only logs to a file.
    pub fn log_target(&self) -> LogTarget {
        match (&self.eval, &self.log_file) {
            (_, Some(path)) => LogTarget::File(path.clone()),
            (Some(_), None) => LogTarget::Stderr,
            (None, None) => LogTarget::Disabled,
        }
    }
}
