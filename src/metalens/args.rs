use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metalens")]
#[command(about = "Inspect the metadata properties of files and folders", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    /// Path to inspect; prompts interactively when omitted
    pub path: Option<PathBuf>,

    /// Catalog file to use instead of the embedded one
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Show warnings for properties that failed to resolve
    #[arg(short, long)]
    pub verbose: bool,
}
