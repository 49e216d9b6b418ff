use clap::Parser;
use std::path::PathBuf;

/// Static part of the command line. Alias flags are appended at runtime,
/// see [`crate::cli::alias`].
#[derive(Parser, Debug)]
#[command(name = "hw")]
#[command(about = "Print a Hello, World! snippet in the language of your choice")]
#[command(version)]
pub struct Args {
    /// Language name (e.g., c, cpp, rust, python)
    #[arg(short = 'l', long, value_name = "LANG")]
    pub lang: Option<String>,

    /// List available languages
    #[arg(long)]
    pub list: bool,

    /// Write the snippet to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding user templates (<lang>.tmpl or <lang>.txt)
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Explain which template was used
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
