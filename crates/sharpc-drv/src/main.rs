use std::path::PathBuf;

use clap::Parser;
use sharpc_drv::{Config, Session};

/// sharpcc - lex C#-like source files and report the result.
#[derive(Parser, Debug)]
#[command(name = "sharpcc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes .cs source files and reports tokens or errors", long_about = None)]
struct Cli {
    /// Files or directories to lex. Directories are walked recursively for *.cs files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Print the full token stream per file instead of just a summary count.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let session = Session::new(Config {
        input_paths: cli.inputs,
        verbose: cli.verbose,
    });
    session.run()?;
    Ok(())
}
