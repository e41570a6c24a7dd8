use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use mapcat::FileEmitter;

/// `mapcat <path>...` — every argument is a file path, hyphen-leading or
/// not. No flags, no help text, no version flag.
#[derive(Parser)]
#[command(name = "mapcat", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut emitter = FileEmitter::new(stdout);

    for path in &args.paths {
        emitter
            .emit_file(path)
            .with_context(|| path.display().to_string())?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // A run over zero paths is trivially successful. The first failure
    // aborts the run; files after it are never touched.
    if let Err(err) = run(&args) {
        eprintln!("mapcat: {:#}", err);
        process::exit(1);
    }
}
