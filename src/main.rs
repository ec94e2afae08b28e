use clap::Parser;
use rayon::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use oshash::output::{render_line, OutputOptions};
use oshash::HashError;

#[derive(Parser)]
#[command(name = "oshash", version, about = "OpenSubtitles hash calculator")]
struct Cli {
    /// Display binary values
    #[arg(short = 'b', long)]
    binary: bool,
    /// Display decimal values
    #[arg(short = 'd', long)]
    decimal: bool,
    /// Display hexadecimal values (the default when no format is chosen)
    #[arg(short = 'x', long)]
    hex: bool,
    /// Show filenames with output
    #[arg(short = 'f', long)]
    filenames: bool,
    /// Separator string for tabular output
    #[arg(long, default_value = "\t", value_name = "STRING")]
    separator: String,
    /// Read newline-delimited file paths from stdin instead of arguments
    #[arg(long)]
    pipe: bool,
    /// Files to hash
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = OutputOptions {
        hex: cli.hex,
        binary: cli.binary,
        decimal: cli.decimal,
        show_filenames: cli.filenames,
        separator: cli.separator,
    }
    .with_default_format();

    if cli.pipe {
        hash_stdin_paths(&opts)
    } else {
        hash_paths(&cli.files, &opts)
    }
}

/// Hash the argument paths in parallel, then print one line per path in
/// argument order.
fn hash_paths(files: &[PathBuf], opts: &OutputOptions) -> Result<()> {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, oshash::from_path(path)))
        .collect();

    let mut stdout = io::stdout().lock();
    for (path, result) in results {
        report(&mut stdout, &path.display().to_string(), result, opts)?;
    }
    Ok(())
}

/// Pipe mode: one file path per stdin line, hashed sequentially so each
/// result is printed as soon as its line arrives.
fn hash_stdin_paths(opts: &OutputOptions) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    for line in stdin.lines() {
        let path = line.context("Failed to read file path from stdin")?;
        report(&mut stdout, &path, oshash::from_path(&path), opts)?;
    }
    Ok(())
}

/// Print one hash outcome. Too-small inputs are reported inline and
/// processing continues; any other failure aborts the run.
fn report(
    out: &mut impl Write,
    path: &str,
    result: oshash::Result<u64>,
    opts: &OutputOptions,
) -> Result<()> {
    match result {
        Ok(hash) => writeln!(out, "{}", render_line(path, hash, opts))?,
        Err(HashError::DataTooSmall { .. }) => writeln!(out, "Too small")?,
        Err(e) => return Err(e).with_context(|| format!("Failed to hash {path}")),
    }
    Ok(())
}
