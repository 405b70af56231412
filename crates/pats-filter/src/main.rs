//! The `pats-filter` command.
//!
//! Reads PostiATS compiler output from files or stdin and prints each located
//! diagnostic with its embedded terms folded into legible, width-wrapped
//! text. Other lines are printed unchanged.
//!
//! Options:
//! - `--width` - Maximum width of folded lines
//! - `--no-simplify` - Print terms without rewriting known shapes
//! - `--no-column` - Omit the column from message locations
//! - `--absolute-paths` - Keep message paths as reported by the compiler
//! - `--json` - Print located diagnostics as JSON (one object per line)
//! - `--config` - Path to a `pats-filter.toml` file

mod config;
mod error;
mod filter;
mod message;
mod paths;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::FilterConfig;
use crate::error::FilterError;

#[derive(Parser)]
#[command(
    name = "pats-filter",
    version,
    about = "Fold PostiATS diagnostics into legible messages"
)]
struct Cli {
    /// Compiler output files to read; stdin when none are given or for `-`
    files: Vec<PathBuf>,

    /// Maximum width of folded lines
    #[arg(long)]
    width: Option<usize>,

    /// Print terms without rewriting known shapes
    #[arg(long = "no-simplify")]
    no_simplify: bool,

    /// Omit the column from message locations
    #[arg(long = "no-column")]
    no_column: bool,

    /// Keep message paths as reported instead of relative to the working directory
    #[arg(long = "absolute-paths")]
    absolute_paths: bool,

    /// Print located diagnostics as JSON (one object per line)
    #[arg(long)]
    json: bool,

    /// Config file (default: pats-filter.toml in the working directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Apply the flags that were given on top of `config`.
    fn apply(&self, config: &mut FilterConfig) {
        if let Some(width) = self.width {
            config.format.max_width = width;
        }
        if self.no_simplify {
            config.format.simplify = false;
        }
        if self.no_column {
            config.column = false;
        }
        if self.absolute_paths {
            config.relative_paths = false;
        }
        if self.json {
            config.json = true;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), FilterError> {
    let cwd = std::env::current_dir()?;
    let mut config = config::load(cli.config.as_deref(), &cwd)?;
    cli.apply(&mut config);
    tracing::debug!(?config, "effective configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.files.is_empty() {
        filter_stdin(&mut out, &config, &cwd)?;
    }
    for path in &cli.files {
        if path.as_os_str() == "-" {
            filter_stdin(&mut out, &config, &cwd)?;
        } else {
            filter_file(path, &mut out, &config, &cwd)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn filter_stdin<W: Write>(out: &mut W, config: &FilterConfig, cwd: &Path) -> Result<(), FilterError> {
    let lines = filter::filter_stream(io::stdin().lock(), out, config, cwd)?;
    tracing::debug!(lines, "filtered stdin");
    Ok(())
}

fn filter_file<W: Write>(
    path: &Path,
    out: &mut W,
    config: &FilterConfig,
    cwd: &Path,
) -> Result<(), FilterError> {
    let file = File::open(path).map_err(|source| FilterError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = filter::filter_stream(BufReader::new(file), out, config, cwd)?;
    tracing::debug!(path = %path.display(), lines, "filtered file");
    Ok(())
}
