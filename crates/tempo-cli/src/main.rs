//! tempo — render a weekly recurring schedule as a printable calendar.
//!
//! Reads a TOML source (`[config]` + `[[slot]]` entries), rejects any
//! overlapping slots, and writes a standalone TikZ document next to the
//! source (or a CSV dump of the drawing primitives with `--format csv`).
//!
//! ```text
//! tempo demos/week.toml            # → demos/week.tex
//! tempo demos/week.toml --seed 3   # reproducible colors
//! pdflatex demos/week.tex
//! ```
//!
//! `RUST_LOG` overrides the log filter (default `info`, `debug` with `-v`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tempo_output::{CsvWriter, TikzWriter, render};
use tempo_schedule::{Schedule, load_schedule_toml};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// Standalone LaTeX/TikZ source.
    Tikz,
    /// One CSV row per drawing primitive.
    Csv,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Tikz => "tex",
            Format::Csv  => "csv",
        }
    }
}

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Render a weekly recurring schedule as a printable calendar")]
struct Cli {
    /// Schedule source (TOML).
    source: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Tikz)]
    format: Format,

    /// Output path (default: the source path with the format's extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Palette shuffle seed; overrides `seed` in the source.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug logging and a textual dump of every day's timeline.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut schedule = load_schedule_toml(&cli.source)
        .with_context(|| format!("failed to build schedule from {}", cli.source.display()))?;
    if let Some(seed) = cli.seed {
        schedule.set_seed(Some(seed));
    }
    if cli.verbose {
        println!("{schedule}");
    }

    let output = cli
        .output
        .unwrap_or_else(|| cli.source.with_extension(cli.format.extension()));
    write(&schedule, cli.format, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("wrote {}", output.display());
    Ok(())
}

fn write(schedule: &Schedule, format: Format, path: &Path) -> Result<()> {
    match format {
        Format::Tikz => render(schedule, &mut TikzWriter::create(path)?)?,
        Format::Csv  => render(schedule, &mut CsvWriter::create(path)?)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
