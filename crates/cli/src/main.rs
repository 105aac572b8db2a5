//! Cuenca CLI - drainage basin labeling for elevation grids

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cuenca_algorithms::hydrology::delineate;
use cuenca_core::io::{read_problem_set, write_case};

#[derive(Parser)]
#[command(name = "cuenca")]
#[command(author, version, about = "Label drainage basins on elevation grids", long_about = None)]
struct Cli {
    /// Input problem set file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };

    let grids = read_problem_set(&text).context("invalid problem set")?;
    info!(cases = grids.len(), "problem set loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, mut grid) in grids.into_iter().enumerate() {
        let case_nb = i + 1;
        let start = Instant::now();
        let sink_count =
            delineate(&mut grid).with_context(|| format!("labeling case {case_nb} failed"))?;
        info!(
            case = case_nb,
            sinks = sink_count,
            elapsed = ?start.elapsed(),
            "case solved"
        );
        write_case(&mut out, &grid, case_nb)
            .with_context(|| format!("writing case {case_nb} failed"))?;
    }
    out.flush()?;

    Ok(())
}
