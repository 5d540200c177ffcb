// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{DEFAULT_LOG_FILTER, DEFAULT_OUT_DIR, VERBOSE_LOG_FILTER};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::file::{export_tables, load_pools, load_snapshots};
use crate::progress::Progress;
use crate::runner::{self, Capture};

#[derive(Debug, Parser)]
#[command(name = "ftl_scrape")]
#[command(about = "Rebuild fencing tableau and pool results from captured tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild matches and the fencer roster from bracket snapshots
    Tableau {
        /// Snapshot files (.json, .csv or .tsv), in capture order
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,
    },
    /// Parse pool matrices into bouts and a ranked summary
    Pools {
        /// JSON array of pools
        pools: PathBuf,
    },
    /// Run both phases
    All {
        #[arg(long)]
        pools: PathBuf,

        #[arg(required = true)]
        snapshots: Vec<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output directory
    #[arg(short, long, global = true, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Emit a header line in each table
    #[arg(long, global = true)]
    pub include_headers: bool,

    /// Print tables instead of writing files
    #[arg(long, global = true)]
    pub stdout: bool,
}

impl OutputArgs {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: self.format,
            out_dir: self.out.clone(),
            include_headers: self.include_headers,
        }
    }
}

/// Install the fmt subscriber on stderr. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

/// Forwards runner progress into the log.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        info!(phases = total, "starting");
    }
    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
}

fn capture_for(command: &Command) -> Result<Capture> {
    let mut capture = Capture::default();
    let (snapshots, pools) = match command {
        Command::Tableau { snapshots } => (Some(snapshots), None),
        Command::Pools { pools } => (None, Some(pools)),
        Command::All { pools, snapshots } => (Some(snapshots), Some(pools)),
    };
    if let Some(paths) = snapshots {
        capture.snapshots = Some(load_snapshots(paths).wrap_err("loading tableau snapshots")?);
    }
    if let Some(path) = pools {
        capture.pools = Some(load_pools(path).wrap_err("loading pools")?);
    }
    Ok(capture)
}

pub fn run(cli: Cli) -> Result<()> {
    let capture = capture_for(&cli.command)?;
    let report = runner::run(&capture, Some(&mut LogProgress));

    for d in report.diagnostics() {
        warn!("{d}");
    }

    let tables = report.datasets();
    let export = cli.output.export_options();
    if cli.output.stdout {
        for (kind, data) in &tables {
            println!("# {}", kind.title());
            print!("{}", to_export_string(data, export.include_headers, export.delim()));
        }
    } else if !tables.is_empty() {
        let written = export_tables(&export, &tables).wrap_err("writing exports")?;
        info!(files = written.len(), dir = %export.out_dir.display(), "done");
    }

    let errors = report.errors();
    match errors.as_slice() {
        [] => Ok(()),
        [only] => Err(eyre!("{only}")),
        many => Err(eyre!(
            "{} phases failed: {}",
            many.len(),
            many.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
        )),
    }
}
