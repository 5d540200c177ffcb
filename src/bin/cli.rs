// src/bin/cli.rs
use clap::Parser;
use ftl_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    cli::init_tracing(args.verbose);
    cli::run(args)
}
