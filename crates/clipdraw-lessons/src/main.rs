mod cli;
mod lessons;
mod params;

use anyhow::Result;
use clap::Parser;
use clipdraw_engine::logging::{init_logging, LoggingConfig};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig::from_verbosity(args.verbosity).with_filter(args.log.clone()));
    log::debug!("{args:?}");

    lessons::run(&args)
}
