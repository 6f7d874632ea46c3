//! Showdown Binary
//!
//! Ranks and compares five-card poker hands from the command line.

use clap::Parser;
use showdown::cli::Args;
use showdown::cli::CLI;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    showdown::log(args.level(), args.log_file.as_deref())?;
    CLI::from(&args).run(&args.query)
}
