use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Rank and compare five-card poker hands", long_about = None)]
pub struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,
    #[command(subcommand)]
    pub query: Query,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Query {
    #[command(
        about = "Decide whether HAND beats OTHER (ties lose)",
        alias = "cmp"
    )]
    Compare {
        #[arg(required = true)]
        hand: String,
        #[arg(required = true)]
        other: String,
    },
    #[command(about = "Show the ranking of a hand", alias = "rk")]
    Rank {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Read hands from stdin, five cards to rank or ten to compare")]
    Repl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_alias() {
        let args = Args::try_parse_from(["showdown", "cmp", "TC TH 5C 5H KH", "9C 9H 5C 5H AC"]).unwrap();
        match args.query {
            Query::Compare { hand, other } => {
                assert_eq!(hand, "TC TH 5C 5H KH");
                assert_eq!(other, "9C 9H 5C 5H AC");
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn global_flags() {
        let args = Args::try_parse_from(["showdown", "rank", "TS JS QS KS AS", "-vv", "--json"]).unwrap();
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert!(args.json);
        assert!(!args.plain);
    }

    #[test]
    fn compare_needs_two_hands() {
        assert!(Args::try_parse_from(["showdown", "compare", "TS JS QS KS AS"]).is_err());
    }

    #[test]
    fn verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
