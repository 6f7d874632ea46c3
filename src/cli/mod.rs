pub mod query;
pub use query::*;

pub mod report;
pub use report::*;

use crate::cards::Outcome;
use crate::cards::Strength;
use anyhow::Context;
use colored::Colorize;
use std::io::BufRead;
use std::io::Write;

/// What one REPL line asks for.
#[derive(Debug, PartialEq)]
enum Reply {
    Rank(Strength),
    Compare(Strength, Strength),
}

pub struct CLI {
    json: bool,
}

impl From<&Args> for CLI {
    fn from(args: &Args) -> Self {
        colored::control::set_override(!args.plain);
        Self { json: args.json }
    }
}

impl CLI {
    pub fn run(&self, query: &Query) -> anyhow::Result<()> {
        match query {
            Query::Compare { hand, other } => {
                let hand = Self::parse(hand).context("invalid HAND")?;
                let other = Self::parse(other).context("invalid OTHER")?;
                self.compare(&hand, &other)
            }
            Query::Rank { hand } => {
                let hand = Self::parse(hand).context("invalid HAND")?;
                self.rank(&hand)
            }
            Query::Repl => self.repl(),
        }
    }

    fn repl(&self) -> anyhow::Result<()> {
        log::info!("reading hands from stdin");
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{}", self.prompt());
            std::io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            match line.trim() {
                "" => continue,
                "quit" | "exit" => break,
                input => match self.handle(input) {
                    Err(e) => eprintln!("handle error: {:#}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    /// JSON output stays machine-readable, so no prompt
    fn prompt(&self) -> &'static str {
        if self.json { "" } else { "> " }
    }

    fn handle(&self, input: &str) -> anyhow::Result<()> {
        match Self::read(input)? {
            Reply::Rank(hand) => self.rank(&hand),
            Reply::Compare(hand, other) => self.compare(&hand, &other),
        }
    }

    /// five cards rank a hand, ten cards compare the first five to the rest
    fn read(input: &str) -> anyhow::Result<Reply> {
        let tokens = input.split_whitespace().collect::<Vec<&str>>();
        match tokens.len() {
            5 => Ok(Reply::Rank(Self::parse(&tokens.join(" "))?)),
            10 => {
                let hand = Self::parse(&tokens[..5].join(" "))?;
                let other = Self::parse(&tokens[5..].join(" "))?;
                Ok(Reply::Compare(hand, other))
            }
            n => anyhow::bail!("expected 5 or 10 cards, found {}", n),
        }
    }

    fn rank(&self, hand: &Strength) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&Entry::from(hand))?);
        } else {
            println!("{}", hand);
        }
        Ok(())
    }

    fn compare(&self, hand: &Strength, other: &Strength) -> anyhow::Result<()> {
        let verdict = Verdict::from((hand, other));
        if self.json {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        } else {
            println!("{}", hand);
            println!("{}", other);
            println!("{}", Self::paint(verdict.outcome));
        }
        Ok(())
    }

    fn parse(hand: &str) -> anyhow::Result<Strength> {
        Strength::try_from(hand).with_context(|| format!("could not read hand {:?}", hand))
    }

    fn paint(outcome: Outcome) -> colored::ColoredString {
        match outcome {
            Outcome::Win => outcome.to_string().green().bold(),
            Outcome::Loss => outcome.to_string().red().bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Ranking;

    #[test]
    fn five_cards_rank() {
        match CLI::read("TS JS QS KS AS").unwrap() {
            Reply::Rank(hand) => assert_eq!(hand.ranking(), Ranking::RoyalFlush),
            reply => panic!("expected rank, got {:?}", reply),
        }
    }

    #[test]
    fn ten_cards_compare_halves() {
        match CLI::read("  TC TH 5C 5H KH   9C 9H 5C 5H AC ").unwrap() {
            Reply::Compare(hand, other) => {
                assert_eq!(hand, Strength::try_from("TC TH 5C 5H KH").unwrap());
                assert_eq!(other, Strength::try_from("9C 9H 5C 5H AC").unwrap());
                assert_eq!(hand.compare_with(&other), Outcome::Win);
            }
            reply => panic!("expected compare, got {:?}", reply),
        }
    }

    #[test]
    fn other_counts_are_reported() {
        let err = CLI::read("TC TH 5C 5H KH 9C 9H").unwrap_err();
        assert_eq!(err.to_string(), "expected 5 or 10 cards, found 7");
        assert!(CLI::read("TC TH 5C 5H ZH").is_err());
    }

    #[test]
    fn prompt_only_for_text() {
        assert_eq!(CLI { json: false }.prompt(), "> ");
        assert_eq!(CLI { json: true }.prompt(), "");
    }

    #[test]
    fn handle_returns_bad_lines_as_errors() {
        let cli = CLI { json: true };
        assert!(cli.handle("TC TH 5C").is_err());
        assert!(cli.handle("TC TH 5C 5H KH").is_ok());
    }
}
