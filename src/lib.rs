//! Five-card poker hand ranking and head-to-head comparison.
//!
//! A hand string like `"TC TH 5C 5H KH"` decodes into a [`Hand`], whose
//! normalized [`Ranks`] feed the [`Evaluator`]. The evaluator picks the
//! strongest matching category and yields a [`Ranking`], a totally ordered
//! key that carries its own kickers. A [`Strength`] pairs a hand with its
//! ranking and decides a showdown against another as an [`Outcome`].
//!
//! ```
//! use showdown::cards::{Outcome, Strength};
//!
//! let hand = Strength::try_from("TC TH 5C 5H KH").unwrap();
//! let other = Strength::try_from("9C 9H 5C 5H AC").unwrap();
//! assert_eq!(hand.compare_with(&other), Outcome::Win);
//! ```
//!
//! [`Hand`]: cards::Hand
//! [`Ranks`]: cards::Ranks
//! [`Evaluator`]: cards::Evaluator
//! [`Ranking`]: cards::Ranking
//! [`Strength`]: cards::Strength
//! [`Outcome`]: cards::Outcome
pub mod cards;

#[cfg(feature = "cli")]
pub mod cli;

/// Initialize terminal logging, plus a file log when a path is given.
/// Location, target, and thread columns are turned off.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug.max(level),
            config.clone(),
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
