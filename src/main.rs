//! `gift-exchange` - print a family gift exchange.
//!
//! Usage: `gift-exchange [MEMBER_COUNT]`
//!
//! See [`family_gift_exchange::config::AppConfig`] for the environment
//! variables. Pairings go to stdout, logs to stderr.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use family_gift_exchange::config::AppConfig;
use family_gift_exchange::{logging, GiftExchange, Roster};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env()?.with_args(std::env::args().skip(1))?;

    let roster = match &config.roster_path {
        Some(path) => Roster::load(path)
            .with_context(|| format!("loading roster {}", path.display()))?,
        None => Roster::default_names(config.member_count)?,
    };
    info!(members = roster.len(), families = roster.family_units().len(), "roster loaded");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let assignment = GiftExchange::new(config.exchange)
        .generate(roster.family_units(), &mut rng)
        .context("generating gift exchange")?;

    for line in roster.render(&assignment) {
        println!("{line}");
    }
    Ok(())
}
