//! Configuration for the engine and for the `gift-exchange` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Engine options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Run the partial-mapping checks after every family unit.
    ///
    /// The final validation always runs; this only surfaces a broken
    /// intermediate state closer to where it happened.
    pub verify_partial: bool,
}

impl ExchangeConfig {
    /// Enable or disable the per-unit checks
    pub fn with_verify_partial(mut self, verify_partial: bool) -> Self {
        self.verify_partial = verify_partial;
        self
    }
}

/// Binary configuration loaded from environment variables.
///
/// All fields are optional; with nothing set the binary runs the whole
/// default roster, one member per family unit, with an unseeded random source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Use only the first N default names
    pub member_count: Option<usize>,
    /// JSON roster describing named families; takes precedence over `member_count`
    pub roster_path: Option<PathBuf>,
    /// Seed for a reproducible run
    pub seed: Option<u64>,
    /// Engine options
    pub exchange: ExchangeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                        | Default      |
    /// |--------------------------------|--------------|
    /// | `GIFT_EXCHANGE_MEMBER_COUNT`   | all names    |
    /// | `GIFT_EXCHANGE_ROSTER`         | unset        |
    /// | `GIFT_EXCHANGE_SEED`           | unset        |
    /// | `GIFT_EXCHANGE_VERIFY_PARTIAL` | `false`      |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let member_count = get("GIFT_EXCHANGE_MEMBER_COUNT")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("GIFT_EXCHANGE_MEMBER_COUNT must be a non-negative integer")?;

        let roster_path = get("GIFT_EXCHANGE_ROSTER").map(PathBuf::from);

        let seed = get("GIFT_EXCHANGE_SEED")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("GIFT_EXCHANGE_SEED must be a valid u64")?;

        let verify_partial = get("GIFT_EXCHANGE_VERIFY_PARTIAL")
            .map(|v| parse_flag(&v))
            .transpose()
            .context("GIFT_EXCHANGE_VERIFY_PARTIAL must be true/false")?
            .unwrap_or(false);

        Ok(Self {
            member_count,
            roster_path,
            seed,
            exchange: ExchangeConfig { verify_partial },
        })
    }

    /// Apply command-line overrides: the first positional argument is the
    /// member count.
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(count) = args.into_iter().next() {
            let count = count
                .parse::<usize>()
                .with_context(|| format!("member count `{count}` is not a number"))?;
            self.member_count = Some(count);
        }
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value `{other}`"),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
