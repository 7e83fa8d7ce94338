//! Environment-driven defaults for the CLI.
//!
//! - `ALGOTRACE_FORMAT`: `json` or `text` (default: `json`)
//! - `ALGOTRACE_SPEED_MS`: delay between played steps (default: 500)
//! - `ALGOTRACE_SEED`: optional `u64` seeding random inputs and pivots
//!
//! Command-line flags override every value read here.

use std::fmt;
use std::str::FromStr;

use algotrace_core::playback::DEFAULT_SPEED_MS;
use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!("invalid output format '{}', expected json/text", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub speed_ms: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            speed_ms: DEFAULT_SPEED_MS,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset keys keep their default;
    /// set but unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Config::default();
        if let Some(raw) = lookup("ALGOTRACE_FORMAT") {
            config.format = raw.parse()?;
        }
        if let Some(raw) = lookup("ALGOTRACE_SPEED_MS") {
            config.speed_ms = raw
                .trim()
                .parse()
                .map_err(|_| format!("invalid ALGOTRACE_SPEED_MS '{}', expected milliseconds", raw))?;
        }
        if let Some(raw) = lookup("ALGOTRACE_SEED") {
            let seed = raw
                .trim()
                .parse()
                .map_err(|_| format!("invalid ALGOTRACE_SEED '{}', expected an unsigned integer", raw))?;
            config.seed = Some(seed);
        }
        Ok(config)
    }

    /// RNG for demo inputs and random pivots: seeded when a seed is set.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
