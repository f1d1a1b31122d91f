// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

impl PasswordGenerationOptions {
    /// Checks the length against the bounds an adapter is willing to serve.
    ///
    /// The generator itself accepts any length; this is for callers that take
    /// options from the outside world.
    pub fn validate(&self, max_length: usize) -> Result<(), OptionsError> {
        if self.length == 0 {
            return Err(OptionsError::TooShort);
        }
        if self.length > max_length {
            return Err(OptionsError::TooLong { max: max_length, got: self.length });
        }
        Ok(())
    }

    // Short description used in logs; never includes generated output
    pub fn summary(&self) -> String {
        let mut classes = Vec::new();
        if self.include_uppercase { classes.push("upper"); }
        if self.include_lowercase { classes.push("lower"); }
        if self.include_numbers { classes.push("digits"); }
        if self.include_symbols { classes.push("symbols"); }
        if classes.is_empty() { classes.push("fallback"); }

        format!(
            "length={} classes={}{}",
            self.length,
            classes.join("+"),
            if self.exclude_similar { " exclude_similar" } else { "" }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Password length must be at least 1 character")]
    TooShort,

    #[error("Password length must be at most {max} characters (got {got})")]
    TooLong { max: usize, got: usize },
}

/// Where the generator draws its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngSource {
    /// Operating system CSPRNG.
    #[default]
    Os,
    /// Thread-local CSPRNG seeded from the OS.
    Thread,
    /// Small non-cryptographic PRNG. Matches the weak source of the old
    /// browser generator; not suitable for real secrets.
    Fast,
    /// ChaCha20 seeded with a fixed value, for reproducible output.
    Seeded(u64),
}

impl fmt::Display for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngSource::Os => write!(f, "os"),
            RngSource::Thread => write!(f, "thread"),
            RngSource::Fast => write!(f, "fast"),
            RngSource::Seeded(seed) => write!(f, "seeded({})", seed),
        }
    }
}

impl FromStr for RngSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "os" => Ok(RngSource::Os),
            "thread" => Ok(RngSource::Thread),
            "fast" | "weak" => Ok(RngSource::Fast),
            other => other
                .strip_prefix("seed:")
                .and_then(|seed| seed.parse().ok())
                .map(RngSource::Seeded)
                .ok_or_else(|| format!("unknown rng source '{}'", s)),
        }
    }
}

/// How the assembled characters are reordered before being returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// Uniform Fisher-Yates shuffle.
    #[default]
    FisherYates,
    /// Sort driven by a coin-flip comparator. Kept for output compatibility
    /// with the browser generator; permutations are not uniform.
    RandomSort,
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleMode::FisherYates => write!(f, "fisher-yates"),
            ShuffleMode::RandomSort => write!(f, "random-sort"),
        }
    }
}

impl FromStr for ShuffleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fisher-yates" | "fisher_yates" | "uniform" => Ok(ShuffleMode::FisherYates),
            "random-sort" | "random_sort" | "legacy" => Ok(ShuffleMode::RandomSort),
            _ => Err(format!("unknown shuffle mode '{}'", s)),
        }
    }
}
