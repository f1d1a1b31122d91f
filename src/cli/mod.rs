// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{RngSource, ShuffleMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generator and strength meter", long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Randomness source: os, thread or fast (fast is not cryptographically secure)
    #[arg(long, global = true)]
    pub rng: Option<RngSource>,

    /// Seed for reproducible output (overrides --rng)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Shuffle algorithm: fisher-yates or random-sort
    #[arg(long, global = true)]
    pub shuffle: Option<ShuffleMode>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Folds command-line overrides into the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(rng) = self.rng {
            config.rng_source = rng;
        }
        if let Some(seed) = self.seed {
            config.rng_source = RngSource::Seeded(seed);
        }
        if let Some(shuffle) = self.shuffle {
            config.shuffle_mode = shuffle;
        }
        if let Some(CliCommand::Serve { port: Some(port) }) = &self.command {
            config.web_port = *port;
        }
    }
}

/// Builds the generator described by `config`.
pub fn build_generator(config: &Config) -> PasswordGenerator {
    PasswordGenerator::new()
        .with_rng_source(config.rng_source)
        .with_shuffle_mode(config.shuffle_mode)
}
