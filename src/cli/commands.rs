// src/cli/commands.rs
use clap::Subcommand;

use crate::models::PasswordGenerationOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 16)
        #[arg(short, long)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out numbers
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Exclude similar characters (i, l, 1, L, o, 0, O)
        #[arg(short = 'x', long)]
        exclude_similar: bool,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Score a password from 0 to 5
    Strength {
        /// Password to check; prompted for (hidden) when omitted
        password: Option<String>,
    },

    /// Run only the HTTP API
    Serve {
        /// API server port (defaults to WEB_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Turns `generate` flags into options, starting from configured defaults.
pub fn generation_options(
    defaults: &PasswordGenerationOptions,
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    exclude_similar: bool,
) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length: length.unwrap_or(defaults.length),
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_numbers: !no_numbers,
        include_symbols: !no_symbols,
        exclude_similar: exclude_similar || defaults.exclude_similar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_turn_classes_off() {
        let options = generation_options(
            &PasswordGenerationOptions::default(),
            Some(8),
            true,
            false,
            false,
            true,
            false,
        );
        assert_eq!(options.length, 8);
        assert!(!options.include_uppercase);
        assert!(options.include_lowercase);
        assert!(options.include_numbers);
        assert!(!options.include_symbols);
        assert!(!options.exclude_similar);
    }

    #[test]
    fn configured_defaults_apply_without_flags() {
        let defaults = PasswordGenerationOptions { length: 32, exclude_similar: true, ..Default::default() };
        let options = generation_options(&defaults, None, false, false, false, false, false);
        assert_eq!(options.length, 32);
        assert!(options.exclude_similar);
    }
}
