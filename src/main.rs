use clap::Parser;
use std::path::Path;
use std::io::IsTerminal;
use anyhow::Context;

mod cli;
mod api;
mod core;
mod models;
mod generators;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::commands::generation_options;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    args.apply_to(&mut config);

    logging::init(&config).context("failed to initialise logging")?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = cli::build_generator(&config);
    match generator.rng_source() {
        models::RngSource::Fast => {
            log::warn!("Using a non-cryptographic random source; do not use these passwords for real accounts")
        }
        models::RngSource::Seeded(_) => {
            log::warn!("Using a seeded random source; anyone who knows the seed can reproduce these passwords")
        }
        _ => {}
    }

    match &args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            exclude_similar,
            count,
        }) => {
            let options = generation_options(
                &config.default_options(),
                *length,
                *no_uppercase,
                *no_lowercase,
                *no_numbers,
                *no_symbols,
                *exclude_similar,
            );
            options.validate(config.max_password_length)?;
            let generated = cli::handlers::handle_generate(&generator, &options, *count);
            println!("{}", cli::handlers::render_generated(&generated, args.json)?);
        }
        Some(CliCommand::Strength { password }) => {
            let password = match password {
                Some(password) => password.clone(),
                None => inquire::Password::new("Password to check:")
                    .without_confirmation()
                    .prompt()?,
            };
            let report = cli::handlers::handle_strength(&password);
            println!("{}", cli::handlers::render_strength(&report, args.json)?);
        }
        Some(CliCommand::Serve { .. }) => {
            api::start_server(generator, config)
                .await
                .context("API server failed")?;
        }
        None => {
            if !std::io::stdin().is_terminal() {
                anyhow::bail!("no command given and stdin is not a terminal; try `generate` or `strength`");
            }
            cli::menu::run_cli_menu(&generator, &config)?;
        }
    }

    Ok(())
}
