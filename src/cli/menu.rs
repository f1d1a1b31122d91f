// src/cli/menu.rs
use inquire::{Confirm, CustomType, InquireError, Password, PasswordDisplayMode, Select};

use crate::cli::handlers;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;

const GENERATE: &str = "🔐  Generate secure password";
const CHECK: &str = "📊  Check password strength";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(generator: &PasswordGenerator, config: &Config) -> anyhow::Result<()> {
    loop {
        let choice = match Select::new("What would you like to do?", vec![GENERATE, CHECK, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match choice {
            GENERATE => generate_interactive(generator, config),
            CHECK => check_interactive(),
            _ => break,
        };

        match result {
            Ok(()) => {}
            // Esc inside a sub-prompt goes back to the menu
            Err(e) if is_cancel(&e) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    log::debug!("Interactive menu closed");
    Ok(())
}

fn generate_interactive(generator: &PasswordGenerator, config: &Config) -> Result<(), InquireError> {
    let defaults = config.default_options();
    let max = config.max_password_length;

    let length = loop {
        let length: usize = CustomType::new("Password length:")
            .with_default(defaults.length)
            .with_error_message("Please type a whole number")
            .prompt()?;
        if (1..=max).contains(&length) {
            break length;
        }
        println!("Length must be between 1 and {}", max);
    };

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(true)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    let exclude_similar = Confirm::new("Exclude similar characters (like l, 1, I, O, 0)?")
        .with_default(defaults.exclude_similar)
        .prompt()?;

    let options = PasswordGenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
        exclude_similar,
    };

    let generated = handlers::handle_generate(generator, &options, 1);
    match handlers::render_generated(&generated, false) {
        Ok(text) => println!("\n{}\n", text),
        Err(e) => eprintln!("❌ Failed to display password: {}", e),
    }
    Ok(())
}

fn check_interactive() -> Result<(), InquireError> {
    let password = Password::new("Password to check:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let report = handlers::handle_strength(&password);
    match handlers::render_strength(&report, false) {
        Ok(text) => println!("\n{}\n", text),
        Err(e) => eprintln!("❌ Failed to display report: {}", e),
    }
    Ok(())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}
