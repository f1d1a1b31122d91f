// src/cli/handlers.rs
use console::style;
use serde::Serialize;

use crate::generators::{strength, PasswordGenerator};
use crate::models::PasswordGenerationOptions;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: u8,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StrengthReport {
    pub strength: u8,
    pub label: &'static str,
    pub feedback: Vec<String>,
}

// Handlers for CLI commands
pub fn handle_generate(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
    count: usize,
) -> Vec<GeneratedPassword> {
    log::debug!("Generating {} password(s) ({})", count, options.summary());

    (0..count)
        .map(|_| {
            let password = generator.generate_password(options);
            let score = generator.analyze_password_strength(&password);
            GeneratedPassword {
                password,
                strength: score,
                label: strength::label(score),
            }
        })
        .collect()
}

pub fn handle_strength(password: &str) -> StrengthReport {
    let score = strength::score(password);
    StrengthReport {
        strength: score,
        label: strength::label(score),
        feedback: strength::feedback(password),
    }
}

pub fn render_generated(generated: &[GeneratedPassword], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(generated)?);
    }

    let lines: Vec<String> = generated
        .iter()
        .map(|g| {
            format!(
                "{}  {} {}",
                style(&g.password).bold(),
                style(format!("{}/{}", g.strength, strength::MAX_SCORE)).dim(),
                strength_style(g.strength, g.label),
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_strength(report: &StrengthReport, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = format!(
        "Strength: {}/{} {}",
        report.strength,
        strength::MAX_SCORE,
        strength_style(report.strength, report.label)
    );
    for hint in &report.feedback {
        out.push_str(&format!("\n  • {}", hint));
    }
    Ok(out)
}

fn strength_style(score: u8, label: &str) -> console::StyledObject<String> {
    let styled = style(format!("({})", label));
    match score {
        0..=1 => styled.red(),
        2..=3 => styled.yellow(),
        _ => styled.green(),
    }
}
