// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::PasswordGenerationOptions;

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured length, usually 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Exclude similar characters (default: configured, usually false)
    pub exclude_similar: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Fills unset fields from `defaults`.
    pub fn into_options(self, defaults: &PasswordGenerationOptions) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength score (0-5)
    pub strength: Option<u8>,
    /// Strength label for the score
    pub label: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score (0-5)
    pub strength: u8,
    /// Strength label for the score
    pub label: String,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: String,
    /// Crate version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_takes_defaults() {
        let defaults = PasswordGenerationOptions { length: 20, exclude_similar: true, ..Default::default() };
        let options = PasswordGenerationRequest::default().into_options(&defaults);
        assert_eq!(options, defaults);
    }

    #[test]
    fn request_fields_override_defaults() {
        let request: PasswordGenerationRequest =
            serde_json::from_str(r#"{"length": 8, "include_symbols": false}"#).unwrap();
        let options = request.into_options(&PasswordGenerationOptions::default());
        assert_eq!(options.length, 8);
        assert!(!options.include_symbols);
        assert!(options.include_uppercase);
    }
}
