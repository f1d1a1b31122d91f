// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod shuffle;
pub mod strength;

pub use password::PasswordGenerator;
