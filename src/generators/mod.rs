// src/generators/mod.rs
pub mod password;

pub use password::{generate, PasswordGenerator};
