// src/models.rs
use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

// Strength categories, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "No Password")]
    NoPassword,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Step function from a numeric score to a label.
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            StrengthLabel::VeryWeak
        } else if score <= 3.0 {
            StrengthLabel::Weak
        } else if score <= 4.0 {
            StrengthLabel::Moderate
        } else if score <= 5.0 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No Password",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    // Hex colour used when rendering the label
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#ff4b4b",
            StrengthLabel::Moderate => "#ffc107",
            StrengthLabel::Strong => "#28a745",
            StrengthLabel::VeryStrong => "#198754",
            _ => "#dc3545",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: f64,
    pub strength: StrengthLabel,
    pub feedback: Vec<String>,
    pub details: BTreeMap<String, bool>,
    pub entropy: f64,
    pub length: usize,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_special: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_special: true,
        }
    }
}

// One successful conversion, kept for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: String,
    pub category: String,
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_steps() {
        assert_eq!(StrengthLabel::from_score(-1.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(2.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(2.01), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3.0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(4.0), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(5.0), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(5.5), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_serializes_as_display_text() {
        let json = serde_json::to_string(&StrengthLabel::VeryStrong).unwrap();
        assert_eq!(json, "\"Very Strong\"");
        assert_eq!(StrengthLabel::NoPassword.to_string(), "No Password");
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(StrengthLabel::Strong.color(), "#28a745");
        assert_eq!(StrengthLabel::NoPassword.color(), "#dc3545");
    }
}
