// src/strength/mod.rs
use std::collections::BTreeMap;
use lazy_static::lazy_static;

pub mod common;
pub mod entropy;
pub mod rules;

pub use common::CommonPasswordSet;
pub use entropy::calculate_entropy;

use crate::models::{StrengthLabel, StrengthReport};

pub const SPECIAL_CHARS: &str = "!@#$%^&*";
pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;
pub const MAX_SCORE: f64 = 6.0;

const LONG_LENGTH: usize = 16;
const EXCELLENT_FEEDBACK: &str = "Excellent! Your password meets all security criteria.";

lazy_static! {
    static ref DEFAULT_METER: PasswordStrengthMeter = PasswordStrengthMeter::new();
}

/// Score a password against the built-in common password list.
pub fn score(password: &str) -> StrengthReport {
    DEFAULT_METER.check_password_strength(password)
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub length: f64,
    pub uppercase: f64,
    pub lowercase: f64,
    pub digits: f64,
    pub special: f64,
    pub complexity: f64,
    pub entropy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 1.5,
            uppercase: 1.0,
            lowercase: 1.0,
            digits: 1.0,
            special: 1.2,
            complexity: 1.3,
            entropy: 1.2,
        }
    }
}

// One character class the scorer looks for
struct CharacterClass {
    key: &'static str,
    description: &'static str,
    matches: fn(char) -> bool,
    weight: fn(&ScoringWeights) -> f64,
}

const CHARACTER_CLASSES: [CharacterClass; 4] = [
    CharacterClass {
        key: "uppercase",
        description: "uppercase letter",
        matches: |c| c.is_ascii_uppercase(),
        weight: |w| w.uppercase,
    },
    CharacterClass {
        key: "lowercase",
        description: "lowercase letter",
        matches: |c| c.is_ascii_lowercase(),
        weight: |w| w.lowercase,
    },
    CharacterClass {
        key: "digits",
        description: "number",
        matches: |c| c.is_ascii_digit(),
        weight: |w| w.digits,
    },
    CharacterClass {
        key: "special",
        description: "special character",
        matches: |c| SPECIAL_CHARS.contains(c),
        weight: |w| w.special,
    },
];

pub struct PasswordStrengthMeter {
    common_passwords: CommonPasswordSet,
    weights: ScoringWeights,
}

impl PasswordStrengthMeter {
    pub fn new() -> Self {
        Self::with_common_passwords(CommonPasswordSet::new())
    }

    pub fn with_common_passwords(common_passwords: CommonPasswordSet) -> Self {
        Self {
            common_passwords,
            weights: ScoringWeights::default(),
        }
    }

    pub fn check_password_strength(&self, password: &str) -> StrengthReport {
        if password.is_empty() {
            return StrengthReport {
                score: 0.0,
                strength: StrengthLabel::NoPassword,
                feedback: vec!["Please enter a password.".to_string()],
                details: BTreeMap::new(),
                entropy: 0.0,
                length: 0,
            };
        }

        let chars: Vec<char> = password.chars().collect();
        let length = chars.len();

        if self.common_passwords.contains(password) {
            log::debug!("Password of length {} is on the common list", length);
            return StrengthReport {
                score: 1.0,
                strength: StrengthLabel::VeryWeak,
                feedback: vec![
                    "This is a commonly used password. Please choose a more unique password.".to_string(),
                    "Common passwords are the first ones attackers try.".to_string(),
                ],
                details: BTreeMap::new(),
                entropy: calculate_entropy(password),
                length,
            };
        }

        let mut score = 0.0;
        let mut feedback = Vec::new();
        let mut details = BTreeMap::new();

        details.insert("length".to_string(), length >= MIN_LENGTH);
        let length_score = (length as f64 / MIN_LENGTH as f64).min(2.0);
        score += length_score * self.weights.length;

        if length < MIN_LENGTH {
            feedback.push(format!("Password should be at least {} characters long", MIN_LENGTH));
        } else if length < RECOMMENDED_LENGTH {
            feedback.push(format!(
                "Consider using at least {} characters for stronger security",
                RECOMMENDED_LENGTH
            ));
        } else if length >= LONG_LENGTH {
            feedback.push("Good length! Longer passwords are harder to crack".to_string());
        }

        for class in &CHARACTER_CLASSES {
            let occurrences = chars.iter().filter(|c| (class.matches)(**c)).count();
            let present = occurrences > 0;
            details.insert(class.key.to_string(), present);
            if present {
                score += (class.weight)(&self.weights);
                if occurrences > 2 {
                    score += 0.1;
                }
            } else {
                feedback.push(format!("Include at least one {}", class.description));
            }
        }

        // May push the running score below zero; left as-is
        score += rules::complexity_adjustment(&chars) * self.weights.complexity;

        let entropy = calculate_entropy(password);
        score += (entropy / 4.0).min(1.0) * self.weights.entropy;

        let strength = StrengthLabel::from_score(score);
        if strength == StrengthLabel::VeryStrong && feedback.is_empty() {
            feedback.push(EXCELLENT_FEEDBACK.to_string());
        }

        if score > 4.0 {
            if entropy > 3.5 {
                feedback.push("Good job! Your password has high complexity and randomness.".to_string());
            }
            if length >= LONG_LENGTH {
                feedback.push("Excellent length! This makes the password much harder to crack.".to_string());
            }
        }

        log::debug!("Scored password of length {}: {:.2} ({})", length, score, strength);

        StrengthReport {
            score: score.min(MAX_SCORE),
            strength,
            feedback,
            details,
            entropy,
            length,
        }
    }
}

impl Default for PasswordStrengthMeter {
    fn default() -> Self {
        Self::new()
    }
}
