// src/strength/entropy.rs
use std::collections::HashMap;

use super::SPECIAL_CHARS;

/// Heuristic entropy in bits: length times log2 of the character pool size,
/// minus half the repetition cost of characters that occur more than once.
pub fn calculate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut charset_size = 0usize;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset_size += 10;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        charset_size += SPECIAL_CHARS.len();
    }

    let length = password.chars().count() as f64;
    let basic_entropy = length * (charset_size.max(1) as f64).log2();

    let mut char_freq: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *char_freq.entry(c).or_insert(0) += 1;
    }

    let repetition_penalty: f64 = char_freq
        .values()
        .filter(|&&count| count > 1)
        .map(|&count| count as f64 * (count as f64).log2())
        .sum();

    (basic_entropy - repetition_penalty / 2.0).max(0.0)
}
