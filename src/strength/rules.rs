// src/strength/rules.rs
//
// Pattern modifiers applied on top of the basic character-class score. Each
// rule is checked independently; the weights of all matching rules are summed.

use super::SPECIAL_CHARS;

pub struct ComplexityRule {
    pub name: &'static str,
    pub weight: f64,
    pub matches: fn(&[char]) -> bool,
}

pub const COMPLEXITY_RULES: &[ComplexityRule] = &[
    // Penalties
    ComplexityRule { name: "repeated characters", weight: -0.5, matches: has_repeated_run },
    ComplexityRule { name: "sequential letters", weight: -0.3, matches: has_letter_sequence },
    ComplexityRule { name: "sequential numbers", weight: -0.3, matches: has_digit_sequence },
    ComplexityRule { name: "keyboard pattern", weight: -0.4, matches: has_keyboard_pattern },
    // Bonuses
    ComplexityRule { name: "multiple uppercase", weight: 0.2, matches: has_multiple_uppercase },
    ComplexityRule { name: "multiple special", weight: 0.2, matches: has_multiple_special },
    ComplexityRule { name: "multiple digits", weight: 0.2, matches: has_multiple_digits },
    ComplexityRule { name: "character mix", weight: 0.3, matches: has_ordered_mix },
];

const KEYBOARD_PATTERNS: [&str; 3] = ["qwerty", "asdfgh", "zxcvbn"];

/// Sum of the weights of every matching rule.
pub fn complexity_adjustment(chars: &[char]) -> f64 {
    COMPLEXITY_RULES
        .iter()
        .filter(|rule| (rule.matches)(chars))
        .map(|rule| rule.weight)
        .sum()
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

// Same character three or more times in a row
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

// Three ascending lowercase letters, "abc" through "xyz"
fn has_letter_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        w.iter().all(|c| c.is_ascii_lowercase())
            && w[1] as u32 == w[0] as u32 + 1
            && w[2] as u32 == w[1] as u32 + 1
    })
}

// "123" through "789", plus the wrap-around "890"
fn has_digit_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|w| match (w[0].to_digit(10), w[1].to_digit(10), w[2].to_digit(10)) {
        (Some(8), Some(9), Some(0)) => true,
        (Some(a), Some(b), Some(c)) => a >= 1 && b == a + 1 && c == b + 1,
        _ => false,
    })
}

fn has_keyboard_pattern(chars: &[char]) -> bool {
    let text: String = chars.iter().collect();
    KEYBOARD_PATTERNS.iter().any(|p| text.contains(p))
}

fn has_multiple_uppercase(chars: &[char]) -> bool {
    chars.iter().filter(|c| c.is_ascii_uppercase()).count() >= 2
}

fn has_multiple_special(chars: &[char]) -> bool {
    chars.iter().filter(|c| is_special(**c)).count() >= 2
}

fn has_multiple_digits(chars: &[char]) -> bool {
    chars.iter().filter(|c| c.is_ascii_digit()).count() >= 3
}

// A lowercase letter, later an uppercase letter, later a digit, later a special
fn has_ordered_mix(chars: &[char]) -> bool {
    let steps: [fn(char) -> bool; 4] = [
        |c| c.is_ascii_lowercase(),
        |c| c.is_ascii_uppercase(),
        |c| c.is_ascii_digit(),
        is_special,
    ];
    let mut step = 0;
    for &c in chars {
        if steps[step](c) {
            step += 1;
            if step == steps.len() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn matched(s: &str) -> Vec<&'static str> {
        let c = chars(s);
        COMPLEXITY_RULES
            .iter()
            .filter(|r| (r.matches)(&c))
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_penalties() {
        assert_eq!(matched("xaaay"), vec!["repeated characters"]);
        assert_eq!(matched("kxyz"), vec!["sequential letters"]);
        assert!(matched("a890").contains(&"sequential numbers"));
        assert!(matched("qwerty").contains(&"keyboard pattern"));
    }

    #[test]
    fn test_sequences_are_case_and_range_sensitive() {
        assert!(!has_letter_sequence(&chars("ABC")));
        assert!(!has_letter_sequence(&chars("acb")));
        assert!(!has_digit_sequence(&chars("012")));
        assert!(has_digit_sequence(&chars("x789")));
        assert!(!has_keyboard_pattern(&chars("QWERTY")));
    }

    #[test]
    fn test_bonuses() {
        assert!(has_multiple_uppercase(&chars("AbC")));
        assert!(!has_multiple_uppercase(&chars("Abc")));
        assert!(has_multiple_special(&chars("a!b@")));
        assert!(has_multiple_digits(&chars("1a2b3")));
        assert!(!has_multiple_digits(&chars("1a2b")));
    }

    #[test]
    fn test_mix_requires_order() {
        assert!(has_ordered_mix(&chars("aB3!")));
        assert!(has_ordered_mix(&chars("xxaYY99##")));
        assert!(!has_ordered_mix(&chars("!3Ba")));
    }

    #[test]
    fn test_adjustment_sums_weights() {
        let adj = complexity_adjustment(&chars("aaa"));
        assert!((adj - -0.5).abs() < 1e-12);

        let adj = complexity_adjustment(&chars("aBCd1!2@3"));
        // multiple uppercase, special, digits, and the ordered mix
        assert!((adj - 0.9).abs() < 1e-12);
        assert_eq!(complexity_adjustment(&chars("plain")), 0.0);
    }
}
