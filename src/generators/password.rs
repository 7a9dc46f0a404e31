// src/generators/password.rs
use rand::{seq::SliceRandom, Rng};

use crate::models::{PasswordGenerationOptions, StrengthReport};
use crate::strength::{self, MIN_LENGTH, SPECIAL_CHARS};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

// Length used when the requested one is below the minimum
pub const DEFAULT_LENGTH: usize = 16;

// Four-character runs rejected at the tail, compared lowercased
const DISALLOWED_SEQUENCES: [&[u8; 4]; 4] = [b"pass", b"word", b"1234", b"abcd"];

const SHUFFLE_ROUNDS: usize = 3;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        generate_with_rng(&mut rand::thread_rng(), options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        strength::score(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a password with the thread-local RNG.
pub fn generate(length: usize, include_special: bool) -> String {
    PasswordGenerator::new().generate_password(&PasswordGenerationOptions {
        length,
        include_special,
    })
}

/// The length actually produced for a requested length.
pub fn resolve_length(requested: usize) -> usize {
    if requested < MIN_LENGTH {
        DEFAULT_LENGTH
    } else {
        requested
    }
}

pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, options: &PasswordGenerationOptions) -> String {
    let length = resolve_length(options.length);
    let special = SPECIAL_CHARS.as_bytes();

    // One of each required class up front
    let mut password = vec![pick(rng, LOWERCASE), pick(rng, UPPERCASE), pick(rng, DIGITS)];
    if options.include_special {
        password.push(pick(rng, special));
    }

    let mut pool = Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + special.len());
    pool.extend_from_slice(LOWERCASE);
    pool.extend_from_slice(UPPERCASE);
    pool.extend_from_slice(DIGITS);
    if options.include_special {
        pool.extend_from_slice(special);
    }

    while password.len() < length {
        let mut next = pick(rng, &pool);
        while creates_pattern(&password, next) {
            next = pick(rng, &pool);
        }
        password.push(next);
    }

    for _ in 0..SHUFFLE_ROUNDS {
        password.shuffle(rng);
    }

    // Shuffling can line up three identical characters that were apart
    repair_triple_runs(rng, &mut password);

    log::debug!(
        "Generated password of length {} (special: {})",
        password.len(),
        options.include_special
    );

    password.into_iter().map(char::from).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

// End index of the first window of three identical characters
fn first_triple_end(password: &[u8]) -> Option<usize> {
    password
        .windows(3)
        .position(|w| w[0] == w[1] && w[1] == w[2])
        .map(|start| start + 2)
}

// Is position `k` part of a window of three identical characters?
fn in_triple_run(password: &[u8], k: usize) -> bool {
    (k.saturating_sub(2)..=k).any(|s| {
        s + 2 < password.len() && password[s] == password[s + 1] && password[s + 1] == password[s + 2]
    })
}

// Swap the last character of each run with a random position whose swap
// leaves both neighbourhoods clean. Every swap removes at least one bad
// window and adds none.
fn repair_triple_runs<R: Rng + ?Sized>(rng: &mut R, password: &mut [u8]) {
    let len = password.len();
    while let Some(i) = first_triple_end(password) {
        let start = rng.gen_range(0..len);
        let repaired = (0..len).map(|k| (start + k) % len).any(|j| {
            if password[j] == password[i] {
                return false;
            }
            password.swap(i, j);
            if in_triple_run(password, i) || in_triple_run(password, j) {
                password.swap(i, j);
                false
            } else {
                true
            }
        });

        if !repaired {
            log::warn!("No swap removes the repeated run ending at {}", i);
            break;
        }
    }
}

// Would appending `next` give three identical characters in a row, or end
// the sequence with a disallowed four-character run?
fn creates_pattern(password: &[u8], next: u8) -> bool {
    let len = password.len();
    if len < 2 {
        return false;
    }
    if password[len - 1] == next && password[len - 2] == next {
        return true;
    }
    if len < 3 {
        return false;
    }
    let mut tail = [0u8; 4];
    tail[..3].copy_from_slice(&password[len - 3..]);
    tail[3] = next;
    tail.make_ascii_lowercase();
    DISALLOWED_SEQUENCES.iter().any(|seq| **seq == tail)
}
