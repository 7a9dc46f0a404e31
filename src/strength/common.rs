// src/strength/common.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;

lazy_static! {
    static ref BUILTIN_COMMON_PASSWORDS: HashSet<&'static str> = [
        "password", "123456", "qwerty", "admin", "letmein",
        "welcome", "password123", "admin123", "12345678", "abc123",
        "monkey", "dragon", "baseball", "football", "letme1n",
        "master", "hello123", "shadow", "superman", "qwerty123",
        "welcome123", "ninja", "abc123456", "123456789", "password1",
    ]
    .into_iter()
    .collect();
}

/// Lowercase passwords that are rejected before any scoring happens.
#[derive(Debug, Clone)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    pub fn new() -> Self {
        Self {
            entries: BUILTIN_COMMON_PASSWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in set plus one entry per line of `path`. A missing or unreadable
    /// file leaves the built-in set untouched.
    pub fn with_file(path: &Path) -> Self {
        let mut set = Self::new();
        match fs::read_to_string(path) {
            Ok(content) => {
                let before = set.len();
                set.extend(content.lines());
                log::debug!(
                    "Loaded {} extra common passwords from {}",
                    set.len() - before,
                    path.display()
                );
            }
            Err(e) => {
                log::warn!("Could not read common password file {}: {}", path.display(), e);
            }
        }
        set
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, passwords: I) {
        self.entries.extend(
            passwords
                .into_iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        );
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CommonPasswordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        let set = CommonPasswordSet::new();
        assert_eq!(set.len(), 25);
        assert!(set.contains("PassWord"));
        assert!(set.contains("qwerty123"));
        assert!(!set.contains("correct horse"));
    }

    #[test]
    fn test_with_file_merges_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Hunter2").unwrap();
        writeln!(file, "  trustno1  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "password").unwrap();

        let set = CommonPasswordSet::with_file(file.path());
        assert_eq!(set.len(), 27);
        assert!(set.contains("hunter2"));
        assert!(set.contains("TRUSTNO1"));
    }

    #[test]
    fn test_missing_file_keeps_builtin() {
        let set = CommonPasswordSet::with_file(Path::new("/nonexistent/common.txt"));
        assert_eq!(set.len(), 25);
    }
}
