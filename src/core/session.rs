// src/core/session.rs
use chrono::Local;

use crate::converter::{self, Category};
use crate::models::{ConversionRecord, Favorite};

/// Conversion history and favorites for one interactive session.
///
/// Owned by the shell and passed to whatever needs it; nothing here outlives
/// the process.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<ConversionRecord>,
    favorites: Vec<Favorite>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert and, on success, append the result to the history.
    pub fn convert(
        &mut self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: Category,
    ) -> converter::Result<ConversionRecord> {
        let from_unit = category.resolve_unit(from_unit)?;
        let to_unit = category.resolve_unit(to_unit)?;
        let result = converter::convert_in(value, from_unit, to_unit, category)?;

        let record = ConversionRecord {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            category: category.name().to_string(),
            from_value: value,
            from_unit: from_unit.to_string(),
            to_value: result,
            to_unit: to_unit.to_string(),
        };
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn history(&self) -> &[ConversionRecord] {
        &self.history
    }

    /// Up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ConversionRecord> {
        self.history.iter().rev().take(limit)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns false when an identical favorite already exists.
    pub fn add_favorite(&mut self, favorite: Favorite) -> bool {
        if self.favorites.contains(&favorite) {
            return false;
        }
        self.favorites.push(favorite);
        true
    }

    pub fn remove_favorite(&mut self, index: usize) -> Option<Favorite> {
        if index < self.favorites.len() {
            Some(self.favorites.remove(index))
        } else {
            None
        }
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }
}

/// Re-run a saved favorite. Favorites are not added to the history.
pub fn evaluate_favorite(favorite: &Favorite) -> converter::Result<f64> {
    converter::convert(favorite.value, &favorite.from_unit, &favorite.to_unit, &favorite.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ConversionError;

    fn favorite(value: f64) -> Favorite {
        Favorite {
            category: "Mass".to_string(),
            from_unit: "Kilogram".to_string(),
            to_unit: "Pound".to_string(),
            value,
        }
    }

    #[test]
    fn test_successful_conversion_is_recorded() {
        let mut session = Session::new();
        let record = session.convert(0.0, "celsius", "fahrenheit", Category::Temperature).unwrap();
        assert_eq!(record.to_value, 32.0);
        assert_eq!(record.from_unit, "Celsius");
        assert_eq!(record.to_unit, "Fahrenheit");
        assert_eq!(record.timestamp.len(), 8);
        assert_eq!(session.history(), &[record]);
    }

    #[test]
    fn test_failed_conversion_is_not_recorded() {
        let mut session = Session::new();
        let err = session.convert(1.0, "Meter", "Gallon", Category::Length).unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let mut session = Session::new();
        for v in 1..=7 {
            session.convert(v as f64, "Meter", "Centimeter", Category::Length).unwrap();
        }
        let recent: Vec<f64> = session.recent(5).map(|r| r.from_value).collect();
        assert_eq!(recent, vec![7.0, 6.0, 5.0, 4.0, 3.0]);

        session.clear_history();
        assert_eq!(session.recent(5).count(), 0);
    }

    #[test]
    fn test_favorites_reject_duplicates() {
        let mut session = Session::new();
        assert!(session.add_favorite(favorite(1.0)));
        assert!(!session.add_favorite(favorite(1.0)));
        assert!(session.add_favorite(favorite(2.0)));
        assert_eq!(session.favorites().len(), 2);

        assert_eq!(session.remove_favorite(0), Some(favorite(1.0)));
        assert_eq!(session.remove_favorite(5), None);
        assert_eq!(session.favorites(), &[favorite(2.0)]);
    }

    #[test]
    fn test_evaluate_favorite() {
        let pounds = evaluate_favorite(&favorite(1.0)).unwrap();
        assert!((pounds - 2.20462).abs() < 1e-9);
    }
}
