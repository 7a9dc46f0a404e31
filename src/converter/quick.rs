// src/converter/quick.rs
use super::{convert_in, Category, Result};

/// A preset one-click conversion offered for a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickConversion {
    pub label: &'static str,
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
}

impl QuickConversion {
    const fn new(label: &'static str, value: f64, from_unit: &'static str, to_unit: &'static str) -> Self {
        Self { label, value, from_unit, to_unit }
    }

    pub fn run(&self, category: Category) -> Result<f64> {
        convert_in(self.value, self.from_unit, self.to_unit, category)
    }
}

/// Presets for a category; empty for categories without any.
pub fn quick_conversions(category: Category) -> &'static [QuickConversion] {
    const LENGTH: &[QuickConversion] = &[
        QuickConversion::new("1 Mile → km", 1.0, "Mile", "Kilometer"),
        QuickConversion::new("1 Meter → ft", 1.0, "Meter", "Foot"),
    ];
    const TEMPERATURE: &[QuickConversion] = &[
        QuickConversion::new("32°F → °C", 32.0, "Fahrenheit", "Celsius"),
        QuickConversion::new("100°C → °F", 100.0, "Celsius", "Fahrenheit"),
    ];
    const MASS: &[QuickConversion] = &[
        QuickConversion::new("1 kg → lb", 1.0, "Kilogram", "Pound"),
        QuickConversion::new("1 lb → kg", 1.0, "Pound", "Kilogram"),
    ];
    const VOLUME: &[QuickConversion] = &[
        QuickConversion::new("1 L → gal", 1.0, "Liter", "Gallon"),
        QuickConversion::new("1 gal → L", 1.0, "Gallon", "Liter"),
    ];
    const DIGITAL_STORAGE: &[QuickConversion] = &[
        QuickConversion::new("1 GB → MB", 1.0, "Gigabyte", "Megabyte"),
        QuickConversion::new("1 TB → GB", 1.0, "Terabyte", "Gigabyte"),
    ];
    const SPEED: &[QuickConversion] = &[
        QuickConversion::new("60 mph → km/h", 60.0, "Miles per hour", "Kilometers per hour"),
        QuickConversion::new("100 km/h → mph", 100.0, "Kilometers per hour", "Miles per hour"),
    ];

    match category {
        Category::Length => LENGTH,
        Category::Temperature => TEMPERATURE,
        Category::Mass => MASS,
        Category::Volume => VOLUME,
        Category::DigitalStorage => DIGITAL_STORAGE,
        Category::Speed => SPEED,
        Category::Area | Category::Time => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_converts() {
        for cat in Category::ALL {
            for preset in quick_conversions(cat) {
                assert!(preset.run(cat).is_ok(), "{} failed", preset.label);
            }
        }
    }

    #[test]
    fn test_fahrenheit_preset() {
        let preset = quick_conversions(Category::Temperature)[0];
        assert_eq!(preset.run(Category::Temperature), Ok(0.0));
    }

    #[test]
    fn test_categories_without_presets() {
        assert!(quick_conversions(Category::Area).is_empty());
        assert!(quick_conversions(Category::Time).is_empty());
    }
}
