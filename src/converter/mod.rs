// src/converter/mod.rs
use std::fmt;
use thiserror::Error;

pub mod tables;
pub mod temperature;
pub mod quick;

use tables::UnitTable;
use temperature::TemperatureScale;

pub use quick::{quick_conversions, QuickConversion};

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Input must be a number: {0}")]
    InvalidInput(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid conversion result")]
    InvalidResult,
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Area,
    Volume,
    Speed,
    Time,
    DigitalStorage,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Time,
        Category::DigitalStorage,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::DigitalStorage => "Digital Storage",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Length => "📏",
            Category::Mass => "⚖️",
            Category::Temperature => "🌡️",
            Category::Area => "📐",
            Category::Volume => "🧊",
            Category::Speed => "🏃",
            Category::Time => "⏰",
            Category::DigitalStorage => "💾",
        }
    }

    // None for temperature, which is not a linear scale
    fn table(&self) -> Option<UnitTable> {
        match self {
            Category::Length => Some(tables::LENGTH),
            Category::Mass => Some(tables::MASS),
            Category::Temperature => None,
            Category::Area => Some(tables::AREA),
            Category::Volume => Some(tables::VOLUME),
            Category::Speed => Some(tables::SPEED),
            Category::Time => Some(tables::TIME),
            Category::DigitalStorage => Some(tables::DIGITAL_STORAGE),
        }
    }

    /// Unit names in display order; the first is the base unit.
    pub fn units(&self) -> Vec<&'static str> {
        match self.table() {
            Some(table) => table.iter().map(|(name, _)| *name).collect(),
            None => tables::TEMPERATURE_UNITS.to_vec(),
        }
    }

    pub fn base_unit(&self) -> &'static str {
        self.units()[0]
    }

    /// Resolve a user-supplied unit name to its canonical spelling.
    pub fn resolve_unit(&self, unit: &str) -> Result<&'static str> {
        let found = match self.table() {
            Some(table) => tables::lookup(table, unit).map(|(name, _)| name),
            None => TemperatureScale::from_name(unit).map(|scale| scale.name()),
        };
        found.ok_or_else(|| ConversionError::UnknownUnit {
            category: self.name().to_string(),
            unit: unit.to_string(),
        })
    }

    /// Human-readable explanation of how the category converts.
    pub fn formula(&self) -> String {
        match self {
            Category::Temperature => temperature::FORMULAS.to_string(),
            _ => format!("Conversion is done through {} as the base unit.", self.base_unit()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a value typed by the user.
pub fn parse_value(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidInput(input.to_string()))?;
    if !value.is_finite() {
        return Err(ConversionError::InvalidInput(input.to_string()));
    }
    Ok(value)
}

/// Convert `value` between two units of a category given by name.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> Result<f64> {
    let cat = Category::from_name(category)
        .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
    convert_in(value, from_unit, to_unit, cat)
}

pub fn convert_in(value: f64, from_unit: &str, to_unit: &str, category: Category) -> Result<f64> {
    if !value.is_finite() {
        log::warn!("Rejected non-finite input {} for {}", value, category);
        return Err(ConversionError::InvalidInput(value.to_string()));
    }

    let result = match category.table() {
        None => {
            let from = TemperatureScale::from_name(from_unit)
                .ok_or_else(|| unknown_unit(category, from_unit))?;
            let to = TemperatureScale::from_name(to_unit)
                .ok_or_else(|| unknown_unit(category, to_unit))?;
            temperature::convert_temperature(value, from, to)
        }
        Some(table) => {
            let (from_name, from_factor) = tables::lookup(table, from_unit)
                .ok_or_else(|| unknown_unit(category, from_unit))?;
            let (to_name, to_factor) = tables::lookup(table, to_unit)
                .ok_or_else(|| unknown_unit(category, to_unit))?;

            if from_name == to_name {
                value
            } else {
                value / from_factor * to_factor
            }
        }
    };

    if !result.is_finite() {
        log::warn!("Conversion of {} {} to {} overflowed", value, from_unit, to_unit);
        return Err(ConversionError::InvalidResult);
    }

    log::debug!("Converted {} {} -> {} {} ({})", value, from_unit, result, to_unit, category);
    Ok(result)
}

fn unknown_unit(category: Category, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.name().to_string(),
        unit: unit.to_string(),
    }
}
