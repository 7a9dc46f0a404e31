// src/converter/temperature.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "celsius" => Some(TemperatureScale::Celsius),
            "fahrenheit" => Some(TemperatureScale::Fahrenheit),
            "kelvin" => Some(TemperatureScale::Kelvin),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => (celsius * 9.0 / 5.0) + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert between temperature scales.
///
/// Every conversion pivots through Celsius, including Fahrenheit to Kelvin,
/// so rounding matches the two-step formulas exactly.
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

pub const FORMULAS: &str = "Temperature Conversion Formulas:\n\
    - Celsius to Fahrenheit: °F = (°C × 9/5) + 32\n\
    - Fahrenheit to Celsius: °C = (°F - 32) × 5/9\n\
    - Kelvin to Celsius: °C = K - 273.15";
