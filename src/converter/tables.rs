// src/converter/tables.rs
//
// Scale factors are expressed per one base unit; the first entry of every
// table is the base unit itself.

pub type UnitTable = &'static [(&'static str, f64)];

pub const LENGTH: UnitTable = &[
    ("Meter", 1.0),
    ("Kilometer", 0.001),
    ("Centimeter", 100.0),
    ("Millimeter", 1000.0),
    ("Mile", 0.000621371),
    ("Yard", 1.09361),
    ("Foot", 3.28084),
    ("Inch", 39.3701),
];

pub const MASS: UnitTable = &[
    ("Kilogram", 1.0),
    ("Gram", 1000.0),
    ("Milligram", 1000000.0),
    ("Metric Ton", 0.001),
    ("Pound", 2.20462),
    ("Ounce", 35.274),
];

pub const AREA: UnitTable = &[
    ("Square Meter", 1.0),
    ("Square Kilometer", 0.000001),
    ("Square Mile", 3.861e-7),
    ("Square Yard", 1.19599),
    ("Square Foot", 10.7639),
    ("Square Inch", 1550.0),
    ("Hectare", 0.0001),
    ("Acre", 0.000247105),
];

pub const VOLUME: UnitTable = &[
    ("Cubic Meter", 1.0),
    ("Liter", 1000.0),
    ("Milliliter", 1000000.0),
    ("Gallon", 264.172),
    ("Quart", 1056.69),
    ("Pint", 2113.38),
    ("Cup", 4226.75),
];

pub const SPEED: UnitTable = &[
    ("Meters per second", 1.0),
    ("Kilometers per hour", 3.6),
    ("Miles per hour", 2.23694),
    ("Knots", 1.94384),
    ("Feet per second", 3.28084),
];

pub const TIME: UnitTable = &[
    ("Second", 1.0),
    ("Minute", 1.0 / 60.0),
    ("Hour", 1.0 / 3600.0),
    ("Day", 1.0 / 86400.0),
    ("Week", 1.0 / 604800.0),
    ("Month", 1.0 / 2592000.0),
    ("Year", 1.0 / 31536000.0),
];

pub const DIGITAL_STORAGE: UnitTable = &[
    ("Byte", 1.0),
    ("Kilobyte", 1.0 / 1024.0),
    ("Megabyte", 1.0 / 1048576.0),
    ("Gigabyte", 1.0 / 1073741824.0),
    ("Terabyte", 1.0 / 1099511627776.0),
];

// Temperature has no scale factors, only names
pub const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

/// Look up a unit's factor, matching names case-insensitively.
pub fn lookup(table: UnitTable, unit: &str) -> Option<(&'static str, f64)> {
    let unit = unit.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .copied()
}
