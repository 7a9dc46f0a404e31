// src/cli/handlers.rs
use std::error::Error;
use console::{style, Color};
use rand::Rng;

use crate::converter::{self, quick_conversions, Category, ConversionError};
use crate::core::config::Config;
use crate::core::session::Session;
use crate::generators::password::generate_with_rng;
use crate::models::{ConversionRecord, PasswordGenerationOptions, StrengthLabel, StrengthReport};
use crate::strength::PasswordStrengthMeter;
use crate::utils::format_general;

// Criteria shown in the analysis section, in display order
const CRITERIA_LABELS: [(&str, &str); 5] = [
    ("length", "Minimum Length (8)"),
    ("uppercase", "Uppercase Letter"),
    ("lowercase", "Lowercase Letter"),
    ("digits", "Number"),
    ("special", "Special Character"),
];

pub fn parse_category(name: &str) -> Result<Category, ConversionError> {
    Category::from_name(name).ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

// Handlers for CLI commands
pub fn handle_convert(
    session: &mut Session,
    value: &str,
    from: &str,
    to: &str,
    category: &str,
    json: bool,
) -> Result<ConversionRecord, Box<dyn Error>> {
    let category = parse_category(category)?;
    let value_text = value;
    let value = converter::parse_value(value_text)?;
    let record = session.convert(value, from, to, category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", describe_conversion(value_text.trim(), &record));
    }
    Ok(record)
}

pub fn handle_units(category: Option<&str>) -> Result<(), Box<dyn Error>> {
    let categories = match category {
        Some(name) => vec![parse_category(name)?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!("\n{} {}", category.icon(), style(category.name()).bold());
        for unit in category.units() {
            println!("  • {}", unit);
        }
        println!("{}", style(category.formula()).dim());
    }
    Ok(())
}

pub fn handle_quick(category: &str) -> Result<(), Box<dyn Error>> {
    let category = parse_category(category)?;
    let presets = quick_conversions(category);

    if presets.is_empty() {
        println!("No quick conversions for {}", category);
        return Ok(());
    }

    println!("⚡ Quick Conversions ({} {})", category.icon(), category);
    for preset in presets {
        let result = preset.run(category)?;
        println!("  {:<16} {:.2} {}", preset.label, result, preset.to_unit);
    }
    Ok(())
}

pub fn handle_score(
    meter: &PasswordStrengthMeter,
    password: &str,
    json: bool,
) -> Result<StrengthReport, Box<dyn Error>> {
    let report = meter.check_password_strength(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(report)
}

pub fn handle_generate(
    config: &Config,
    meter: &PasswordStrengthMeter,
    length: Option<usize>,
    include_special: bool,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let options = PasswordGenerationOptions {
        length: length.unwrap_or(config.default_password_length),
        include_special,
    };

    let (password, report) = generate_and_score(&mut rand::thread_rng(), meter, &options);

    if json {
        let payload = serde_json::json!({
            "password": password,
            "strength": report.strength,
            "score": report.score,
            "color": report.strength.color(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("🎲 Generated password: {}", style(&password).bold());
        println!("Strength: {}", styled_label(report.strength));
    }
    Ok(password)
}

// Generate, then score with the meter the rest of the run uses
fn generate_and_score<R: Rng + ?Sized>(
    rng: &mut R,
    meter: &PasswordStrengthMeter,
    options: &PasswordGenerationOptions,
) -> (String, StrengthReport) {
    let password = generate_with_rng(rng, options);
    let report = meter.check_password_strength(&password);
    (password, report)
}

/// `--special` and `--no-special` override the configured default.
pub fn resolve_include_special(config: &Config, special: bool, no_special: bool) -> bool {
    if special {
        true
    } else if no_special {
        false
    } else {
        config.default_include_special
    }
}

// "1 Mile = 1.60934 Kilometer", with the input shown as typed
pub fn describe_conversion(input: &str, record: &ConversionRecord) -> String {
    format!(
        "{} {} = {} {}",
        input,
        record.from_unit,
        format_general(record.to_value, 6),
        record.to_unit
    )
}

pub fn describe_record(record: &ConversionRecord) -> String {
    describe_conversion(&record.from_value.to_string(), record)
}

pub fn print_record(record: &ConversionRecord) {
    let icon = Category::from_name(&record.category).map(|c| c.icon()).unwrap_or("");
    println!("{} {} {}", style(&record.timestamp).dim(), icon, style(&record.category).bold());
    println!("   {}", describe_record(record));
}

pub fn print_report(report: &StrengthReport) {
    println!("\nPassword Strength: {}", styled_label(report.strength));
    println!("Score: {:.2}/6", report.score);
    println!("Entropy: {:.2} bits", report.entropy);
    println!("Length: {} characters", report.length);

    if !report.feedback.is_empty() {
        println!("\n📝 Feedback");
        for item in &report.feedback {
            let marker = if item.contains("Excellent") || item.contains("Good job") { "✅" } else { "❗" };
            println!("  {} {}", marker, item);
        }
    }

    if !report.details.is_empty() {
        println!("\n🔍 Analysis");
        for (key, label) in CRITERIA_LABELS {
            if let Some(met) = report.details.get(key) {
                println!("  {} {}", if *met { "✅" } else { "❌" }, label);
            }
        }
    }
}

fn label_color(label: StrengthLabel) -> Color {
    match label {
        StrengthLabel::Moderate => Color::Yellow,
        StrengthLabel::Strong | StrengthLabel::VeryStrong => Color::Green,
        _ => Color::Red,
    }
}

fn styled_label(label: StrengthLabel) -> console::StyledObject<&'static str> {
    style(label.as_str()).fg(label_color(label)).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::CommonPasswordSet;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_convert_records_into_session() {
        let mut session = Session::new();
        let record = handle_convert(&mut session, "100", "celsius", "fahrenheit", "temperature", false).unwrap();
        assert_eq!(record.to_value, 212.0);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_convert_rejects_non_numeric_value() {
        let mut session = Session::new();
        let err = handle_convert(&mut session, "abc", "Meter", "Foot", "Length", false).unwrap_err();
        assert!(err.to_string().starts_with("Input must be a number"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_convert_rejects_unknown_category() {
        let mut session = Session::new();
        let err = handle_convert(&mut session, "1", "Meter", "Foot", "Distance", true).unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: Distance");
    }

    #[test]
    fn test_describe_record() {
        let record = ConversionRecord {
            timestamp: "09:00:00".to_string(),
            category: "Length".to_string(),
            from_value: 1.0,
            from_unit: "Mile".to_string(),
            to_value: 1.0 / 0.000621371 * 0.001,
            to_unit: "Kilometer".to_string(),
        };
        assert_eq!(describe_record(&record), "1 Mile = 1.60934 Kilometer");
        assert_eq!(describe_conversion("1.0", &record), "1.0 Mile = 1.60934 Kilometer");
        assert_eq!(describe_conversion("1e0", &record), "1e0 Mile = 1.60934 Kilometer");
    }

    #[test]
    fn test_generate_uses_config_defaults() {
        let config = Config {
            default_password_length: 20,
            default_include_special: false,
            ..Config::default()
        };
        let meter = PasswordStrengthMeter::new();
        let include_special = resolve_include_special(&config, false, false);
        let password = handle_generate(&config, &meter, None, include_special, true).unwrap();
        assert_eq!(password.len(), 20);
        assert!(!password.chars().any(|c| crate::strength::SPECIAL_CHARS.contains(c)));
    }

    #[test]
    fn test_special_flags_override_config_both_ways() {
        let off = Config { default_include_special: false, ..Config::default() };
        let on = Config::default();
        assert!(!resolve_include_special(&off, false, false));
        assert!(resolve_include_special(&off, true, false));
        assert!(resolve_include_special(&on, false, false));
        assert!(!resolve_include_special(&on, false, true));
    }

    #[test]
    fn test_generated_password_is_labelled_by_given_meter() {
        let options = PasswordGenerationOptions { length: 12, include_special: true };
        let (password, _) = generate_and_score(&mut StdRng::seed_from_u64(5), &PasswordStrengthMeter::new(), &options);

        let mut set = CommonPasswordSet::new();
        set.extend([password.as_str()]);
        let meter = PasswordStrengthMeter::with_common_passwords(set);

        let (again, report) = generate_and_score(&mut StdRng::seed_from_u64(5), &meter, &options);
        assert_eq!(again, password);
        assert_eq!(report.score, 1.0);
        assert_eq!(report.strength, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_score_and_quick_handlers() {
        let meter = PasswordStrengthMeter::new();
        let report = handle_score(&meter, "letmein", false).unwrap();
        assert_eq!(report.strength, StrengthLabel::VeryWeak);

        assert!(handle_quick("Speed").is_ok());
        assert!(handle_quick("Area").is_ok());
        assert!(handle_quick("Colour").is_err());
        assert!(handle_units(None).is_ok());
    }
}
