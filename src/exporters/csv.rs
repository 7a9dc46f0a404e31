// src/exporters/csv.rs
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::ConversionRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not move export into place: {0}")]
    PersistError(#[from] tempfile::PersistError),
}

const HEADER: [&str; 6] = ["timestamp", "category", "from_value", "from_unit", "to_value", "to_unit"];

pub struct CsvExporter {
    delimiter: char,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Render the history as CSV text, header first, oldest record first.
    pub fn render(&self, records: &[ConversionRecord]) -> String {
        let mut out = String::new();
        self.push_row(&mut out, &HEADER);

        for record in records {
            let from_value = record.from_value.to_string();
            let to_value = record.to_value.to_string();
            self.push_row(
                &mut out,
                &[
                    record.timestamp.as_str(),
                    record.category.as_str(),
                    from_value.as_str(),
                    record.from_unit.as_str(),
                    to_value.as_str(),
                    record.to_unit.as_str(),
                ],
            );
        }

        out
    }

    // Staged in a temp file beside the destination, then renamed over it
    pub fn export(&self, path: &Path, records: &[ConversionRecord]) -> Result<usize, ExportError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(self.render(records).as_bytes())?;
        file.flush()?;
        file.persist(path)?;

        log::info!("Exported {} conversions to {}", records.len(), path.display());
        Ok(records.len())
    }

    fn push_row(&self, out: &mut String, fields: &[&str]) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            out.push_str(&self.escape(field));
        }
        out.push('\n');
    }

    fn escape(&self, field: &str) -> String {
        if field.contains(self.delimiter) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(category: &str, from_value: f64, to_value: f64) -> ConversionRecord {
        ConversionRecord {
            timestamp: "12:30:05".to_string(),
            category: category.to_string(),
            from_value,
            from_unit: "Meter".to_string(),
            to_value,
            to_unit: "Centimeter".to_string(),
        }
    }

    #[test]
    fn test_render_header_and_rows() {
        let csv = CsvExporter::new().render(&[record("Length", 1.5, 150.0)]);
        assert_eq!(
            csv,
            "timestamp,category,from_value,from_unit,to_value,to_unit\n\
             12:30:05,Length,1.5,Meter,150,Centimeter\n"
        );
    }

    #[test]
    fn test_render_quotes_special_fields() {
        let csv = CsvExporter::new().render(&[record("Odd, \"quoted\"", 1.0, 100.0)]);
        assert!(csv.contains("\"Odd, \"\"quoted\"\"\""));
    }

    #[test]
    fn test_render_empty_history() {
        let csv = CsvExporter::new().render(&[]);
        assert_eq!(csv, "timestamp,category,from_value,from_unit,to_value,to_unit\n");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let records = vec![record("Length", 1.0, 100.0), record("Length", 2.0, 200.0)];

        let written = CsvExporter::new().export(&path, &records).unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.ends_with("2,Meter,200,Centimeter\n"));
    }
}
