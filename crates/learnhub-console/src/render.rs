//! Screen rendering.
//!
//! Listings go out as an aligned table or a pretty-printed JSON array
//! depending on the `--format` flag; detail blocks align their labels to
//! the widest one, and status lines carry a leading marker.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// How listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Print a listing in the selected format.
pub fn list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    println!("{}", render_list(items, format));
}

fn render_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table if items.is_empty() => "Nothing to show.".to_string(),
        OutputFormat::Table => Table::new(items).with(Style::psql()).to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Print a labelled detail block.
pub fn detail(fields: &[(&str, String)]) {
    println!("{}", render_detail(fields));
}

fn render_detail(fields: &[(&str, String)]) -> String {
    let width = fields
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    fields
        .iter()
        .map(|(label, value)| format!("  {label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a section heading.
pub fn heading(title: &str) {
    println!("\n=== {title} ===");
}

/// Print a success line.
pub fn success(message: &str) {
    println!("✓ {message}");
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("⚠ {message}");
}

/// Print a failure line.
pub fn failure(message: &str) {
    eprintln!("✗ {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        title: String,
    }

    #[test]
    fn test_empty_table_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render_list(&rows, OutputFormat::Table), "Nothing to show.");
    }

    #[test]
    fn test_json_carries_every_row() {
        let rows = vec![Row {
            title: "Introduction to React".into(),
        }];
        let json = render_list(&rows, OutputFormat::Json);
        assert!(json.contains("\"title\": \"Introduction to React\""));
    }

    #[test]
    fn test_detail_aligns_values_to_widest_label() {
        let block = render_detail(&[
            ("Title", "Intro".to_string()),
            ("Description", "Basics".to_string()),
        ]);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  Title"));
        assert_eq!(lines[0].find("Intro"), lines[1].find("Basics"));
    }
}
