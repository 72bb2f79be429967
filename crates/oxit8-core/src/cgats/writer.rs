//! CGATS writer

use std::fmt::Write;

use super::parser::Sheet;
use super::table::{Table, ValueKind};

/// Keywords written next to the block they describe instead of with the
/// other properties
const FIELDS_KEYWORD: &str = "NUMBER_OF_FIELDS";
const SETS_KEYWORD: &str = "NUMBER_OF_SETS";

/// Format a number the way it is written into a sheet
///
/// Integral values print without a fraction, tiny or huge magnitudes use
/// exponent notation and everything else uses the shortest decimal that
/// parses back to the same `f64`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if value.fract() == 0.0 && magnitude < 1e15 {
        format!("{}", value as i64)
    } else if !(1e-4..1e15).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Quote a property value
///
/// Line breaks become spaces. A value holding both quote characters has its
/// double quotes turned into single quotes, so it does not read back as-is.
fn quote(value: &str) -> String {
    let value = value.replace(['\r', '\n'], " ");
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{}\"", value),
        (true, false) => format!("'{}'", value),
        (true, true) => format!("\"{}\"", value.replace('"', "'")),
    }
}

fn write_table(out: &mut String, table: &Table) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", table.sheet_type());
    out.push('\n');

    let mut fields = None;
    let mut sets = None;
    for (keyword, property) in table.properties() {
        let value = match property.kind {
            ValueKind::Quoted => quote(&property.value),
            ValueKind::Bare => property.value.clone(),
        };
        match keyword {
            FIELDS_KEYWORD => fields = Some(value),
            SETS_KEYWORD => sets = Some(value),
            _ => {
                let _ = writeln!(out, "{}\t{}", keyword, value);
            }
        }
    }

    let width = table
        .rows()
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.data_format().len()))
        .max()
        .unwrap_or(0);

    out.push('\n');
    let fields = fields.unwrap_or_else(|| width.to_string());
    let _ = writeln!(out, "{}\t{}", FIELDS_KEYWORD, fields);
    out.push_str("BEGIN_DATA_FORMAT\n");
    out.push_str(&table.data_format().join("\t"));
    out.push_str("\nEND_DATA_FORMAT\n\n");

    let sets = sets.unwrap_or_else(|| table.row_count().to_string());
    let _ = writeln!(out, "{}\t{}", SETS_KEYWORD, sets);
    out.push_str("BEGIN_DATA\n");
    for row in table.rows() {
        let mut cells = row.clone();
        cells.resize(width, "0".to_string());
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out.push_str("END_DATA\n");
}

impl Sheet {
    /// Serialize every table of this sheet to text
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, table) in self.tables().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_table(&mut out, table);
        }
        out
    }

    /// Serialize every table of this sheet to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }
}
