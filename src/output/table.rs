//! Redacting tabulator: payload -> masked, text-coerced table

use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::{
    Alignment, Modify, Style,
    object::{Columns, Rows},
};

use super::redact::{MASK, is_auth_related, is_sensitive};

/// Explicit classification of a payload's tabular shape
enum TableInput {
    /// A single mapping, rendered as one row
    Row(Map<String, Value>),
    /// A sequence of mappings, one row each
    Rows(Vec<Map<String, Value>>),
    /// Anything else; takes the fallback path
    Opaque,
}

fn classify(data: &Value) -> TableInput {
    match data {
        Value::Object(map) => TableInput::Row(map.clone()),
        Value::Array(items) => {
            let rows: Option<Vec<_>> = items
                .iter()
                .map(|item| item.as_object().cloned())
                .collect();
            match rows {
                Some(rows) => TableInput::Rows(rows),
                None => TableInput::Opaque,
            }
        }
        _ => TableInput::Opaque,
    }
}

/// Render a payload as a table under `label`.
///
/// With `hide_sensitive` set, every column whose name matches the
/// sensitive-field rule holds only the mask literal, regardless of payload
/// shape. All cells are coerced to text so the rendering layer never sees
/// mixed-type columns. Pure: identical input yields identical output.
pub fn render(data: &Value, label: &str, hide_sensitive: bool) -> String {
    let body = match classify(data) {
        TableInput::Row(map) => render_rows(&[map], hide_sensitive),
        TableInput::Rows(rows) => render_rows(&rows, hide_sensitive),
        TableInput::Opaque => fallback_summary(data, hide_sensitive),
    };

    format!("{label}\n{body}")
}

fn render_rows(rows: &[Map<String, Value>], hide_sensitive: bool) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    // Column union across rows, first-seen order
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_uppercase()));

    let mut cell_rows: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| {
                // Mask before coercion so original values never reach it
                if hide_sensitive && is_sensitive(col) {
                    return MASK.to_string();
                }
                row.get(col).map(coerce_cell).unwrap_or_default()
            })
            .collect();
        builder.push_record(cells.clone());
        cell_rows.push(cells);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    // Per-column type inference: columns whose cells are uniformly numeric
    // read as numbers and right-align; anything ambiguous stays text
    for (idx, _) in columns.iter().enumerate() {
        if is_numeric_column(&cell_rows, idx) {
            table.with(Modify::new(Columns::one(idx)).with(Alignment::right()));
        }
    }

    table.to_string()
}

fn is_numeric_column(rows: &[Vec<String>], idx: usize) -> bool {
    let mut seen = false;
    for row in rows {
        let cell = &row[idx];
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<f64>().is_err() {
            return false;
        }
        seen = true;
    }
    seen
}

/// Coerce a heterogeneous value to display-safe text
fn coerce_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        nested => nested.to_string(),
    }
}

/// Structural summary shown when tabular conversion fails.
///
/// With masking on, the original data never appears: mappings reduce to
/// key -> mask-or-type-name, everything else to a type name plus length
/// where measurable.
fn fallback_summary(data: &Value, hide_sensitive: bool) -> String {
    if !hide_sensitive {
        return serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    }

    match data {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["FIELD", "SUMMARY"]);
            for (key, value) in map {
                let summary = if is_auth_related(key) {
                    MASK.to_string()
                } else {
                    type_name(value).to_string()
                };
                builder.push_record([key.clone(), summary]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            table.to_string()
        }
        Value::Array(items) => format!("array (length {})", items.len()),
        Value::String(s) => format!("string (length {})", s.len()),
        other => type_name(other).to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
