use serde_json::Value;

use crate::api::utils::Row;
use crate::models::ApiError;

/// Draws a table from the given rows, one `<td>` per field value.
///
/// Record shapes are not known statically, so no `<thead>` or `<th>` is
/// emitted. Values pass through uninterpreted, without escaping.
pub fn render_table(rows: &[Row], title: &str) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut table = String::new();
    if !title.is_empty() {
        table.push_str(&format!("<h2>{}</h2>", title));
    }
    table.push_str("<table>");
    table.push_str("<tbody>");

    for (id, record) in rows {
        table.push_str(&format!("<tr class=\"list-{}\">", id));
        table.push_str(&format!("<td>{}</td>\n", cell_values(record).join("</td><td>")));
        table.push_str("</tr>");
    }

    table.push_str("</tbody></table>\n\n");
    table
}

/// Fallback for payloads with no known tabular shape.
pub fn render_pretty(data: &Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(data)
        .map(|text| format!("<pre>{}</pre>", text))
        .map_err(|err| ApiError::Render(err.to_string()))
}

fn cell_values(record: &Value) -> Vec<String> {
    match record {
        Value::Object(map) => map.values().map(cell_text).collect(),
        Value::Array(items) => items.iter().map(cell_text).collect(),
        other => vec![cell_text(other)],
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
