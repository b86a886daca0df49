use crate::diagnostics::{Diagnostics, Warning};
use crate::schema::PropertyType;

/// Map a native column-type token to its canonical semantic type.
///
/// Tokens are matched on the leading type word, case-insensitively, ignoring
/// any length or precision suffix (`STRING(255)` matches as `STRING`).
/// Unrecognized tokens fall back to `STRING` with a warning; this mapper
/// never fails the run.
pub fn map_column(
    model: &str,
    column: &str,
    native_type: &str,
    diagnostics: &mut Diagnostics,
) -> PropertyType {
    match base_token(native_type).to_ascii_uppercase().as_str() {
        "INTEGER" | "BIGINT" | "MEDIUMINT" | "SMALLINT" | "TINYINT" => PropertyType::Number,
        "STRING" | "CHAR" | "VARCHAR" | "TEXT" => PropertyType::String,
        "DATE" | "DATEONLY" | "DATETIME" => PropertyType::Date,
        _ => {
            diagnostics.warn(Warning::UnhandledColumnType {
                model: model.to_string(),
                column: column.to_string(),
                native_type: native_type.to_string(),
            });
            PropertyType::String
        }
    }
}

/// Strip a parenthesized suffix and surrounding whitespace from a type token.
fn base_token(native_type: &str) -> &str {
    match native_type.find('(') {
        Some(index) => native_type[..index].trim(),
        None => native_type.trim(),
    }
}
