//! Comment and key helpers shared by the declaration nodes.

use dtsgen_core::is_identifier;

/// Single-line form of a doc summary: whitespace runs collapse to one space
/// and a closing `*/` is escaped.
pub fn doc_text(summary: &str) -> Option<String> {
    let text = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then(|| text.replace("*/", "*\\/"))
}

/// Property key, quoted when it is not a bare identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
