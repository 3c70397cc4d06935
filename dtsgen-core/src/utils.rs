//! Shared string utilities.

/// Lower-case the first character, leaving the rest untouched
/// (e.g., "UserProfile" -> "userProfile", "ID" -> "iD").
pub fn to_camel_case(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Check whether `s` can be used as a bare TypeScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Strip surrounding whitespace, quotes and verbatim-identifier sigils from an
/// attribute argument (e.g., `@"first_name"` -> `first_name`).
pub fn trim_quotes(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '@' || c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("UserProfile"), "userProfile");
        assert_eq!(to_camel_case("userProfile"), "userProfile");
        assert_eq!(to_camel_case("ID"), "iD");
        assert_eq!(to_camel_case("X"), "x");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("  "), "  ");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("item2"));
        assert!(!is_identifier("first-name"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_trim_quotes() {
        assert_eq!(trim_quotes("\"name\""), "name");
        assert_eq!(trim_quotes("@\"name\""), "name");
        assert_eq!(trim_quotes("'name'"), "name");
        assert_eq!(trim_quotes("@class"), "class");
        assert_eq!(trim_quotes(" plain "), "plain");
    }
}
