//! Textual classification of type signatures.

use dtsgen_ir::TypeSignature;

/// Generic collection types recognized without a `System.Collections` prefix.
const COLLECTION_NAMES: &[&str] = &[
    "List",
    "IList",
    "ICollection",
    "IEnumerable",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "Collection",
    "ReadOnlyCollection",
    "ObservableCollection",
    "HashSet",
    "ISet",
    "SortedSet",
    "LinkedList",
    "Queue",
    "Stack",
    "Dictionary",
    "IDictionary",
    "IReadOnlyDictionary",
    "SortedDictionary",
    "SortedList",
    "ConcurrentDictionary",
    "ImmutableArray",
    "ImmutableList",
];

/// How a property signature is shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureKind {
    /// `T[]` with its element signature.
    Array(TypeSignature),
    /// A sequence whose element needs generic-argument guessing.
    Collection,
    /// A key/value collection. Arguments are absent when the signature
    /// does not spell them out.
    Dictionary { key: Option<String>, value: Option<String> },
    Scalar(TypeSignature),
}

pub fn classify(signature: &TypeSignature) -> SignatureKind {
    let signature = signature.unwrap_nullable();
    if let Some(element) = signature.array_element() {
        return SignatureKind::Array(element.unwrap_nullable());
    }

    let raw = signature.as_str();
    let is_collection = raw.starts_with("System.Collections")
        || (raw.contains('<') && COLLECTION_NAMES.contains(&signature.local_name()));
    if !is_collection {
        return SignatureKind::Scalar(signature);
    }

    if raw.contains("Dictionary") || raw.contains("KeyValuePair") {
        let (key, value) = dictionary_arguments(raw);
        return SignatureKind::Dictionary { key, value };
    }
    SignatureKind::Collection
}

/// Top-level generic arguments of a signature (`A<B, C<D>>` -> `[B, C<D>]`).
pub fn generic_arguments(raw: &str) -> Vec<String> {
    let (Some(open), Some(close)) = (raw.find('<'), raw.rfind('>')) else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let inner = &raw[open + 1..close];
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                arguments.push(inner[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    arguments.push(inner[start..].trim().to_string());
    arguments.retain(|a| !a.is_empty());
    arguments
}

/// Key and value of `Dictionary<K, V>` or `IEnumerable<KeyValuePair<K, V>>`.
fn dictionary_arguments(raw: &str) -> (Option<String>, Option<String>) {
    let mut arguments = generic_arguments(raw);
    if let [single] = arguments.as_slice() {
        if single.contains("KeyValuePair") {
            arguments = generic_arguments(single);
        }
    }
    let mut arguments = arguments.into_iter();
    match (arguments.next(), arguments.next()) {
        (Some(key), Some(value)) => (Some(key), Some(value)),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(raw: &str) -> SignatureKind {
        classify(&TypeSignature::new(raw))
    }

    #[test]
    fn test_generic_arguments() {
        assert_eq!(generic_arguments("List<int>"), vec!["int"]);
        assert_eq!(
            generic_arguments("Dictionary<string, List<Foo>>"),
            vec!["string", "List<Foo>"]
        );
        assert!(generic_arguments("int").is_empty());
        assert!(generic_arguments("List<>").is_empty());
    }

    #[test]
    fn test_classify_arrays_and_scalars() {
        assert_eq!(kind("int[]"), SignatureKind::Array(TypeSignature::new("int")));
        assert_eq!(kind("int?[]"), SignatureKind::Array(TypeSignature::new("int")));
        assert_eq!(kind("Order"), SignatureKind::Scalar(TypeSignature::new("Order")));
        assert_eq!(
            kind("Nullable<System.DateTime>"),
            SignatureKind::Scalar(TypeSignature::new("System.DateTime"))
        );
        assert_eq!(kind("Lazy<Order>"), SignatureKind::Scalar(TypeSignature::new("Lazy<Order>")));
    }

    #[test]
    fn test_classify_collections() {
        assert_eq!(kind("System.Collections.Generic.List<App.OrderLine>"), SignatureKind::Collection);
        assert_eq!(kind("IEnumerable<string>"), SignatureKind::Collection);
        assert_eq!(kind("System.Collections.ArrayList"), SignatureKind::Collection);
    }

    #[test]
    fn test_classify_dictionaries() {
        assert_eq!(
            kind("System.Collections.Generic.Dictionary<string, App.Order>"),
            SignatureKind::Dictionary {
                key: Some("string".into()),
                value: Some("App.Order".into()),
            }
        );
        assert_eq!(
            kind("IEnumerable<KeyValuePair<int, string>>"),
            SignatureKind::Dictionary {
                key: Some("int".into()),
                value: Some("string".into()),
            }
        );
        assert_eq!(
            kind("System.Collections.IDictionary"),
            SignatureKind::Dictionary {
                key: None,
                value: None
            }
        );
    }
}
