//! Name cleansing and full name derivation.

/// Cleanse a first or last name.
///
/// A name must start with an ASCII letter: leading non-alphabetic characters
/// and trailing whitespace are removed, then the name is capitalized (first
/// letter upper case, the rest lower case).
///
/// Returns `None` for an empty input or when nothing is left after stripping.
pub fn cleanse_name(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let stripped = raw
        .trim_start_matches(|ch: char| !ch.is_ascii_alphabetic())
        .trim_end();
    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        tracing::warn!(value = raw, "name has no alphabetic characters");
        return None;
    };

    let mut name: String = first.to_uppercase().collect();
    name.push_str(&chars.as_str().to_lowercase());
    Some(name)
}

/// Join first and last name with a single space, skipping empty parts.
pub fn derive_full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
