//! Class-name merging.

/// Join class tokens with single spaces, dropping falsy ones.
///
/// `None`, empty, and whitespace-only entries are skipped. An entry holding
/// several whitespace-separated classes contributes each of them. Repeated
/// tokens keep their first position only, so the output never contains a
/// class twice.
///
/// # Examples
/// ```
/// use grove::utils::lang::class_names;
/// assert_eq!(class_names(&[Some("page-title"), None, Some("sidebar")]), "page-title sidebar");
/// assert_eq!(class_names(&[Some(""), Some("  a  b ")]), "a b");
/// ```
pub fn class_names(tokens: &[Option<&str>]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens.iter().flatten().flat_map(|t| t.split_whitespace()) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}
