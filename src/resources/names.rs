//! Resource name normalization

/// Turn a kind or resource name into its lower-case plural resource name.
///
/// This is a suffix heuristic, not an English pluralizer: names already ending
/// in `s` are kept, a trailing `y` becomes `ies`, anything else gets an `s`.
/// Irregular kinds (e.g. `Endpoints`, `Ingress`) come out the way the rules say.
pub fn normalize(name: &str) -> String {
    let lower = name.to_lowercase();

    if lower.is_empty() || lower.ends_with('s') {
        lower
    } else if let Some(stem) = lower.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{lower}s")
    }
}
