//! Slug normalization.

/// Derives a URL-safe slug from a display name.
///
/// Lower-cases the input, replaces spaces with hyphens, and drops every
/// character outside `[a-z0-9-]`. Pure and infallible: an empty input yields
/// an empty slug, so callers must reject empty names upstream.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
