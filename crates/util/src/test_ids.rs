//! Deterministic test identifiers derived from display labels.
//!
//! Renderers tag interactive regions with identifiers such as
//! `link-nav-experience` so end-to-end checks can find them without relying on
//! layout. Labels are lowercased before word splitting, so camel-cased brand
//! names ("HackerRank") stay a single word.

use heck::ToKebabCase;

/// Normalizes a label into its identifier form: lowercase words joined by `-`.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().to_kebab_case()
}

/// Builds a `prefix-label` test identifier (e.g., `link-nav-about`).
pub fn test_id(prefix: &str, label: &str) -> String {
    format!("{prefix}-{}", normalize_label(label))
}
