//! Built-in lint rules.

mod no_unused_bindings;
mod no_unused_top_level;

pub use no_unused_bindings::NoUnusedBindings;
pub use no_unused_top_level::NoUnusedTopLevel;

/// Check if a name matches the ignore convention for intentionally
/// unused bindings.
pub(crate) fn matches_ignore_pattern(name: &str, pattern: Option<&str>) -> bool {
    // Underscore prefix always means intentionally unused.
    if name.starts_with('_') {
        return true;
    }

    match pattern {
        Some("^_") | None => false,
        Some(prefix) => name.starts_with(prefix),
    }
}
