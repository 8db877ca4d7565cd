//! Statement splitting
//!
//! Scripts are cut on every `;`. Semicolons inside string literals or
//! function bodies are not recognised, so the shipped scripts avoid them.

/// Split a script into trimmed, non-empty statements
pub fn split_statements(script: &str) -> impl Iterator<Item = &str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
}
