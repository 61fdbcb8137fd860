//! Field checks shared by the entity drafts

/// Trim a required text field, failing with `empty` when nothing is left
pub fn require_text<E>(value: &str, empty: E) -> Result<String, E> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(empty);
    }

    Ok(trimmed.to_string())
}
