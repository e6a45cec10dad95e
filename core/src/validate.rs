//! Creation input checks.
//!
//! # Design
//! Checks run in a fixed order and stop at the first failure, so each
//! invalid input maps to exactly one message. The empty-title check overlaps
//! with the length check's lower bound but runs first and keeps its own
//! message; clients match on these strings, so the order is contractual.
//! Lengths count Unicode scalar values, not bytes.

use crate::error::ValidationError;

/// Title length bounds, inclusive.
pub const TITLE_MIN: usize = 5;
pub const TITLE_MAX: usize = 20;

/// Longest accepted description.
pub const DESCRIPTION_MAX: usize = 100;

/// Checks creation input, returning the first failing rule.
pub fn create(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    let title_len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&title_len) {
        return Err(ValidationError::TitleLength);
    }
    if description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}
