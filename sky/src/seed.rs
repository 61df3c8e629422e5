//! Validation of user-entered seed text.
//!
//! Seeds are letters and digits only (`^[a-z0-9]+$`, any case). Surrounding
//! whitespace is trimmed first; anything else is rejected before the engine
//! state is touched.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

/// Why a seed was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,
    #[error("seed may only contain letters and digits, found {0:?}")]
    InvalidChar(char),
}

/// Validate `raw` and return the trimmed seed.
///
/// # Errors
///
/// [`SeedError::Empty`] for blank input, [`SeedError::InvalidChar`] for the
/// first character outside `[a-zA-Z0-9]`.
pub fn validate_seed(raw: &str) -> Result<&str, SeedError> {
    let seed = raw.trim();
    if seed.is_empty() {
        return Err(SeedError::Empty);
    }
    match seed.chars().find(|c| !c.is_ascii_alphanumeric()) {
        Some(c) => Err(SeedError::InvalidChar(c)),
        None => Ok(seed),
    }
}
