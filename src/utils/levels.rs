use crate::utils::constants::{MIN_LEVEL, PRIME_TARGETS};
use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_level;

/// # Errors
///
/// Returns an error if `level` is outside the level table.
pub fn targets_for_level(level: u8) -> Result<&'static [i64; 3], UtilsError> {
    validate_level(level)?;
    PRIME_TARGETS
        .get(usize::from(level - MIN_LEVEL))
        .ok_or(UtilsError::LevelOutOfRange {
            level,
            min: MIN_LEVEL,
            max: PRIME_TARGETS.len() as u8,
        })
}
