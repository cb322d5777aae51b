use log::{debug, warn};

use crate::utils::constants::{MAX_DICE, MAX_LEVEL, MIN_DICE, MIN_LEVEL};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `count` is outside `MIN_DICE..=MAX_DICE`.
pub fn validate_dice_count(count: usize) -> Result<(), UtilsError> {
    if !(MIN_DICE..=MAX_DICE).contains(&count) {
        warn!("Dice count {} out of range", count);
        return Err(UtilsError::DiceCountOutOfRange {
            count,
            min: MIN_DICE,
            max: MAX_DICE,
        });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if `level` is outside `MIN_LEVEL..=MAX_LEVEL`.
pub fn validate_level(level: u8) -> Result<(), UtilsError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        warn!("Level {} out of range", level);
        return Err(UtilsError::LevelOutOfRange {
            level,
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the number of dice is out of range or any die is zero.
pub fn validate_dice(dice: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating dice: {:?}", dice);

    validate_dice_count(dice.len())?;
    if let Some((index, &value)) = dice.iter().enumerate().find(|(_, v)| **v == 0) {
        warn!("Die {} is zero", index);
        return Err(UtilsError::InvalidDie { index, value });
    }

    debug!("Dice validation successful");
    Ok(())
}
