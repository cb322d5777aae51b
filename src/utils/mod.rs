//! Utils module split into submodules

mod constants;
mod dice;
mod errors;
mod levels;
mod validation;

pub use constants::{DIE_FACES, MAX_DICE, MAX_LEVEL, MIN_DICE, MIN_LEVEL, PRIME_TARGETS};
pub use dice::roll_dice;
pub use errors::UtilsError;
pub use levels::targets_for_level;
pub use validation::{validate_dice, validate_dice_count, validate_level};
