//! Packing of `(value, consumed dice)` search states into ordered keys

mod key;
mod mask;

pub use key::StateKey;
pub use mask::{DieMask, MAX_MASK_BITS};
