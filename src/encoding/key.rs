use std::fmt;

use crate::encoding::mask::DieMask;

/// A search state `(value, mask)` packed into one ordered integer.
///
/// The value occupies the high 64 bits and the mask the low 64 bits, so every
/// pair the engine can produce maps to a distinct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(u128);

impl StateKey {
    pub fn encode(value: u64, mask: DieMask) -> Self {
        Self((u128::from(value) << u64::BITS) | u128::from(mask.bits()))
    }

    pub fn decode(self) -> (u64, DieMask) {
        (self.value(), self.mask())
    }

    pub fn value(self) -> u64 {
        (self.0 >> u64::BITS) as u64
    }

    pub fn mask(self) -> DieMask {
        DieMask::from_bits(self.0 as u64)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.value(), self.mask())
    }
}
