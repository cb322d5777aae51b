use std::fmt;

/// Number of die positions a mask can address
pub const MAX_MASK_BITS: usize = u64::BITS as usize;

/// Set of die positions consumed by a state, bit `i` standing for die `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DieMask(u64);

impl DieMask {
    pub const EMPTY: DieMask = DieMask(0);

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// Mask holding only die `index`; `None` when the index is not addressable
    pub fn single(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|shift| 1u64.checked_shl(shift))
            .map(Self)
    }

    /// Mask holding every die position in `0..count`
    pub fn full(count: usize) -> Option<Self> {
        match count {
            0 => Some(Self::EMPTY),
            n if n < MAX_MASK_BITS => Some(Self((1u64 << n) - 1)),
            MAX_MASK_BITS => Some(Self(u64::MAX)),
            _ => None,
        }
    }

    pub fn union(self, other: DieMask) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_disjoint(self, other: DieMask) -> bool {
        self.0 & other.0 == 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for DieMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
