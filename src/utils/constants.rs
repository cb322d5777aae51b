// Bounds for the command line inputs
pub const MIN_DICE: usize = 1;
pub const MAX_DICE: usize = 24;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 9;

/// Highest face on a die; rolls are uniform in `1..=DIE_FACES`
pub const DIE_FACES: u64 = 6;

/// Candidate targets per level, tried in order
pub const PRIME_TARGETS: [[i64; 3]; 9] = [
    [3, 5, 7],
    [11, 13, 17],
    [19, 23, 29],
    [31, 37, 41],
    [43, 47, 53],
    [59, 61, 67],
    [71, 73, 79],
    [83, 89, 97],
    [101, 103, 107],
];
