use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number of dice must be between {min} and {max}, got {count}")]
    DiceCountOutOfRange { count: usize, min: usize, max: usize },
    #[error("Level must be between {min} and {max}, got {level}")]
    LevelOutOfRange { level: u8, min: u8, max: u8 },
    #[error("Die {index} must be a positive integer, got {value}")]
    InvalidDie { index: usize, value: u64 },
}
