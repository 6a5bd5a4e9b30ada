use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Invalid argument: {name} must be {expected}, got {value}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("Insufficient data: need at least {needed} values, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, StatsError>;
