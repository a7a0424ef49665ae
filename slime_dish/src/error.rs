use crate::cell::FoodId;
use thiserror::Error;

/// Errors raised while building or running a dish.
#[derive(Debug, Error)]
pub enum DishError {
    #[error("dish shape ({width}, {height}) must have positive dimensions")]
    InvalidShape { width: usize, height: usize },

    #[error("index ({x}, {y}) is out of bounds for a dish of shape ({width}, {height})")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("food {0} has no recorded position")]
    UnknownFood(FoodId),

    #[error("malformed food table: {0}")]
    MalformedFoodTable(#[source] serde_json::Error),

    #[error("frame interval must be greater than zero")]
    InvalidInterval,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dish operations.
pub type DishResult<T> = Result<T, DishError>;
