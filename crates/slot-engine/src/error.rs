//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid working-hour rule: {0}")]
    InvalidRule(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Request superseded by a newer selection for the same staff and date")]
    Superseded,
}

pub type Result<T> = std::result::Result<T, SlotError>;
