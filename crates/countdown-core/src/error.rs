use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD with non-zero year, month and day")]
    InvalidDate(String),

    #[error("Invalid urgency tier: {0}")]
    InvalidUrgency(String),
}
