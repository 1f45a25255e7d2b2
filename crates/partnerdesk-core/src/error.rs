use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {track} status: {value}")]
    InvalidStatus { track: &'static str, value: String },

    #[error("invalid {track} transition from {from} to {to}")]
    InvalidTransition {
        track: &'static str,
        from: &'static str,
        to: &'static str,
    },

    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: Uuid, reason: String },
}
