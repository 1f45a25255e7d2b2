use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unknown {list} field: {field}")]
    UnknownField { list: &'static str, field: String },

    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),

    #[error("page size must be at least 1")]
    InvalidPageSize,
}
