use thiserror::Error;

/// Reasons the search endpoint rejects a query.
///
/// The `Display` text is what ends up in the `error` field of a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid limit")]
    MalformedLimit,

    #[error("limit must be > 0")]
    InvalidLimit,

    #[error("invalid offset")]
    MalformedOffset,

    #[error("offset must be > 0")]
    InvalidOffset,

    #[error("invalid order_by")]
    InvalidOrderBy,

    #[error("OrderField {0} invalid")]
    InvalidOrderField(String),
}
