//! Item validation errors.
//!
//! Only raised while building an [`ItemStore`](super::ItemStore); queries
//! against a constructed store never fail.

use thiserror::Error;

use super::types::AttributeKey;

/// Why a single item was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidItem {
    /// Item ids must be positive.
    #[error("invalid item ID: {0}")]
    NonPositiveId(i64),

    /// An attribute was empty after trimming whitespace.
    #[error("item {id} has empty {attribute}")]
    EmptyAttribute { id: i64, attribute: AttributeKey },
}

/// An item at `index` failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid item at index {index}: {reason}")]
pub struct ValidationError {
    pub index: usize,
    pub reason: InvalidItem,
}
