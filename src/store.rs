//! Item Store
//!
//! Immutable, validated, in-memory item collection:
//!
//! - [`ItemStore`]: Read-only store answering filter and distinct-value queries
//! - [`Item`] / [`RawItem`]: Validated records and their unvalidated input
//! - [`AttributeKey`]: The attributes items can be filtered and grouped by
//! - [`FilterSet`]: Conjunctive equality filters
//! - [`default_items`]: The built-in catalog

mod error;
mod item_store;
mod seed;
mod types;

pub use error::{InvalidItem, ValidationError};
pub use item_store::ItemStore;
pub use seed::default_items;
pub use types::{AttributeKey, FilterSet, Item, RawItem};
