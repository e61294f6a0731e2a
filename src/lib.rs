//! Item Browser - server-rendered, HTMX-enhanced item catalog
//!
//! A fixed, validated in-memory item catalog that can be filtered by
//! attribute values and grouped by an attribute, rendered as HTML partials.
//! It can be used as a library, or run as a standalone binary with the
//! `itembrowser` executable.
//!
//! # Architecture
//!
//! - **Store**: Immutable, validated item collection ([`ItemStore`])
//! - **Query**: Deterministic filter-then-group evaluation ([`evaluate`])
//! - **View state**: Pure URL state transitions for the sidebar ([`BrowserState`])
//! - **Server**: Axum router, Askama templates, JSON API
//! - **Config**: YAML configuration with env-var expansion
//!
//! # Example
//!
//! ```
//! use itembrowser::{AttributeKey, FilterSet, ItemStore, default_items, evaluate};
//!
//! let store = ItemStore::new(default_items()).unwrap();
//! let filters = FilterSet::new().with(AttributeKey::Color, "red");
//! let result = evaluate(&store, &filters, "shape");
//!
//! assert_eq!(result.total(), 4);
//! let keys: Vec<&str> = result.keys().collect();
//! assert_eq!(keys, ["circle", "square", "triangle"]);
//! ```

pub mod config;
pub mod format;
pub mod query;
pub mod server;
pub mod store;
pub mod view_state;

pub use query::{ALL_ITEMS_GROUP, DEFAULT_GROUP_BY, Group, GroupedResult, evaluate};
pub use store::{
    AttributeKey, FilterSet, InvalidItem, Item, ItemStore, RawItem, ValidationError,
    default_items,
};
pub use view_state::{Action, BrowserState};
