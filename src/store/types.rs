//! Core data types for the item store.
//!
//! - [`Item`]: A validated, immutable record
//! - [`RawItem`]: Unvalidated input, as read from seed data or configuration
//! - [`AttributeKey`]: The closed set of filterable/groupable attributes
//! - [`FilterSet`]: Conjunctive equality constraints over attributes

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// An attribute an item can be filtered or grouped by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKey {
    Color,
    Shape,
    Category,
}

impl AttributeKey {
    /// Lowercase name, as used in query strings.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Read this attribute's value from an item.
    pub fn value(self, item: &Item) -> &str {
        match self {
            Self::Color => &item.color,
            Self::Shape => &item.shape,
            Self::Category => &item.category,
        }
    }
}

/// Unvalidated item input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: i64,
    pub color: String,
    pub shape: String,
    pub category: String,
}

impl RawItem {
    pub fn new(
        id: i64,
        color: impl Into<String>,
        shape: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            color: color.into(),
            shape: shape.into(),
            category: category.into(),
        }
    }
}

/// A validated item.
///
/// Only constructed by [`ItemStore::new`](super::ItemStore::new), so every
/// `Item` has a positive id and non-empty, trimmed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    id: u64,
    color: String,
    shape: String,
    category: String,
}

impl Item {
    pub(super) fn new(id: u64, color: String, shape: String, category: String) -> Self {
        Self {
            id,
            color,
            shape,
            category,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Equality constraints over item attributes, combined with logical AND.
///
/// Holds at most one value per key. Keys that do not name an
/// [`AttributeKey`] are dropped when the set is built from raw strings, so
/// they impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilterSet {
    criteria: BTreeMap<AttributeKey, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`, replacing any previous value for `key`.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.criteria.insert(key, value.into());
    }

    /// Add a constraint from raw strings.
    ///
    /// Returns `false` (and adds nothing) when the key is unrecognized or the
    /// value is empty.
    pub fn insert_raw(&mut self, key: &str, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match key.parse::<AttributeKey>() {
            Ok(key) => {
                self.insert(key, value);
                true
            }
            Err(_) => {
                tracing::debug!(key, value, "Ignoring filter on unknown attribute");
                false
            }
        }
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<String> {
        self.criteria.remove(&key)
    }

    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.criteria.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Iterate constraints in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.criteria.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Whether `item` satisfies every constraint.
    pub fn matches(&self, item: &Item) -> bool {
        self.criteria
            .iter()
            .all(|(key, value)| key.value(item) == value)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSet
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert_raw(key.as_ref(), value.as_ref());
        }
        set
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}
