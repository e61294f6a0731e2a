//! Immutable in-memory item store.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::error::{InvalidItem, ValidationError};
use super::types::{AttributeKey, FilterSet, Item, RawItem};

/// Read-only collection of validated items.
///
/// Built once at startup and never mutated. Cloning is cheap (the items are
/// shared), so a store can be handed to every request handler.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Arc<[Item]>,
}

impl ItemStore {
    /// Validate `items` and build a store preserving their order.
    ///
    /// # Errors
    /// Returns [`ValidationError`] for the first item whose id is not positive
    /// or whose color, shape or category is empty after trimming.
    pub fn new(items: Vec<RawItem>) -> Result<Self, ValidationError> {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                validate(raw).map_err(|reason| ValidationError { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = items.len(), "Item store initialized");

        Ok(Self {
            items: items.into(),
        })
    }

    /// All items, in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items matching every criterion, in store order.
    ///
    /// An empty filter set returns a copy of the whole collection.
    pub fn filter(&self, criteria: &FilterSet) -> Vec<Item> {
        if criteria.is_empty() {
            return self.items.to_vec();
        }
        self.items
            .iter()
            .filter(|item| criteria.matches(item))
            .cloned()
            .collect()
    }

    /// Sorted, deduplicated values of `key` across all items.
    pub fn distinct_values(&self, key: AttributeKey) -> Vec<String> {
        self.items
            .iter()
            .map(|item| key.value(item))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Like [`distinct_values`](Self::distinct_values), for a key given by
    /// name. Unknown names yield an empty list.
    pub fn distinct_values_named(&self, key: &str) -> Vec<String> {
        key.parse::<AttributeKey>()
            .map(|key| self.distinct_values(key))
            .unwrap_or_default()
    }
}

fn validate(raw: RawItem) -> Result<Item, InvalidItem> {
    let raw_id = raw.id;
    let id = u64::try_from(raw_id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(InvalidItem::NonPositiveId(raw_id))?;

    let attribute = |key: AttributeKey, value: String| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(InvalidItem::EmptyAttribute {
                id: raw_id,
                attribute: key,
            })
        } else {
            Ok(trimmed.to_string())
        }
    };

    Ok(Item::new(
        id,
        attribute(AttributeKey::Color, raw.color)?,
        attribute(AttributeKey::Shape, raw.shape)?,
        attribute(AttributeKey::Category, raw.category)?,
    ))
}
