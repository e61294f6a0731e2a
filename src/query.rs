//! Filter-then-group query evaluation.
//!
//! [`evaluate`] narrows the store with a [`FilterSet`], then partitions the
//! survivors by an attribute. Output is fully deterministic: groups are
//! ordered by key (byte-wise), and items keep store order within a group.
//! Unknown group-by keys never fail; they collapse everything into a single
//! [`ALL_ITEMS_GROUP`] bucket.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::{AttributeKey, FilterSet, Item, ItemStore};

/// Group-by key used when the caller supplies none.
pub const DEFAULT_GROUP_BY: &str = "shape";

/// Key of the single group produced for an unrecognized group-by key.
pub const ALL_ITEMS_GROUP: &str = "All Items";

/// Items sharing one group-by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: String,
    pub items: Vec<Item>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered groups produced by [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedResult {
    /// The attribute groups were partitioned by, or `None` when the
    /// requested key was not recognized.
    pub group_by: Option<AttributeKey>,
    pub groups: Vec<Group>,
}

impl GroupedResult {
    /// Total number of items across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// `true` when there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }
}

/// Filter `store` by `criteria`, then group the result by `group_by`.
///
/// An empty `group_by` means [`DEFAULT_GROUP_BY`].
pub fn evaluate(store: &ItemStore, criteria: &FilterSet, group_by: &str) -> GroupedResult {
    let filtered = if criteria.is_empty() {
        store.items().to_vec()
    } else {
        store.filter(criteria)
    };

    let group_by = if group_by.is_empty() {
        DEFAULT_GROUP_BY
    } else {
        group_by
    };

    let result = match group_by.parse::<AttributeKey>() {
        Ok(key) => GroupedResult {
            group_by: Some(key),
            groups: partition(filtered, key),
        },
        Err(_) => GroupedResult {
            group_by: None,
            groups: vec![Group {
                key: ALL_ITEMS_GROUP.to_string(),
                items: filtered,
            }],
        },
    };

    tracing::debug!(
        filters = %criteria,
        group_by,
        groups = result.groups.len(),
        items = result.total(),
        "Evaluated item query"
    );

    result
}

fn partition(items: Vec<Item>, key: AttributeKey) -> Vec<Group> {
    let mut buckets: BTreeMap<String, Vec<Item>> = BTreeMap::new();
    for item in items {
        buckets
            .entry(key.value(&item).to_string())
            .or_default()
            .push(item);
    }

    buckets
        .into_iter()
        .map(|(key, items)| Group { key, items })
        .collect()
}
