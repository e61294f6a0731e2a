//! URL-addressable browser state.
//!
//! The page state is the active filters, the group-by key, and which
//! sidebar sections are collapsed. Every UI interaction is an [`Action`],
//! and [`BrowserState::apply`] is a pure transition, so the links rendered
//! into the sidebar are computed server-side from the current state.
//!
//! Query-string forms accepted by [`BrowserState::from_query_pairs`]:
//!
//! - `filterBy=<key>&filterValue=<value>` (single filter)
//! - `filter=<key>:<value>`, repeatable (one value per key, later wins)
//! - `groupBy=<key>`
//!
//! Collapsed sections are kept client-side and never encoded into URLs.

use std::collections::BTreeSet;

use crate::query::DEFAULT_GROUP_BY;
use crate::store::{AttributeKey, FilterSet};

/// A UI interaction that changes the browser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Filter on `key == value`, or clear the filter on `key` if it already
    /// has that value.
    ToggleFilter { key: AttributeKey, value: String },
    /// Remove the filter on one attribute.
    ClearFilter(AttributeKey),
    /// Remove every filter.
    ClearFilters,
    /// Group results by the given key.
    GroupBy(String),
    /// Collapse or expand a sidebar section.
    ToggleSection(AttributeKey),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub filters: FilterSet,
    /// Raw group-by key. May be empty or unrecognized.
    pub group_by: String,
    pub collapsed: BTreeSet<AttributeKey>,
}

impl BrowserState {
    /// Build state from decoded query-string pairs.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter_by = None;
        let mut filter_value = None;
        let mut filters = Vec::new();
        let mut group_by = String::new();

        for (name, value) in pairs {
            let value = value.as_ref();
            match name.as_ref() {
                "filterBy" => filter_by = Some(value.to_string()),
                "filterValue" => filter_value = Some(value.to_string()),
                "filter" => {
                    if let Some((key, value)) = value.split_once(':') {
                        filters.push((key.to_string(), value.to_string()));
                    }
                }
                "groupBy" => group_by = value.to_string(),
                _ => {}
            }
        }

        let mut state = Self {
            group_by,
            ..Self::default()
        };
        if let (Some(key), Some(value)) = (filter_by, filter_value) {
            state.filters.insert_raw(&key, &value);
        }
        for (key, value) in filters {
            state.filters.insert_raw(&key, &value);
        }
        state
    }

    /// The state after `action`. `self` is left untouched.
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::ToggleFilter { key, value } => {
                if next.filters.get(key) == Some(value.as_str()) {
                    next.filters.remove(key);
                } else {
                    next.filters.insert(key, value);
                }
            }
            Action::ClearFilter(key) => {
                next.filters.remove(key);
            }
            Action::ClearFilters => next.filters.clear(),
            Action::GroupBy(key) => next.group_by = key,
            Action::ToggleSection(key) => {
                if !next.collapsed.remove(&key) {
                    next.collapsed.insert(key);
                }
            }
        }
        next
    }

    /// Group-by key in effect, with the default applied.
    pub fn group_by(&self) -> &str {
        if self.group_by.is_empty() {
            DEFAULT_GROUP_BY
        } else {
            &self.group_by
        }
    }

    pub fn is_filtered(&self, key: AttributeKey, value: &str) -> bool {
        self.filters.get(key) == Some(value)
    }

    pub fn is_collapsed(&self, key: AttributeKey) -> bool {
        self.collapsed.contains(&key)
    }

    /// Encode filters and group-by as a query string (without `?`).
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(key, value)| ("filter", format!("{key}:{value}")))
            .collect();
        pairs.push(("groupBy", self.group_by().to_string()));

        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// `path` with this state's query string appended.
    pub fn href(&self, path: &str) -> String {
        format!("{path}?{}", self.to_query_string())
    }
}
