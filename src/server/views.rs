//! Template view models.
//!
//! Everything the templates print is computed here, so the templates stay
//! free of logic: labels are formatted, counts pluralized, and every link
//! is derived from the current [`BrowserState`] via an [`Action`].

use strum::IntoEnumIterator;

use crate::format::{format_plural, format_title, format_value};
use crate::query::GroupedResult;
use crate::store::{AttributeKey, Item, ItemStore};
use crate::view_state::{Action, BrowserState};

/// Path of the partial results endpoint targeted by `hx-get`.
pub const ITEMS_PATH: &str = "/items";

/// Path of the full page, pushed into browser history.
pub const INDEX_PATH: &str = "/";

/// Stagger between item card animations.
const ITEM_ANIMATION_STEP_MS: usize = 50;

/// A sidebar link that triggers a partial update.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub label: String,
    /// Partial endpoint URL (`hx-get`).
    pub href: String,
    /// Full page URL (`hx-push-url`).
    pub push_url: String,
    pub active: bool,
}

impl LinkView {
    fn new(label: String, next: &BrowserState, active: bool) -> Self {
        Self {
            label,
            href: next.href(ITEMS_PATH),
            push_url: next.href(INDEX_PATH),
            active,
        }
    }
}

/// One collapsible filter section.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub key: String,
    pub title: String,
    pub collapsed: bool,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone)]
pub struct SidebarView {
    pub group_by_links: Vec<LinkView>,
    pub sections: Vec<SectionView>,
    pub clear: Option<LinkView>,
}

impl SidebarView {
    pub fn build(store: &ItemStore, state: &BrowserState) -> Self {
        let group_by_links = AttributeKey::iter()
            .map(|key| {
                let next = state.apply(Action::GroupBy(key.to_string()));
                LinkView::new(
                    format_title(key.name()),
                    &next,
                    state.group_by() == key.name(),
                )
            })
            .collect();

        let sections = AttributeKey::iter()
            .map(|key| SectionView {
                key: key.to_string(),
                title: format_title(key.name()),
                collapsed: state.is_collapsed(key),
                links: store
                    .distinct_values(key)
                    .into_iter()
                    .map(|value| {
                        let active = state.is_filtered(key, &value);
                        let next = state.apply(Action::ToggleFilter {
                            key,
                            value: value.clone(),
                        });
                        LinkView::new(format_value(key, &value), &next, active)
                    })
                    .collect(),
            })
            .collect();

        let clear = (!state.filters.is_empty()).then(|| {
            LinkView::new(
                "Clear filters".to_string(),
                &state.apply(Action::ClearFilters),
                false,
            )
        });

        Self {
            group_by_links,
            sections,
            clear,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemView {
    pub id: u64,
    pub color: String,
    pub shape: String,
    pub category: String,
    pub color_class: String,
    pub shape_class: String,
    pub delay_ms: usize,
}

impl ItemView {
    fn new(item: &Item, position: usize) -> Self {
        Self {
            id: item.id(),
            color: format_value(AttributeKey::Color, item.color()),
            shape: format_value(AttributeKey::Shape, item.shape()),
            category: format_value(AttributeKey::Category, item.category()),
            color_class: css_token(item.color()),
            shape_class: css_token(item.shape()),
            delay_ms: position * ITEM_ANIMATION_STEP_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupView {
    pub label: String,
    pub count: String,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone)]
pub struct ResultsView {
    pub heading: String,
    pub summary: String,
    pub groups: Vec<GroupView>,
}

impl ResultsView {
    pub fn build(result: &GroupedResult) -> Self {
        let heading = match result.group_by {
            Some(key) => format!("Grouped by {}", format_title(key.name())),
            None => "Ungrouped".to_string(),
        };

        let groups = result
            .groups
            .iter()
            .map(|group| GroupView {
                label: match result.group_by {
                    Some(key) => format_value(key, &group.key),
                    None => group.key.clone(),
                },
                count: format_plural(group.len(), "item", None),
                items: group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(position, item)| ItemView::new(item, position))
                    .collect(),
            })
            .collect();

        Self {
            heading,
            summary: format_plural(result.total(), "item", None),
            groups,
        }
    }
}

/// Reduce a value to a CSS class token (`[a-z0-9-]`).
fn css_token(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::evaluate;
    use crate::store::{FilterSet, RawItem};

    fn store() -> ItemStore {
        ItemStore::new(vec![
            RawItem::new(1, "red", "circle", "A"),
            RawItem::new(2, "blue", "square", "A"),
            RawItem::new(3, "red", "square", "B"),
        ])
        .unwrap()
    }

    #[test]
    fn test_css_token() {
        assert_eq!(css_token("Light Blue"), "light-blue");
        assert_eq!(css_token("red\"><script>"), "red---script-");
    }

    #[test]
    fn test_sidebar_links_follow_state() {
        let mut state = BrowserState::default();
        state.filters.insert(AttributeKey::Color, "red");

        let sidebar = SidebarView::build(&store(), &state);

        let colors = &sidebar.sections[0];
        assert_eq!(colors.key, "color");
        assert_eq!(colors.title, "Color");
        let labels: Vec<&str> = colors.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Blue", "Red"]);

        let red = &colors.links[1];
        assert!(red.active);
        assert_eq!(red.href, "/items?groupBy=shape");
        assert_eq!(red.push_url, "/?groupBy=shape");

        let blue = &colors.links[0];
        assert!(!blue.active);
        assert_eq!(blue.href, "/items?filter=color%3Ablue&groupBy=shape");

        assert!(sidebar.clear.is_some());
    }

    #[test]
    fn test_sidebar_group_by_links() {
        let sidebar = SidebarView::build(&store(), &BrowserState::default());
        let active: Vec<&str> = sidebar
            .group_by_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["Shape"]);
        assert!(sidebar.clear.is_none());
    }

    #[test]
    fn test_results_view() {
        let result = evaluate(&store(), &FilterSet::new(), "color");
        let view = ResultsView::build(&result);

        assert_eq!(view.heading, "Grouped by Color");
        assert_eq!(view.summary, "3 items");
        let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Blue", "Red"]);
        assert_eq!(view.groups[0].count, "1 item");
        assert_eq!(view.groups[1].items[1].delay_ms, ITEM_ANIMATION_STEP_MS);
    }

    #[test]
    fn test_results_view_ungrouped() {
        let result = evaluate(&store(), &FilterSet::new(), "bogus");
        let view = ResultsView::build(&result);

        assert_eq!(view.heading, "Ungrouped");
        assert_eq!(view.groups[0].label, "All Items");
    }
}
