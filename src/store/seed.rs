//! Built-in item catalog, used when the configuration supplies none.

use super::types::RawItem;

/// The default 12-item catalog.
pub fn default_items() -> Vec<RawItem> {
    [
        (1, "blue", "square", "A"),
        (2, "red", "circle", "B"),
        (3, "green", "triangle", "C"),
        (4, "blue", "circle", "B"),
        (5, "red", "square", "A"),
        (6, "green", "circle", "C"),
        (7, "blue", "triangle", "C"),
        (8, "red", "triangle", "A"),
        (9, "green", "square", "B"),
        (10, "blue", "square", "C"),
        (11, "red", "circle", "B"),
        (12, "green", "triangle", "A"),
    ]
    .into_iter()
    .map(|(id, color, shape, category)| RawItem::new(id, color, shape, category))
    .collect()
}
