//! Display formatting for item attributes.

use crate::store::AttributeKey;

/// Title-case `s`: the first letter of each word is upper-cased and the rest
/// lower-cased. Words are separated by whitespace, `-` or `_`. A few
/// acronyms (`id`, `url`) are upper-cased whole.
pub fn format_title(s: &str) -> String {
    match s.to_lowercase().as_str() {
        "id" => return "ID".to_string(),
        "url" => return "URL".to_string(),
        _ => {}
    }

    let mut prev = ' ';
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if prev.is_whitespace() || prev == '-' || prev == '_' {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev = c;
    }
    out
}

/// `"1 item"`, `"3 items"`. `plural` defaults to `singular` + `s`.
pub fn format_plural(count: usize, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return format!("{count} {singular}");
    }
    match plural {
        Some(plural) => format!("{count} {plural}"),
        None => format!("{count} {singular}s"),
    }
}

/// Display label for a color; blank colors read as `Unknown`.
pub fn format_color(color: &str) -> String {
    let color = color.trim().to_lowercase();
    if color.is_empty() {
        return "Unknown".to_string();
    }
    format_title(&color)
}

/// Display label for a shape.
pub fn format_shape(shape: &str) -> String {
    let shape = shape.trim().to_lowercase();
    match shape.as_str() {
        "square" => "Square".to_string(),
        "circle" => "Circle".to_string(),
        "triangle" => "Triangle".to_string(),
        _ => format_title(&shape),
    }
}

/// Display label for a value of `key`.
pub fn format_value(key: AttributeKey, value: &str) -> String {
    match key {
        AttributeKey::Color => format_color(value),
        AttributeKey::Shape => format_shape(value),
        AttributeKey::Category => format_title(value),
    }
}
