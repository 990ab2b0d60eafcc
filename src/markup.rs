//! Regex scanning helpers over raw page markup.
//!
//! The pipeline never parses HTML into a tree; classification only needs
//! cheap, deterministic pattern probes over the raw text. All patterns
//! are compiled once and cached for the life of the process.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

pub(crate) fn cached(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("hard-coded pattern must compile"))
}

/// The inner text of every `<style>` block, in document order.
pub fn style_blocks(markup: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"(?is)<style[^>]*>(.*?)</style>");
    re.captures_iter(markup)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Every `<link href=...>` value, in document order.
pub fn link_hrefs(markup: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r#"(?i)<link\b[^>]*\bhref\s*=\s*["']([^"']+)["']"#);
    re.captures_iter(markup)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Every `class` attribute value, in document order.
pub fn class_lists(markup: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r#"(?i)\bclass\s*=\s*["']([^"']+)["']"#);
    re.captures_iter(markup)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Occurrence counts for every class token in the markup, keyed by first
/// appearance so identical markup always yields identical ordering.
pub fn class_frequencies(markup: &str) -> Vec<(String, u32)> {
    count_first_seen(
        class_lists(markup)
            .into_iter()
            .flat_map(|list| list.split_whitespace()),
    )
}

/// Counts occurrences preserving first-seen order of the distinct values.
pub fn count_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u32)> {
    let mut order: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value.to_string(), 1));
            }
        }
    }
    order
}

/// The value of a named attribute within one raw tag, matched
/// case-insensitively on the attribute name.
pub fn attr_value<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r#"([a-zA-Z-]+)\s*=\s*["']([^"']*)["']"#);
    re.captures_iter(tag).find_map(|c| {
        let attr = c.get(1)?.as_str();
        if attr.eq_ignore_ascii_case(name) {
            c.get(2).map(|m| m.as_str())
        } else {
            None
        }
    })
}
