//! Site-type classification from markup and URL signatures.

use crate::markup;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// The category a page is classified into. CMS platforms are checked
/// before front-end frameworks, which are checked before keyword
/// heuristics; the first matching signature wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    WordPress,
    Shopify,
    Wix,
    Squarespace,
    Webflow,
    Joomla,
    Drupal,
    Tailwind,
    Bootstrap,
    React,
    Vue,
    Angular,
    Material,
    Ecommerce,
    Blog,
    Government,
    Education,
    Organization,
    General,
}

impl SiteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteType::WordPress => "wordpress",
            SiteType::Shopify => "shopify",
            SiteType::Wix => "wix",
            SiteType::Squarespace => "squarespace",
            SiteType::Webflow => "webflow",
            SiteType::Joomla => "joomla",
            SiteType::Drupal => "drupal",
            SiteType::Tailwind => "tailwind",
            SiteType::Bootstrap => "bootstrap",
            SiteType::React => "react",
            SiteType::Vue => "vue",
            SiteType::Angular => "angular",
            SiteType::Material => "material",
            SiteType::Ecommerce => "ecommerce",
            SiteType::Blog => "blog",
            SiteType::Government => "government",
            SiteType::Education => "education",
            SiteType::Organization => "organization",
            SiteType::General => "general",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup signatures, most specific first.
const SIGNATURES: &[(SiteType, &str)] = &[
    (SiteType::WordPress, r"(?i)wp-content|wordpress|wp-includes"),
    (SiteType::Shopify, r"(?i)cdn\.shopify\.com|myshopify\.com"),
    (SiteType::Wix, r"(?i)wix\.com|wixstatic\.com|wixsite\.com"),
    (
        SiteType::Squarespace,
        r"(?i)squarespace\.com|static1\.squarespace\.com",
    ),
    (SiteType::Webflow, r"(?i)webflow\.io|webflow\.com"),
    (SiteType::Joomla, r"(?i)joomla|com_content"),
    (SiteType::Drupal, r"(?i)drupal\.js|sites/default/files"),
    (
        SiteType::Tailwind,
        r#"(?i)tailwindcss|tailwind\.css|class="[^"]*(?:flex|grid|p-|m-|text-|bg-)"#,
    ),
    (
        SiteType::Bootstrap,
        r#"(?i)bootstrap\.min\.css|bootstrap\.bundle\.min\.js|class="[^"]*(?:container|row|col-)"#,
    ),
    (SiteType::React, r"(?i)react-root|data-reactid"),
    (SiteType::Vue, r"(?i)data-v-"),
    (SiteType::Angular, r"(?i)ng-version"),
    (SiteType::Material, r"(?i)material-design|mdl-|mui-"),
];

const ECOMMERCE_PATTERN: &str = r"(?i)cart|checkout|product|shop|store|price|add to cart|woocommerce";
const BLOG_PATTERN: &str = r"(?i)blog|article|post|author|comment|category|archive";

fn compiled_signatures() -> &'static Vec<(SiteType, Regex)> {
    static COMPILED: OnceLock<Vec<(SiteType, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        SIGNATURES
            .iter()
            .map(|(site, pattern)| {
                (
                    *site,
                    Regex::new(pattern).expect("hard-coded pattern must compile"),
                )
            })
            .collect()
    })
}

/// Classifies a page. Falls through CMS and framework signatures, then
/// commerce/blog keyword heuristics, then TLD hints, to `General`.
pub fn classify(markup_text: &str, url: &str) -> SiteType {
    for (site, signature) in compiled_signatures() {
        if signature.is_match(markup_text) {
            return *site;
        }
    }

    static ECOMMERCE: OnceLock<Regex> = OnceLock::new();
    if markup::cached(&ECOMMERCE, ECOMMERCE_PATTERN).is_match(markup_text) {
        return SiteType::Ecommerce;
    }
    static BLOG: OnceLock<Regex> = OnceLock::new();
    if markup::cached(&BLOG, BLOG_PATTERN).is_match(markup_text) {
        return SiteType::Blog;
    }

    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            if host.contains(".gov") {
                return SiteType::Government;
            }
            if host.contains(".edu") {
                return SiteType::Education;
            }
            if host.contains(".org") {
                return SiteType::Organization;
            }
        }
    }

    SiteType::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cms_signatures_win_over_frameworks() {
        let markup = r#"<link href="/wp-content/themes/twentytwenty/style.css">
                        <div class="container row"></div>"#;
        assert_eq!(classify(markup, "https://example.com/"), SiteType::WordPress);
    }

    #[test]
    fn framework_signatures_apply_when_no_cms() {
        let markup = r#"<div class="flex p-4 text-lg"></div>"#;
        assert_eq!(classify(markup, "https://example.com/"), SiteType::Tailwind);
    }

    #[test]
    fn ecommerce_keywords() {
        let markup = "<main><button>Add to cart</button></main>";
        assert_eq!(classify(markup, "https://example.com/"), SiteType::Ecommerce);
    }

    #[test]
    fn tld_fallbacks() {
        assert_eq!(
            classify("<p>hello</p>", "https://www.census.gov/"),
            SiteType::Government
        );
        assert_eq!(
            classify("<p>hello</p>", "https://som.example.edu/dept"),
            SiteType::Education
        );
        assert_eq!(
            classify("<p>hello</p>", "https://example.org/"),
            SiteType::Organization
        );
    }

    #[test]
    fn defaults_to_general() {
        assert_eq!(
            classify("<p>hello</p>", "https://example.com/"),
            SiteType::General
        );
        assert_eq!(classify("<p>hello</p>", "not a url"), SiteType::General);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SiteType::WordPress).unwrap(),
            "\"wordpress\""
        );
    }
}
