//! WordPress-specific schema enhancement.

use super::{EnhanceError, SchemaEnhancer};
use crate::markup;
use crate::schema::component::SidebarStyle;
use crate::schema::{CmsInfo, DesignSchema};
use crate::site::SiteType;
use regex::Regex;
use std::sync::OnceLock;

/// Records the CMS in the metadata (with the active theme name when the
/// markup reveals it) and probes for the classic widget sidebar.
pub struct WordPressEnhancer;

fn theme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    markup::cached(&RE, r"(?i)wp-content/themes/([^/]+)")
}

fn sidebar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    markup::cached(
        &RE,
        r#"(?i)\b(?:class|id)\s*=\s*["'][^"']*(?:widget-area|sidebar|secondary)[^"']*["']"#,
    )
}

impl SchemaEnhancer for WordPressEnhancer {
    fn name(&self) -> &'static str {
        "wordpress_enhancer"
    }

    fn categories(&self) -> &'static [SiteType] {
        &[SiteType::WordPress]
    }

    fn enhance(&self, schema: &mut DesignSchema, markup_text: &str) -> Result<(), EnhanceError> {
        let theme = theme_re()
            .captures(markup_text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        schema.metadata.cms = Some(CmsInfo {
            kind: "wordpress".to_string(),
            theme,
        });

        // Sidebar width is a rendered metric the markup alone cannot
        // provide; presence is still worth recording.
        if sidebar_re().is_match(markup_text) {
            schema.components.sidebar = Some(SidebarStyle {
                present: true,
                width: None,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin;

    fn schema_for(markup: &str) -> DesignSchema {
        use crate::{analyze, assembler, signals::RawStyleSignals};
        use chrono::TimeZone;

        let mut signals = RawStyleSignals::for_url("https://blog.example.com/");
        signals.markup = markup.to_string();
        let mut schema = assembler::assemble(
            &signals.source_url,
            chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            analyze::color::resolve(&signals),
            analyze::typography::resolve(&signals),
            analyze::layout::resolve(&signals),
            analyze::component::resolve(&signals),
            analyze::image::resolve(&signals),
        );
        plugin::enhance(&mut schema, SiteType::WordPress, markup);
        schema
    }

    #[test]
    fn records_cms_and_theme() {
        let schema = schema_for(
            r#"<link rel="stylesheet" href="/wp-content/themes/astra/style.css">"#,
        );
        let cms = schema.metadata.cms.expect("cms info");
        assert_eq!(cms.kind, "wordpress");
        assert_eq!(cms.theme.as_deref(), Some("astra"));
    }

    #[test]
    fn theme_is_optional() {
        let schema = schema_for("<body>wordpress</body>");
        let cms = schema.metadata.cms.expect("cms info");
        assert_eq!(cms.kind, "wordpress");
        assert!(cms.theme.is_none());
    }

    #[test]
    fn sidebar_presence_probe() {
        let schema = schema_for(r#"<aside class="widget-area"></aside>"#);
        let sidebar = schema.components.sidebar.expect("sidebar");
        assert!(sidebar.present);
        assert!(sidebar.width.is_none());

        let schema = schema_for("<main>no side content</main>");
        assert!(schema.components.sidebar.is_none());
    }
}
