//! Advisory structural validation of the serialized schema.
//!
//! The shape checks run against the JSON form, not the Rust types, so
//! they also catch fields a plugin may have bent out of shape. Failure
//! is reported, never fatal: the pipeline logs each issue and carries on.

use crate::markup;
use crate::schema::color::ColorRole;
use crate::schema::DesignSchema;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

const REQUIRED_SECTIONS: &[&str] = &[
    "metadata",
    "colors",
    "typography",
    "layout",
    "components",
    "images",
    "design_summary",
];

const METADATA_FIELDS: &[&str] = &["source_url", "extraction_date", "schema_version"];
const BODY_FIELDS: &[&str] = &["font_family", "font_size", "font_weight", "line_height"];
const HEADING_FIELDS: &[&str] = &["font_family", "font_size", "font_weight"];

/// One structural deviation from the declared schema shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    markup::cached(&RE, r"^#[0-9a-fA-F]{6}$")
}

/// Validates a schema, returning every issue found (empty means clean).
pub fn validate(schema: &DesignSchema) -> Result<Vec<ValidationIssue>, serde_json::Error> {
    Ok(validate_value(&serde_json::to_value(schema)?))
}

/// The rule table, applied to an arbitrary JSON rendering of the schema.
pub fn validate_value(root: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(root_map) = root.as_object() else {
        return vec![ValidationIssue::new("$", "schema must be an object")];
    };
    for section in REQUIRED_SECTIONS {
        if !root_map.contains_key(*section) {
            issues.push(ValidationIssue::new(*section, "required section missing"));
        }
    }

    if let Some(metadata) = root.get("metadata") {
        check_string_fields(metadata, "metadata", METADATA_FIELDS, &mut issues);
    }

    if let Some(colors) = root.get("colors") {
        for role in ColorRole::ALL {
            let path = format!("colors.{}", role.field_name());
            match colors.get(role.field_name()) {
                Some(value) => check_hex_color(value, &path, &mut issues),
                None => issues.push(ValidationIssue::new(path, "required color missing")),
            }
        }
        match colors.get("palette").and_then(Value::as_array) {
            Some(palette) => {
                for (i, entry) in palette.iter().enumerate() {
                    check_hex_color(entry, &format!("colors.palette[{}]", i), &mut issues);
                }
            }
            None => issues.push(ValidationIssue::new("colors.palette", "must be an array")),
        }
    }

    if let Some(typography) = root.get("typography") {
        if let Some(body) = typography.get("body") {
            check_string_fields(body, "typography.body", BODY_FIELDS, &mut issues);
        } else {
            issues.push(ValidationIssue::new("typography.body", "required section missing"));
        }
        match typography.get("headings").and_then(Value::as_object) {
            Some(headings) => {
                for (level, descriptor) in headings {
                    check_string_fields(
                        descriptor,
                        &format!("typography.headings.{}", level),
                        HEADING_FIELDS,
                        &mut issues,
                    );
                }
            }
            None => issues.push(ValidationIssue::new("typography.headings", "must be an object")),
        }
        check_string_array(typography, "typography", "font_imports", &mut issues);
        check_bool(typography, "typography", "custom_fonts_detected", &mut issues);
    }

    if let Some(layout) = root.get("layout") {
        match layout.get("page_dimensions") {
            Some(dimensions) => {
                for field in ["width", "height"] {
                    let path = format!("layout.page_dimensions.{}", field);
                    match dimensions.get(field) {
                        Some(v) if v.is_number() || v.is_null() => {}
                        Some(_) => issues.push(ValidationIssue::new(path, "must be a number or null")),
                        None => issues.push(ValidationIssue::new(path, "required field missing")),
                    }
                }
            }
            None => issues.push(ValidationIssue::new(
                "layout.page_dimensions",
                "required section missing",
            )),
        }
        if let Some(width) = layout.get("container_width") {
            if !width.is_number() && !width.is_null() {
                issues.push(ValidationIssue::new(
                    "layout.container_width",
                    "must be a number or null",
                ));
            }
        }
        check_bool(layout, "layout", "has_grid_system", &mut issues);
        match layout.get("common_spacing_units").and_then(Value::as_array) {
            Some(units) => {
                for (i, unit) in units.iter().enumerate() {
                    let path = format!("layout.common_spacing_units[{}]", i);
                    match unit.as_str() {
                        Some(s) if s.ends_with("px") => {}
                        Some(_) => issues.push(ValidationIssue::new(path, "must be pixel-suffixed")),
                        None => issues.push(ValidationIssue::new(path, "must be a string")),
                    }
                }
            }
            None => issues.push(ValidationIssue::new(
                "layout.common_spacing_units",
                "must be an array",
            )),
        }
    }

    if let Some(images) = root.get("images") {
        check_bool(images, "images", "has_svg_icons", &mut issues);
        check_bool(images, "images", "has_icon_font", &mut issues);
        check_bool(images, "images", "logo_detected", &mut issues);
        check_string_array(images, "images", "icon_classes_found", &mut issues);
        if images.get("image_style").map(|v| !v.is_object()).unwrap_or(true) {
            issues.push(ValidationIssue::new("images.image_style", "must be an object"));
        }
        if let Some(url) = images.get("logo_url") {
            if !url.is_string() && !url.is_null() {
                issues.push(ValidationIssue::new(
                    "images.logo_url",
                    "must be a string or null",
                ));
            }
        }
    }

    if let Some(summary) = root.get("design_summary") {
        check_string_array(summary, "design_summary", "style_keywords", &mut issues);
    }

    issues
}

fn check_hex_color(value: &Value, path: &str, issues: &mut Vec<ValidationIssue>) {
    match value.as_str() {
        Some(s) if hex_color_re().is_match(s) => {}
        Some(s) => issues.push(ValidationIssue::new(
            path,
            format!("'{}' is not a 6-digit hex color", s),
        )),
        None => issues.push(ValidationIssue::new(path, "must be a hex color string")),
    }
}

fn check_string_fields(
    section: &Value,
    path: &str,
    fields: &[&str],
    issues: &mut Vec<ValidationIssue>,
) {
    for field in fields {
        let field_path = format!("{}.{}", path, field);
        match section.get(*field) {
            Some(v) if v.is_string() => {}
            Some(_) => issues.push(ValidationIssue::new(field_path, "must be a string")),
            None => issues.push(ValidationIssue::new(field_path, "required field missing")),
        }
    }
}

fn check_string_array(
    section: &Value,
    path: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let field_path = format!("{}.{}", path, field);
    match section.get(field).and_then(Value::as_array) {
        Some(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                if !entry.is_string() {
                    issues.push(ValidationIssue::new(
                        format!("{}[{}]", field_path, i),
                        "must be a string",
                    ));
                }
            }
        }
        None => issues.push(ValidationIssue::new(field_path, "must be an array")),
    }
}

fn check_bool(section: &Value, path: &str, field: &str, issues: &mut Vec<ValidationIssue>) {
    let field_path = format!("{}.{}", path, field);
    match section.get(field) {
        Some(v) if v.is_boolean() => {}
        Some(_) => issues.push(ValidationIssue::new(field_path, "must be a boolean")),
        None => issues.push(ValidationIssue::new(field_path, "required field missing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tampered_color_is_reported() {
        let mut value = json!({
            "metadata": {"source_url": "u", "extraction_date": "d", "schema_version": "1.0"},
            "colors": {
                "primary_color": "#12345", // too short
                "secondary_color": "#abcdef",
                "accent_color": "#abcdef",
                "background_color": "#ffffff",
                "text_color": "#000000",
                "palette": ["#abcdef"]
            },
            "typography": {"headings": {}, "body": {"font_family": "f", "font_size": "16px", "font_weight": "400", "line_height": "normal"}, "font_imports": [], "custom_fonts_detected": false},
            "layout": {"page_dimensions": {"width": 1.0, "height": 2.0}, "container_width": null, "has_grid_system": false, "common_spacing_units": ["8px"]},
            "components": {},
            "images": {"has_svg_icons": false, "has_icon_font": false, "icon_classes_found": [], "image_style": {}, "logo_detected": false, "logo_url": null},
            "design_summary": {"style_keywords": []}
        });
        let issues = validate_value(&value);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "colors.primary_color");

        value["colors"]["primary_color"] = json!("#123456");
        assert!(validate_value(&value).is_empty());
    }

    #[test]
    fn missing_sections_are_reported() {
        let issues = validate_value(&json!({}));
        assert_eq!(issues.len(), REQUIRED_SECTIONS.len());
    }

    #[test]
    fn spacing_units_must_be_pixel_suffixed() {
        let value = json!({
            "layout": {"page_dimensions": {"width": null, "height": null}, "has_grid_system": true, "common_spacing_units": ["8px", "2rem"]}
        });
        let issues = validate_value(&value);
        assert!(issues
            .iter()
            .any(|i| i.path == "layout.common_spacing_units[1]"));
    }
}
