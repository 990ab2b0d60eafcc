//! Theme-code snippet generation.
//!
//! Three renderings of the same canonical values: a CSS custom-property
//! block, a Tailwind configuration module, and a styled-components
//! theme module. The numeric spacing and radius bases are extracted from
//! the schema with fixed defaults so every template always renders.

use crate::parsers;
use crate::schema::typography::first_family;
use crate::schema::DesignSchema;

const DEFAULT_SPACING_BASE: u32 = 8;
const DEFAULT_RADIUS_BASE: u32 = 4;

/// The generated snippets, keyed by stable names for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSnippets {
    pub css_variables: String,
    pub tailwind_config: String,
    pub styled_components_theme: String,
}

impl CodeSnippets {
    /// Snippet name, target file name, and content for each snippet.
    /// The variable block persists as CSS, the two config modules as JS.
    pub fn entries(&self) -> [(&'static str, &'static str, &str); 3] {
        [
            ("css_variables", "css_variables.css", &self.css_variables),
            ("tailwind_config", "tailwind_config.js", &self.tailwind_config),
            (
                "styled_components_theme",
                "styled_components_theme.js",
                &self.styled_components_theme,
            ),
        ]
    }
}

/// Derives the snippet set from a finalized schema.
pub fn derive(schema: &DesignSchema) -> CodeSnippets {
    let colors = &schema.colors;
    let primary = colors.primary_color.hex();
    let secondary = colors.secondary_color.hex();
    let accent = colors.accent_color.hex();
    let background = colors.background_color.hex();
    let text_color = colors.text_color.hex();

    let body_font_raw = schema.typography.body.font_family.as_str();
    let body_font = first_family(body_font_raw);
    let heading_font_raw = schema.typography.heading_family();
    let heading_font = first_family(heading_font_raw);
    let body_size = schema.typography.body.font_size.as_str();

    let spacing_base = schema
        .layout
        .common_spacing_units
        .first()
        .and_then(|unit| parsers::leading_integer(unit))
        .unwrap_or(DEFAULT_SPACING_BASE);
    let spacing_unit = format!("{}px", spacing_base);

    let radius_base = schema
        .components
        .buttons
        .border_radius
        .as_deref()
        .or(schema.components.cards.border_radius.as_deref())
        .and_then(parsers::leading_integer)
        .unwrap_or(DEFAULT_RADIUS_BASE);
    let border_radius = format!("{}px", radius_base);

    let css_variables = format!(
        r#":root {{
  /* Colors */
  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-accent: {accent};
  --color-background: {background};
  --color-text: {text_color};

  /* Typography */
  --font-body: {body_font_raw};
  --font-heading: {heading_font_raw};
  --font-size-base: {body_size};

  /* Spacing */
  --spacing-unit: {spacing_unit};
  --spacing-xs: calc(var(--spacing-unit) * 0.25);
  --spacing-sm: calc(var(--spacing-unit) * 0.5);
  --spacing-md: var(--spacing-unit);
  --spacing-lg: calc(var(--spacing-unit) * 1.5);
  --spacing-xl: calc(var(--spacing-unit) * 2);
  --spacing-xxl: calc(var(--spacing-unit) * 3);

  /* Borders */
  --border-radius: {border_radius};
}}"#
    );

    let tailwind_config = format!(
        r#"// tailwind.config.js
module.exports = {{
  theme: {{
    extend: {{
      colors: {{
        primary: '{primary}',
        secondary: '{secondary}',
        accent: '{accent}',
        'surface-bg': '{background}',
        'text-main': '{text_color}',
      }},
      fontFamily: {{
        sans: ['{body_font}', 'ui-sans-serif', 'system-ui'],
        heading: ['{heading_font}', 'ui-serif', 'Georgia'],
      }},
      fontSize: {{
        'base': '{body_size}',
      }},
      spacing: {{
        'unit': '{spacing_unit}',
        'xs': 'calc({spacing_unit} * 0.25)',
        'sm': 'calc({spacing_unit} * 0.5)',
        'md': '{spacing_unit}',
        'lg': 'calc({spacing_unit} * 1.5)',
        'xl': 'calc({spacing_unit} * 2)',
        '2xl': 'calc({spacing_unit} * 3)',
      }},
      borderRadius: {{
        DEFAULT: '{border_radius}',
      }},
    }},
  }},
  plugins: [],
}}"#
    );

    let styled_components_theme = format!(
        r#"// theme.js (for styled-components)
const theme = {{
  colors: {{
    primary: '{primary}',
    secondary: '{secondary}',
    accent: '{accent}',
    background: '{background}',
    text: '{text_color}',
  }},
  fonts: {{
    body: '{body_font_raw}',
    heading: '{heading_font_raw}',
  }},
  fontSizes: {{
    base: '{body_size}',
  }},
  spacing: {{
    unit: '{spacing_unit}',
    xs: `calc({spacing_unit} * 0.25)`,
    sm: `calc({spacing_unit} * 0.5)`,
    md: '{spacing_unit}',
    lg: `calc({spacing_unit} * 1.5)`,
    xl: `calc({spacing_unit} * 2)`,
    xxl: `calc({spacing_unit} * 3)`,
  }},
  borderRadius: '{border_radius}',
}};

export default theme;"#
    );

    CodeSnippets {
        css_variables,
        tailwind_config,
        styled_components_theme,
    }
}
