//! Theme configuration.
//!
//! A theme is a fixed set of colors and typography shared by every
//! rendered element. It can be overridden from a JSON file; any field the
//! file leaves out keeps its default.
//!
//! ```json
//! { "palette": { "primary": "#ff5722" } }
//! ```

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TemplateError;
use crate::Result;

/// Web font loaded by default
pub const DEFAULT_FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub error: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub background: String,
    pub paper: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1976d2".to_string(),
            secondary: "#9c27b0".to_string(),
            success: "#2e7d32".to_string(),
            error: "#d32f2f".to_string(),
            text_primary: "rgba(0, 0, 0, 0.87)".to_string(),
            text_secondary: "rgba(0, 0, 0, 0.6)".to_string(),
            background: "#fafafa".to_string(),
            paper: "#ffffff".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// CSS font-family stack; the web font comes first, system fonts after
    pub font_family: String,
    /// Stylesheet inserted into the document head. Empty disables it.
    pub font_stylesheet_url: String,
    pub h1_size: String,
    pub h2_size: String,
    pub body_size: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "'Inter', 'Roboto', 'Helvetica', 'Arial', sans-serif".to_string(),
            font_stylesheet_url: DEFAULT_FONT_STYLESHEET.to_string(),
            h1_size: "3.75rem".to_string(),
            h2_size: "1.5rem".to_string(),
            body_size: "1rem".to_string(),
        }
    }
}

/// Shared visual parameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
}

impl Theme {
    /// Parse a (possibly partial) theme from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme override file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let theme = Self::from_json_str(&json)?;
        info!("Loaded theme from {:?}", path);
        Ok(theme)
    }

    /// Check every value written into the stylesheet is safe to emit.
    ///
    /// Palette entries must be colors, sizes a number plus `px`, `rem`,
    /// `em` or `%`, and the font stack must not contain CSS or markup
    /// delimiters.
    pub fn validate(&self) -> Result<()> {
        let p = &self.palette;
        let entries: [(&'static str, &str); 8] = [
            ("primary", &p.primary),
            ("secondary", &p.secondary),
            ("success", &p.success),
            ("error", &p.error),
            ("text_primary", &p.text_primary),
            ("text_secondary", &p.text_secondary),
            ("background", &p.background),
            ("paper", &p.paper),
        ];

        for (field, value) in entries {
            if !is_css_color(value) {
                return Err(TemplateError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }

        let t = &self.typography;
        let sizes: [(&'static str, &str); 3] = [
            ("h1_size", &t.h1_size),
            ("h2_size", &t.h2_size),
            ("body_size", &t.body_size),
        ];
        for (field, value) in sizes {
            if !is_css_size(value) {
                return Err(TemplateError::InvalidTypography {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if !is_font_family(&t.font_family) {
            return Err(TemplateError::InvalidTypography {
                field: "font_family",
                value: t.font_family.clone(),
            });
        }
        Ok(())
    }

    /// Whether a font stylesheet link should be inserted
    pub fn font_stylesheet(&self) -> Option<&str> {
        let url = self.typography.font_stylesheet_url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// Render the theme as CSS custom properties on `:root`.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let vars = [
            ("--primary", &p.primary),
            ("--secondary", &p.secondary),
            ("--success", &p.success),
            ("--error", &p.error),
            ("--text-primary", &p.text_primary),
            ("--text-secondary", &p.text_secondary),
            ("--background", &p.background),
            ("--paper", &p.paper),
            ("--font-family", &t.font_family),
            ("--text-h1", &t.h1_size),
            ("--text-h2", &t.h2_size),
            ("--text-body", &t.body_size),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            // Writing into a String cannot fail
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

/// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or `rgb()`/`rgba()`/`hsl()`/`hsla()`.
fn is_css_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    ["rgb(", "rgba(", "hsl(", "hsla("].iter().any(|prefix| {
        value
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(')'))
            .is_some_and(|args| {
                !args.is_empty()
                    && args
                        .chars()
                        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ' ' | '%' | '/'))
            })
    })
}

/// Unsigned number followed by `px`, `rem`, `em` or `%`.
fn is_css_size(value: &str) -> bool {
    let number = ["rem", "px", "em", "%"]
        .iter()
        .find_map(|unit| value.strip_suffix(unit));

    number.is_some_and(|n| {
        !n.is_empty()
            && n.chars().all(|c| c.is_ascii_digit() || c == '.')
            && n.chars().filter(|&c| c == '.').count() <= 1
            && n.chars().any(|c| c.is_ascii_digit())
    })
}

/// Non-empty font stack without declaration, block or tag delimiters.
fn is_font_family(value: &str) -> bool {
    !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        let theme = Theme::default();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.font_stylesheet(), Some(DEFAULT_FONT_STYLESHEET));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let theme = Theme::from_json_str(r##"{ "palette": { "primary": "#ff5722" } }"##).unwrap();
        assert_eq!(theme.palette.primary, "#ff5722");
        assert_eq!(theme.palette.secondary, Palette::default().secondary);
        assert_eq!(theme.typography, Typography::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Theme::from_json_str("{}").unwrap(), Theme::default());
    }

    #[test]
    fn rejects_bad_color() {
        let err = Theme::from_json_str(r#"{ "palette": { "error": "red; } body { x" } }"#)
            .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidColor { field: "error", .. }));
    }

    #[test]
    fn rejects_size_that_closes_root_block() {
        let err = Theme::from_json_str(
            r#"{ "typography": { "h1_size": "3rem; } body { display: none" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidTypography { field: "h1_size", .. }));
    }

    #[test]
    fn rejects_font_family_with_delimiters() {
        for family in ["Inter; } body { color: red", "Inter</style>", "Inter\n}"] {
            let theme = Theme {
                typography: Typography {
                    font_family: family.to_string(),
                    ..Typography::default()
                },
                ..Theme::default()
            };
            assert!(matches!(
                theme.validate(),
                Err(TemplateError::InvalidTypography { field: "font_family", .. })
            ));
        }
    }

    #[test]
    fn size_forms() {
        assert!(is_css_size("3.75rem"));
        assert!(is_css_size("16px"));
        assert!(is_css_size("1.5em"));
        assert!(is_css_size("100%"));
        assert!(!is_css_size("rem"));
        assert!(!is_css_size("1.2.3rem"));
        assert!(!is_css_size("-1rem"));
        assert!(!is_css_size("3vw"));
        assert!(!is_css_size("3rem; }"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Theme::from_json_str("{ palette").unwrap_err();
        assert!(matches!(err, TemplateError::ThemeParse(_)));
    }

    #[test]
    fn color_forms() {
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#1976d2"));
        assert!(is_css_color("#1976d2cc"));
        assert!(is_css_color("rgba(0, 0, 0, 0.87)"));
        assert!(is_css_color("hsl(210, 79%, 46%)"));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("#ggg"));
        assert!(!is_css_color("rgb()"));
        assert!(!is_css_color("blue"));
    }

    #[test]
    fn empty_font_url_disables_link() {
        let theme = Theme::from_json_str(r#"{ "typography": { "font_stylesheet_url": " " } }"#)
            .unwrap();
        assert_eq!(theme.font_stylesheet(), None);
    }

    #[test]
    fn css_variables_contain_palette() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #1976d2;"));
        assert!(css.contains("--font-family: 'Inter'"));
        assert!(css.trim_end().ends_with('}'));
    }
}
