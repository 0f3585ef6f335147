//! Stylesheet for the template.
//!
//! The palette and type scale are not hard-coded here: they come from the
//! active [`Theme`] as CSS custom properties, followed by the static rules
//! in [`GLOBAL_STYLES`] that reference them.

mod styles;

pub use styles::GLOBAL_STYLES;

use solodev_core::Theme;

/// Full stylesheet for `theme`: custom properties, then reset and components.
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = theme.css_variables();
    css.push_str(GLOBAL_STYLES);
    css
}
