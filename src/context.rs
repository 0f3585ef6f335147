//! Theme context for the Solo Dev Template.
//!
//! The theme is resolved once in `main` (defaults, optionally overridden
//! from a JSON file) and provided to the component tree by `App`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let theme = use_theme();
//! let primary = &theme.palette.primary;
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use solodev_core::Theme;

/// Theme chosen at startup
static THEME: OnceLock<Theme> = OnceLock::new();

/// Store the startup theme. Later calls are ignored.
pub fn set_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the startup theme (or the default if none was set)
pub fn get_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}

/// Hook to access the theme from context.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
