//! Solo Dev Template UI Components
//!
//! Dioxus components with a light, material-flavoured look:
//! - **Contained / outlined buttons** in the theme's primary or secondary color
//! - **Text fields** with a floating label and inline helper text
//! - **Snackbar + alert** for transient success messages
//!
//! Colors come from CSS custom properties (`--primary`, `--error`, ...)
//! emitted once by the view root, so components never read the theme
//! directly.

pub mod components;

pub use components::*;
