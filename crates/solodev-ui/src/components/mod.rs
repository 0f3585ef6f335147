//! Reusable UI components
//!
//! Every component renders plain elements with stable CSS classes; the
//! stylesheet lives with the application.

mod button;
mod card;
mod snackbar;
mod text_field;

pub use button::*;
pub use card::*;
pub use snackbar::*;
pub use text_field::*;
