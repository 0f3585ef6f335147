//! Solo Dev Template Core Library
//!
//! UI-free state for the single-page subscription template.
//!
//! ## Overview
//!
//! The page is driven by three pieces of local state: the email text, a
//! "submit attempted" flag and the visibility of a success notification.
//! Everything here is plain owned data so the view layer can wrap it in a
//! signal and redraw after every mutation.
//!
//! ## Quick Start
//!
//! ```
//! use solodev_core::{DismissReason, SubscribePage};
//!
//! let mut page = SubscribePage::new();
//!
//! // Empty submit is a validation outcome, not a failure
//! assert!(page.submit().is_none());
//! assert_eq!(page.form().helper_text().as_deref(), Some("Email is required"));
//!
//! page.edit("a@b.com");
//! let ticket = page.submit().expect("accepted");
//! assert!(page.notification().is_visible());
//! assert_eq!(page.form().email(), "");
//!
//! page.dismiss(DismissReason::CloseButton);
//! // The pending auto-hide is now stale
//! assert!(!page.expire(ticket));
//! ```

pub mod error;
pub mod form;
pub mod logging;
pub mod notification;
pub mod page;
pub mod theme;

// Re-exports
pub use error::{TemplateError, ValidationError};
pub use form::{FormState, SubmitOutcome, SubscriptionForm};
pub use notification::{
    DismissReason, DismissTicket, Notification, AUTO_HIDE_DURATION,
    RESUME_HIDE_DURATION,
};
pub use page::SubscribePage;
pub use theme::{Palette, Theme, Typography};

/// Result type alias using TemplateError
pub type Result<T> = std::result::Result<T, TemplateError>;
