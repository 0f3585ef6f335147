//! Page components for the Solo Dev Template.

mod subscribe;

pub use subscribe::SubscribePage;
