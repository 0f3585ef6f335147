//! Snackbar and Alert Components
//!
//! A snackbar is a single transient message pinned to the bottom of the
//! window. It does not own its timer: the parent decides when it is open
//! and is told about every way the user can close it.
//!
//! Hovering the snackbar reports `on_pause`, leaving reports `on_resume`,
//! so the parent can hold the auto-hide while the message is being read.

use dioxus::prelude::*;
use solodev_core::DismissReason;

use crate::components::CloseButton;

/// Properties for the Alert component
#[derive(Clone, PartialEq, Props)]
pub struct AlertProps {
    pub children: Element,
    /// Renders a close button when set
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
}

/// Filled success message box with a check icon
#[component]
pub fn Alert(props: AlertProps) -> Element {
    rsx! {
        div { class: "alert alert-success", role: "alert",
            span { class: "alert-icon", "\u{2714}" }
            div { class: "alert-message", {props.children} }
            if let Some(on_close) = props.on_close {
                div { class: "alert-action",
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
            }
        }
    }
}

/// Properties for the Snackbar component
#[derive(Clone, PartialEq, Props)]
pub struct SnackbarProps {
    /// Whether the snackbar is shown
    pub open: bool,
    /// Message text
    pub message: String,
    /// Called with the reason whenever the user closes the snackbar
    pub on_close: EventHandler<DismissReason>,
    /// Pointer entered the snackbar
    #[props(default)]
    pub on_pause: Option<EventHandler<()>>,
    /// Pointer left the snackbar
    #[props(default)]
    pub on_resume: Option<EventHandler<()>>,
}

/// Bottom-anchored transient message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Snackbar {
///         open: visible(),
///         message: "Thanks for subscribing!".to_string(),
///         on_close: move |reason| dismiss(reason),
///     }
/// }
/// ```
#[component]
pub fn Snackbar(props: SnackbarProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_pause = props.on_pause;
    let on_resume = props.on_resume;

    rsx! {
        div {
            class: "snackbar",
            // Clicks inside are not click-away
            onclick: move |e| e.stop_propagation(),
            onmouseenter: move |_| {
                if let Some(handler) = &on_pause {
                    handler.call(());
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = &on_resume {
                    handler.call(());
                }
            },
            Alert {
                on_close: move |_| on_close.call(DismissReason::CloseButton),
                "{props.message}"
            }
        }
    }
}
