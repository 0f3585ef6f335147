//! Subscribe page - the whole user-facing surface.
//!
//! Hero text, a card with the email form, two static link buttons and the
//! success snackbar. All state lives in one [`SubscribePage`] model held in
//! a signal; every handler mutates it through `write()`, which is what
//! triggers the redraw.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use solodev_core::notification;
use solodev_core::{DismissReason, DismissTicket, SubscribePage as PageModel};
use solodev_ui::{Button, ButtonColor, ButtonSize, ButtonVariant, Card, Snackbar, TextField};

use crate::context::use_theme;

/// Handle to the pending auto-hide task.
///
/// Kept outside of signals so it is still reachable from `use_drop`.
/// Cancelling is the first line of defence; a task that slips through still
/// carries a stale ticket, which `expire` ignores once the notification has
/// been dismissed, re-shown or paused.
#[derive(Clone, Default)]
struct AutoHide(Rc<Cell<Option<Task>>>);

impl AutoHide {
    /// Replace any pending auto-hide with one for `ticket`.
    fn arm(&self, mut page: Signal<PageModel>, ticket: DismissTicket) {
        self.cancel();

        let slot = self.0.clone();
        let task = spawn(async move {
            let ticket = notification::wait(ticket).await;
            slot.set(None);
            if page.write().expire(ticket) {
                tracing::debug!("notification auto-hidden");
            }
        });
        self.0.set(Some(task));
    }

    fn cancel(&self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }
}

fn dismiss(mut page: Signal<PageModel>, auto_hide: &AutoHide, reason: DismissReason) {
    auto_hide.cancel();
    page.write().dismiss(reason);
}

/// Subscribe page component.
#[component]
pub fn SubscribePage() -> Element {
    let theme = use_theme();
    let mut page = use_signal(PageModel::new);
    let auto_hide = use_hook(AutoHide::default);

    // Never fire against a torn-down view
    use_drop({
        let auto_hide = auto_hide.clone();
        move || auto_hide.cancel()
    });

    let on_submit = {
        let auto_hide = auto_hide.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let ticket = page.write().submit();
            if let Some(ticket) = ticket {
                auto_hide.arm(page, ticket);
            }
        }
    };

    let on_close = {
        let auto_hide = auto_hide.clone();
        move |reason: DismissReason| dismiss(page, &auto_hide, reason)
    };

    let on_pause = {
        let auto_hide = auto_hide.clone();
        move |_: ()| {
            auto_hide.cancel();
            page.write().pause();
        }
    };

    let on_resume = {
        let auto_hide = auto_hide.clone();
        move |_: ()| {
            let ticket = page.write().resume();
            if let Some(ticket) = ticket {
                auto_hide.arm(page, ticket);
            }
        }
    };

    let on_click_away = {
        let auto_hide = auto_hide.clone();
        move |_: MouseEvent| {
            if page.read().notification().is_visible() {
                dismiss(page, &auto_hide, DismissReason::ClickAway);
            }
        }
    };

    let on_keydown = {
        let auto_hide = auto_hide.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Escape && page.read().notification().is_visible() {
                dismiss(page, &auto_hide, DismissReason::EscapeKey);
            }
        }
    };

    // Derived on every render, never stored
    let state = page.read();
    let form = state.form();
    let email = form.email().to_string();
    let invalid = form.is_invalid();
    let helper_text = form.helper_text().unwrap_or_default();
    let notice = state.notification();
    let notice_open = notice.is_visible();
    let notice_message = notice.message().to_string();
    drop(state);

    let title_color = theme.palette.primary.clone();

    rsx! {
        main {
            class: "page",
            tabindex: "-1",
            onclick: on_click_away,
            onkeydown: on_keydown,

            div { class: "container",
                h1 { class: "hero-title", style: "color: {title_color};",
                    span { class: "hero-icon", "\u{1F680}" }
                    "My Solo Dev Template"
                }
                p { class: "hero-subtitle",
                    "Built for speed, simplicity, and working code"
                }

                Card { title: "Get Started Quickly".to_string(),
                    p { class: "card-body",
                        "This template includes a desktop shell, a theme you can override and ready-made form components."
                    }

                    form {
                        // Interacting with the form is not a click-away
                        onclick: move |e| e.stop_propagation(),
                        onsubmit: on_submit,
                        div { class: "form-stack",
                            TextField {
                                label: "Email Address".to_string(),
                                value: email,
                                oninput: move |value: String| page.write().edit(value),
                                error: invalid,
                                helper_text: helper_text,
                                full_width: true,
                            }
                            Button {
                                variant: ButtonVariant::Contained,
                                color: ButtonColor::Primary,
                                size: ButtonSize::Large,
                                button_type: "submit".to_string(),
                                "Subscribe for Updates"
                            }
                        }
                    }
                }

                div { class: "link-row",
                    Button { variant: ButtonVariant::Outlined, "Documentation" }
                    Button {
                        variant: ButtonVariant::Outlined,
                        color: ButtonColor::Secondary,
                        "Examples"
                    }
                }
            }

            Snackbar {
                open: notice_open,
                message: notice_message,
                on_close: on_close,
                on_pause: on_pause,
                on_resume: on_resume,
            }
        }
    }
}
