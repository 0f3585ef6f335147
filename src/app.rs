use dioxus::prelude::*;

use crate::context::get_theme;
use crate::pages::SubscribePage;
use crate::theme::stylesheet;

/// Root application component.
///
/// Provides the theme, the global stylesheet and the web font link, then
/// mounts the subscribe page as its only child.
#[component]
pub fn App() -> Element {
    let theme = use_context_provider(get_theme);
    let css = stylesheet(&theme);

    // A font that fails to load just falls back to the rest of the stack
    let font_href = theme.font_stylesheet().map(str::to_string);

    rsx! {
        if let Some(href) = font_href {
            document::Link { rel: "stylesheet", href: "{href}" }
        }
        style { {css} }
        SubscribePage {}
    }
}
