//! Card Component
//!
//! Raised surface on the paper color with rounded corners.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    /// Optional heading rendered above the content
    #[props(default)]
    pub title: Option<String>,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", extra_class)
    };

    rsx! {
        section { class: "{full_class}",
            div { class: "card-content",
                if let Some(title) = &props.title {
                    h2 { class: "card-title", "{title}" }
                }
                {props.children}
            }
        }
    }
}
