//! Button Components
//!
//! Two fill styles crossed with two theme colors:
//! - Contained: solid background, used for the main call to action
//! - Outlined: transparent with a colored border, for secondary links

use dioxus::prelude::*;

/// Button fill style
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid fill in the button color
    #[default]
    Contained,
    /// Transparent fill, colored border and text
    Outlined,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn-contained",
            ButtonVariant::Outlined => "btn-outlined",
        }
    }
}

/// Theme color a button is painted with
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
}

impl ButtonColor {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonColor::Primary => "btn-color-primary",
            ButtonColor::Secondary => "btn-color-secondary",
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Fill style
    #[props(default)]
    pub variant: ButtonVariant,
    /// Theme color
    #[props(default)]
    pub color: ButtonColor,
    #[props(default)]
    pub size: ButtonSize,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Join the classes for a button configuration
pub fn button_class(
    variant: ButtonVariant,
    color: ButtonColor,
    size: ButtonSize,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    let mut classes = vec!["btn", variant.class(), color.class(), size.class()];
    if full_width {
        classes.push("btn-full-width");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Contained,
///         size: ButtonSize::Large,
///         button_type: "submit".to_string(),
///         "Subscribe for Updates"
///     }
///
///     Button {
///         variant: ButtonVariant::Outlined,
///         color: ButtonColor::Secondary,
///         "Examples"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(
        props.variant,
        props.color,
        props.size,
        props.full_width,
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
