//! Text Field Component
//!
//! Outlined input with a label above and helper text below.
//! Features:
//! - Error styling (red border, label and helper text) when `error` is set
//! - Helper text slot that keeps its height so the layout does not jump
//! - Optional full-width stretch

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Current input value
    pub value: String,
    /// Handler called with the raw input value on every change
    pub oninput: EventHandler<String>,
    /// Label text
    pub label: String,
    /// Render in the error state
    #[props(default = false)]
    pub error: bool,
    /// Text under the field; shown in the error color when `error` is set
    #[props(default)]
    pub helper_text: String,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Element id; derived from the label when absent
    #[props(default)]
    pub id: Option<String>,
}

/// Derive a stable element id from a label ("Email Address" -> "field-email-address")
pub fn field_id(label: &str) -> String {
    let slug: Vec<String> = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect();
    format!("field-{}", slug.join("-"))
}

/// Outlined text field
///
/// Validation is owned by the caller; this component only reflects the
/// `error` flag and `helper_text` it is given.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     TextField {
///         label: "Email Address".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         error: true,
///         helper_text: "Email is required".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| field_id(&props.label));
    let helper_id = format!("{}-helper", id);

    let mut wrapper_class = String::from("text-field");
    if props.full_width {
        wrapper_class.push_str(" text-field-full-width");
    }
    if props.error {
        wrapper_class.push_str(" text-field-error");
    }

    let aria_invalid = if props.error { "true" } else { "false" };

    rsx! {
        div { class: "{wrapper_class}",
            label {
                class: "text-field-label",
                r#for: "{id}",
                "{props.label}"
            }
            input {
                id: "{id}",
                class: "text-field-input",
                r#type: "text",
                value: "{props.value}",
                "aria-invalid": "{aria_invalid}",
                "aria-describedby": "{helper_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            p {
                id: "{helper_id}",
                class: "text-field-helper",
                "{props.helper_text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_from_label() {
        assert_eq!(field_id("Email Address"), "field-email-address");
        assert_eq!(field_id("  Your e-mail!  "), "field-your-e-mail");
    }
}
