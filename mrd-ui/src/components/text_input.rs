//! Labelled input used by the search bar and the release filter

use dioxus::prelude::*;

/// What a field holds
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputKind {
    /// Free-text artist or album query
    Search,
    /// `YYYY-MM-DD`, rendered with the browser date picker
    Date,
}

impl InputKind {
    fn html_type(self) -> &'static str {
        match self {
            InputKind::Search => "search",
            InputKind::Date => "date",
        }
    }
}

/// Input with its own `<label>`, linked through `id`.
///
/// `invalid` marks the field for assistive tech and switches the focus ring
/// to the error colour; the message itself is rendered by the form.
#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    kind: InputKind,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] invalid: bool,
    /// Keep the label for screen readers only
    #[props(default)]
    label_hidden: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    let label_class = if label_hidden {
        "sr-only"
    } else {
        "block text-xs text-gray-400 mb-1"
    };

    let ring = if invalid {
        "ring-1 ring-red-500 focus:ring-red-500"
    } else {
        "focus:ring-1 focus:ring-red-600/50"
    };
    let class = format!(
        "w-full px-3 py-2 bg-gray-800/50 rounded-lg focus:outline-none text-gray-300 placeholder-gray-500 {ring}"
    );

    rsx! {
        label { class: label_class, r#for: id, "{label}" }
        input {
            r#type: kind.html_type(),
            class: "{class}",
            id,
            name: id,
            value: "{value}",
            placeholder,
            aria_invalid: if invalid { Some("true") } else { None },
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
