use dioxus::prelude::*;

/// Shown in place of an empty result list
#[component]
pub fn NoResults(message: String) -> Element {
    rsx! {
        div {
            class: "text-center text-gray-400 py-12",
            "data-testid": "no-results",
            p { "{message}" }
        }
    }
}
