//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Message shown whenever a fetch fails, whatever the cause
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Generic error panel
#[component]
pub fn ErrorDisplay(#[props(default = GENERIC_ERROR_MESSAGE.to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-3 bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            role: "alert",
            "data-testid": "error-panel",
            AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0 mt-0.5" }
            p { "{message}" }
        }
    }
}
