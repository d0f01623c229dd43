//! Page container component

use dioxus::prelude::*;

/// Page body with a heading and consistent padding
#[component]
pub fn PageContainer(
    /// Page heading, omitted when `None`
    #[props(default)]
    title: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "container mx-auto p-6",
            if let Some(title) = title {
                h1 { class: "text-2xl font-bold text-white mb-6", "{title}" }
            }
            {children}
        }
    }
}
