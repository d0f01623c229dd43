//! Navigation bar view component
//!
//! Pure, props-based component for the top navigation.

use dioxus::prelude::*;

/// Navigation item for the nav bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Navigation bar view (pure, props-based)
#[component]
pub fn NavBarView(
    #[props(default = "Metal Release Detector".to_string())] brand: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
) -> Element {
    rsx! {
        nav {
            id: "nav-bar",
            class: "shrink-0 h-12 bg-gray-900 flex items-center gap-6 px-6 border-b border-gray-800",
            span { class: "text-white font-bold tracking-wide", "{brand}" }
            ul { class: "flex items-center gap-1",
                for item in nav_items {
                    li { key: "{item.id}",
                        button {
                            class: if item.is_active { "px-3 py-1.5 rounded text-sm text-white bg-gray-800" } else { "px-3 py-1.5 rounded text-sm text-gray-400 hover:text-white" },
                            aria_current: if item.is_active { Some("page") } else { None },
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
