//! Pagination control

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use dioxus::prelude::*;
use mrd_common::{page_links, PageLink, Pagination, QueryParams};

const ITEM_CLASS: &str = "flex items-center justify-center min-w-9 h-9 px-3 rounded-lg text-sm";

/// Page navigation below a result list.
///
/// Every link keeps the current query parameters and only rewrites `page`.
/// Clicking a link is a plain navigation, the target page fetches its own data.
#[component]
pub fn PaginationView(pagination: Pagination, query: QueryParams) -> Element {
    let links = page_links(&pagination);

    rsx! {
        nav { class: "flex justify-center mt-8", aria_label: "Pagination", "data-testid": "pagination",
            ul { class: "flex items-center gap-1",
                for (index, link) in links.into_iter().enumerate() {
                    PageLinkItem { key: "{index}", link, query: query.clone() }
                }
            }
        }
    }
}

#[component]
fn PageLinkItem(link: PageLink, query: QueryParams) -> Element {
    let href = link.target().map(|page| query.href_for_page(page));
    let state_class = match link {
        PageLink::Page { active: true, .. } => "bg-red-700 text-white font-semibold",
        _ if link.is_disabled() => "text-gray-600 cursor-not-allowed",
        _ => "text-gray-300 hover:bg-gray-700 hover:text-white",
    };
    let li_class = if link.is_disabled() { "disabled" } else { "" };

    let body = match link {
        PageLink::Previous { .. } => rsx! {
            a {
                class: "{ITEM_CLASS} {state_class}",
                href,
                aria_disabled: href_missing(link),
                "data-testid": "page-previous",
                ChevronLeftIcon {}
                span { class: "sr-only", "Previous" }
            }
        },
        PageLink::Next { .. } => rsx! {
            a {
                class: "{ITEM_CLASS} {state_class}",
                href,
                aria_disabled: href_missing(link),
                "data-testid": "page-next",
                span { class: "sr-only", "Next" }
                ChevronRightIcon {}
            }
        },
        PageLink::Page { number, active } => rsx! {
            a {
                class: "{ITEM_CLASS} {state_class}",
                href,
                aria_current: if active { Some("page") } else { None },
                "data-testid": "page-link",
                "{number}"
            }
        },
        PageLink::Ellipsis => rsx! {
            span {
                class: "{ITEM_CLASS} {state_class}",
                aria_hidden: "true",
                "data-testid": "page-ellipsis",
                "…"
            }
        },
    };

    rsx! {
        li { class: "{li_class}", "data-testid": "page-item", {body} }
    }
}

fn href_missing(link: PageLink) -> Option<&'static str> {
    link.is_disabled().then_some("true")
}
