//! Result host shared by every listing page
//!
//! Each page supplies a [`ResultRenderer`] describing how one item is drawn
//! and what to say when there are none. [`render_results`] owns everything
//! else: the host container, the loading indicator, the error panel and the
//! pagination control.

use crate::components::helpers::{ErrorDisplay, LoadingSpinner, NoResults};
use crate::components::pagination::PaginationView;
use dioxus::prelude::*;
use mrd_common::{Pagination, QueryParams};

/// Lifecycle of a single fetch as seen by the host container
#[derive(Clone, Debug, PartialEq)]
pub enum RenderState<T> {
    /// Request issued, no response yet
    Loading,
    Ready(T),
    /// The request failed; the cause has already been logged
    Failed,
}

impl<T> RenderState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }
}

/// Page-specific half of a render service.
pub trait ResultRenderer {
    /// Payload returned by the page's endpoint
    type Response;
    type Item;

    /// Items to draw, in display order.
    fn items<'a>(&self, response: &'a Self::Response) -> &'a [Self::Item];

    /// Pagination envelope, for listings that have one.
    fn pagination(&self, _response: &Self::Response) -> Option<Pagination> {
        None
    }

    /// Stable identity of an item, so per-item state survives a re-render.
    fn item_key(&self, item: &Self::Item) -> String;

    /// Draw one item.
    fn render_item(&self, item: &Self::Item) -> Element;

    /// Text shown when the response has no items.
    fn empty_message(&self) -> String;

    /// Container around the drawn items (a grid, a table body...).
    fn wrap(&self, items: Element) -> Element {
        rsx! {
            div { class: "grid gap-4", {items} }
        }
    }
}

/// Render `state` into a results host using `renderer` for the items.
///
/// Failures never escape: whatever went wrong, the host shows a single
/// generic error panel. A pagination control is appended only when the
/// response spans more than one page.
pub fn render_results<R: ResultRenderer>(
    state: &RenderState<R::Response>,
    renderer: &R,
    query: &QueryParams,
) -> Element {
    let body = match state {
        RenderState::Loading => rsx! {
            LoadingSpinner {}
        },
        RenderState::Failed => rsx! {
            ErrorDisplay {}
        },
        RenderState::Ready(response) => {
            let items = renderer.items(response);
            let list = if items.is_empty() {
                rsx! {
                    NoResults { message: renderer.empty_message() }
                }
            } else {
                renderer.wrap(rsx! {
                    for item in items.iter() {
                        Fragment { key: "{renderer.item_key(item)}", {renderer.render_item(item)} }
                    }
                })
            };
            let pagination = renderer
                .pagination(response)
                .filter(Pagination::has_multiple_pages);

            rsx! {
                {list}
                if let Some(pagination) = pagination {
                    PaginationView { pagination, query: query.clone() }
                }
            }
        }
    };

    rsx! {
        div {
            class: "relative",
            aria_busy: state.is_loading().then_some("true"),
            "data-testid": "results-host",
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrd_common::ResultPage;

    struct BandRenderer;

    impl ResultRenderer for BandRenderer {
        type Response = ResultPage<String>;
        type Item = String;

        fn items<'a>(&self, response: &'a Self::Response) -> &'a [String] {
            &response.items
        }

        fn pagination(&self, response: &Self::Response) -> Option<Pagination> {
            Some(response.pagination)
        }

        fn item_key(&self, item: &String) -> String {
            item.clone()
        }

        fn render_item(&self, item: &String) -> Element {
            rsx! {
                p { "data-testid": "band", "{item}" }
            }
        }

        fn empty_message(&self) -> String {
            "No bands found".to_string()
        }
    }

    fn host(state: RenderState<ResultPage<String>>) -> Element {
        render_results(&state, &BandRenderer, &QueryParams::parse("query=black"))
    }

    fn render(state: RenderState<ResultPage<String>>) -> String {
        let mut dom = VirtualDom::new_with_props(host, state);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn page(items: &[&str], current: u32, total: u32) -> ResultPage<String> {
        ResultPage {
            items: items.iter().map(|s| s.to_string()).collect(),
            pagination: Pagination::new(current, total, 10),
        }
    }

    #[test]
    fn test_loading_shows_indicator_only() {
        let html = render(RenderState::Loading);
        assert!(html.contains(r#"aria-busy="true""#));
        assert_eq!(html.matches(r#"data-testid="loading-indicator""#).count(), 1);
        assert!(!html.contains(r#"data-testid="error-panel""#));
        assert!(!html.contains(r#"data-testid="band""#));
    }

    #[test]
    fn test_failure_replaces_indicator_with_one_error_panel() {
        let html = render(RenderState::Failed);
        assert!(!html.contains("aria-busy"));
        assert!(!html.contains(r#"data-testid="loading-indicator""#));
        assert_eq!(html.matches(r#"data-testid="error-panel""#).count(), 1);
        assert!(html.contains("An unexpected error occurred. Please try again later."));
        assert!(!html.contains(r#"data-testid="pagination""#));
    }

    #[test]
    fn test_empty_first_page_shows_message_without_pagination() {
        let html = render(RenderState::Ready(page(&[], 1, 0)));
        assert!(html.contains(r#"data-testid="no-results""#));
        assert!(html.contains("No bands found"));
        assert!(!html.contains(r#"data-testid="pagination""#));
        assert!(!html.contains(r#"data-testid="loading-indicator""#));
    }

    #[test]
    fn test_items_rendered_in_order() {
        let html = render(RenderState::Ready(page(&["Bathory", "Burzum", "Emperor"], 1, 1)));
        assert_eq!(html.matches(r#"data-testid="band""#).count(), 3);
        let bathory = html.find("Bathory").unwrap();
        let emperor = html.find("Emperor").unwrap();
        assert!(bathory < emperor);
        assert!(!html.contains(r#"data-testid="no-results""#));
        assert!(!html.contains(r#"data-testid="pagination""#));
    }

    #[test]
    fn test_pagination_appended_for_multiple_pages() {
        let html = render(RenderState::Ready(page(&["Mayhem"], 2, 5)));
        assert_eq!(html.matches(r#"data-testid="pagination""#).count(), 1);
        assert!(html.contains("query=black"));
        let item = html.find("Mayhem").unwrap();
        let nav = html.find(r#"data-testid="pagination""#).unwrap();
        assert!(item < nav);
    }
}
