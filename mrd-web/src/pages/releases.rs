use crate::api::{ReleasesRequest, RestClient};
use crate::render::use_render_service;
use crate::Route;
use dioxus::prelude::*;
use mrd_common::{DateRange, DateRangeError, Pagination, QueryParams, ResultPage};
use mrd_ui::{
    render_results, PageContainer, ReleaseEntry, ReleaseFilterInput, ReleaseFilterView,
    ReleaseRow, ReleasesTable, ResultRenderer,
};
use tracing::warn;

struct ReleasesRenderer;

impl ResultRenderer for ReleasesRenderer {
    type Response = ResultPage<ReleaseEntry>;
    type Item = ReleaseEntry;

    fn items<'a>(&self, response: &'a Self::Response) -> &'a [ReleaseEntry] {
        &response.items
    }

    fn pagination(&self, response: &Self::Response) -> Option<Pagination> {
        Some(response.pagination)
    }

    fn item_key(&self, release: &ReleaseEntry) -> String {
        release.id.clone()
    }

    fn render_item(&self, release: &ReleaseEntry) -> Element {
        rsx! {
            ReleaseRow { release: release.clone() }
        }
    }

    fn empty_message(&self) -> String {
        "No releases match the current filter.".to_string()
    }

    fn wrap(&self, items: Element) -> Element {
        rsx! {
            ReleasesTable { {items} }
        }
    }
}

fn checked_range(from: &str, to: &str) -> Result<DateRange, DateRangeError> {
    let range = DateRange::parse(from, to)?;
    range.validate()?;
    Ok(range)
}

/// Query string of this page, used to build pagination links.
fn releases_query(query: &str, from: &str, to: &str) -> QueryParams {
    QueryParams::new()
        .with("query", Some(query))
        .with("from", Some(from))
        .with("to", Some(to))
}

#[component]
pub fn Releases(page: u32, query: String, from: String, to: String) -> Element {
    let client: RestClient = use_context();
    let mut filter_error = use_signal(|| None::<String>);

    let state = use_render_service(
        "releases",
        use_reactive((&page, &query, &from, &to), move |(page, query, from, to)| {
            let client = client.clone();
            // Hand-edited URLs may carry a bad range; fall back to no date filter
            let date_range = checked_range(&from, &to).unwrap_or_else(|err| {
                warn!("Ignoring date range {from:?}..{to:?}: {err}");
                DateRange::default()
            });
            let request = ReleasesRequest {
                page: page.max(1),
                query: Some(query),
                date_range,
            };
            async move { client.releases(&request).await }
        }),
    );

    let links = releases_query(&query, &from, &to);

    rsx! {
        PageContainer { title: "Releases".to_string(),
            ReleaseFilterView {
                initial: ReleaseFilterInput {
                    query: query.clone(),
                    from: from.clone(),
                    to: to.clone(),
                },
                error: filter_error(),
                on_submit: move |input: ReleaseFilterInput| {
                    match checked_range(&input.from, &input.to) {
                        Ok(_) => {
                            filter_error.set(None);
                            navigator()
                                .push(Route::Releases {
                                    page: 1,
                                    query: input.query.trim().to_string(),
                                    from: input.from.trim().to_string(),
                                    to: input.to.trim().to_string(),
                                });
                        }
                        Err(err) => filter_error.set(Some(format!("Invalid date range: {err}"))),
                    }
                },
            }
            {render_results(&state, &ReleasesRenderer, &links)}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            checked_range("2024-06-01", "2024-05-01"),
            Err(DateRangeError::Inverted)
        );
        assert!(checked_range("2024-05-01", "2024-06-01").is_ok());
        assert!(checked_range("", "").unwrap().is_open());
    }

    #[test]
    fn test_pagination_links_keep_filter() {
        assert_eq!(
            releases_query("", "2024-01-01", "").href_for_page(2),
            "?from=2024-01-01&page=2"
        );
    }
}
