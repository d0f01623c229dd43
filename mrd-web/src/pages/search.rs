use crate::api::RestClient;
use crate::follow::FollowableArtistCard;
use crate::render::use_render_service;
use crate::Route;
use dioxus::prelude::*;
use mrd_common::{Pagination, QueryParams, ResultPage};
use mrd_ui::{
    render_results, ArtistGrid, ArtistSummary, NoResults, PageContainer, ResultRenderer,
    SearchBar,
};

struct SearchRenderer {
    query: String,
}

impl ResultRenderer for SearchRenderer {
    type Response = ResultPage<ArtistSummary>;
    type Item = ArtistSummary;

    fn items<'a>(&self, response: &'a Self::Response) -> &'a [ArtistSummary] {
        &response.items
    }

    fn pagination(&self, response: &Self::Response) -> Option<Pagination> {
        Some(response.pagination)
    }

    fn item_key(&self, artist: &ArtistSummary) -> String {
        artist.key()
    }

    fn render_item(&self, artist: &ArtistSummary) -> Element {
        rsx! {
            FollowableArtistCard { artist: artist.clone() }
        }
    }

    fn empty_message(&self) -> String {
        format!("No artists found for \"{}\"", self.query)
    }

    fn wrap(&self, items: Element) -> Element {
        rsx! {
            ArtistGrid { {items} }
        }
    }
}

/// Query string of this page, used to build pagination links. `size` is the
/// raw route value; 0 means the URL carried none.
fn search_query(query: &str, size: u32) -> QueryParams {
    QueryParams::new()
        .with("query", Some(query))
        .with("size", (size > 0).then(|| size.to_string()))
}

#[component]
pub fn Search(query: String, page: u32, size: u32) -> Element {
    let client: RestClient = use_context();
    let query = query.trim().to_string();
    let page_size = if size > 0 { size } else { client.config().page_size };

    let state = use_render_service(
        "search results",
        use_reactive((&query, &page, &page_size), move |(query, page, page_size)| {
            let client = client.clone();
            async move {
                if query.is_empty() {
                    return Ok(ResultPage {
                        items: Vec::new(),
                        pagination: Pagination::default(),
                    });
                }
                client.search_artists(&query, page.max(1), page_size).await
            }
        }),
    );

    let content = if query.is_empty() {
        rsx! {
            NoResults { message: "Enter an artist name to start searching." }
        }
    } else {
        let renderer = SearchRenderer {
            query: query.clone(),
        };
        render_results(&state, &renderer, &search_query(&query, size))
    };

    rsx! {
        PageContainer { title: "Search".to_string(),
            SearchBar {
                initial: query.clone(),
                on_submit: move |query: String| {
                    navigator().push(Route::Search { query, page: 1, size });
                },
            }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_keeps_page_size_only_when_set() {
        assert_eq!(search_query("mgła", 0).href_for_page(2), "?query=mg%C5%82a&page=2");
        assert_eq!(
            search_query("bathory", 50).href_for_page(3),
            "?query=bathory&size=50&page=3"
        );
    }
}
