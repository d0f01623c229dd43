use crate::api::RestClient;
use crate::follow::FollowableArtistCard;
use crate::render::use_render_service;
use dioxus::prelude::*;
use mrd_common::{Pagination, QueryParams, ResultPage};
use mrd_ui::{render_results, ArtistGrid, ArtistSummary, PageContainer, ResultRenderer};

struct MyArtistsRenderer;

impl ResultRenderer for MyArtistsRenderer {
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
        "You are not following any artists yet.".to_string()
    }

    fn wrap(&self, items: Element) -> Element {
        rsx! {
            ArtistGrid { {items} }
        }
    }
}

#[component]
pub fn MyArtists(page: u32) -> Element {
    let client: RestClient = use_context();
    let state = use_render_service(
        "followed artists",
        use_reactive((&page,), move |(page,)| {
            let client = client.clone();
            async move { client.my_artists(page.max(1)).await }
        }),
    );

    rsx! {
        PageContainer { title: "My Artists".to_string(),
            {render_results(&state, &MyArtistsRenderer, &QueryParams::new())}
        }
    }
}
