use crate::api::RestClient;
use crate::follow::FollowableArtistCard;
use crate::render::use_render_service;
use dioxus::prelude::*;
use mrd_common::QueryParams;
use mrd_ui::{
    render_results, ArtistGrid, DashboardItems, DashboardSection,
    DashboardSectionView, PageContainer, ReleaseRow, ReleasesTable, ResultRenderer,
};

const EMPTY_DASHBOARD: &str = "Follow some artists to see your dashboard.";

struct DashboardRenderer;

impl ResultRenderer for DashboardRenderer {
    type Response = mrd_ui::Dashboard;
    type Item = DashboardSection;

    fn items<'a>(&self, response: &'a mrd_ui::Dashboard) -> &'a [DashboardSection] {
        &response.sections
    }

    fn item_key(&self, section: &DashboardSection) -> String {
        section.title.clone()
    }

    fn render_item(&self, section: &DashboardSection) -> Element {
        let body = match &section.items {
            DashboardItems::Artists(artists) => rsx! {
                ArtistGrid {
                    for artist in artists.iter() {
                        FollowableArtistCard {
                            key: "{artist.key()}",
                            artist: artist.clone(),
                        }
                    }
                }
            },
            DashboardItems::Releases(releases) => rsx! {
                ReleasesTable {
                    for release in releases.iter() {
                        ReleaseRow { key: "{release.id}", release: release.clone() }
                    }
                }
            },
        };

        rsx! {
            DashboardSectionView { title: section.title.clone(), {body} }
        }
    }

    fn empty_message(&self) -> String {
        EMPTY_DASHBOARD.to_string()
    }

    fn wrap(&self, items: Element) -> Element {
        rsx! {
            div { {items} }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let client: RestClient = use_context();
    let state = use_render_service("dashboard", move || {
        let client = client.clone();
        async move { client.dashboard().await }
    });

    rsx! {
        PageContainer { title: "Dashboard".to_string(),
            {render_results(&state, &DashboardRenderer, &QueryParams::new())}
        }
    }
}
