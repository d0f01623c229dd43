//! mrd-web - Browser client for the metal release detector
//!
//! Pages fetch through [`api::RestClient`] and draw with the pure views in
//! `mrd-ui`. The client (which carries the [`config::ClientConfig`]), the
//! follow endpoints and the toaster reach every page through context.

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod follow;
pub mod notify;
pub mod pages;
pub mod render;
pub mod timer;

use api::RestClient;
use config::ClientConfig;
use dioxus::prelude::*;
use follow::FollowApi;
use notify::use_toaster_provider;
use pages::{AppLayout, Dashboard, MyArtists, Releases, Search};
use std::rc::Rc;
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/search?:query&:page&:size")]
    Search { query: String, page: u32, size: u32 },
    #[route("/my-artists?:page")]
    MyArtists { page: u32 },
    #[route("/releases?:page&:query&:from&:to")]
    Releases { page: u32, query: String, from: String, to: String },
}

#[component]
pub fn App() -> Element {
    let toaster = use_toaster_provider();
    let client = use_context_provider(|| {
        let config = ClientConfig::from_env();
        info!(
            "API at '{}' (timeout {}s, page size {})",
            config.api_base,
            config.timeout.as_secs(),
            config.page_size
        );
        RestClient::new(config)
            .with_csrf_token(browser::csrf_token())
            .with_notifier(toaster)
    });
    use_context_provider(|| Rc::new(client) as Rc<dyn FollowApi>);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
