//! Artist card component - pure view with callbacks

use crate::components::follow_button::FollowButton;
use crate::components::icons::ImageIcon;
use crate::components::utils::format_release_date;
use crate::display_types::ArtistSummary;
use dioxus::prelude::*;
use mrd_common::FollowState;

/// Card for one artist in search results, "my artists" and the dashboard.
///
/// The follow state is passed in separately from `artist.followed`, which is
/// only the value the page was fetched with.
#[component]
pub fn ArtistCard(
    artist: ArtistSummary,
    follow_state: FollowState,
    #[props(default)] follow_busy: bool,
    on_toggle_follow: EventHandler<()>,
) -> Element {
    let name = artist.name.clone();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg flex items-center gap-4 p-3",
            "data-testid": "artist-card",
            "data-external-id": "{artist.external_id}",
            div { class: "w-16 h-16 flex-shrink-0 rounded bg-gray-700 flex items-center justify-center overflow-hidden",
                if let Some(url) = &artist.image_url {
                    img {
                        src: "{url}",
                        alt: "Picture of {name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    ImageIcon { class: "w-8 h-8 text-gray-500" }
                }
            }
            div { class: "flex-1 min-w-0",
                h3 { class: "text-white font-semibold truncate", "{name}" }
                p { class: "text-xs text-gray-400", "{artist.source}" }
                if let Some(since) = artist.followed_since {
                    p { class: "text-xs text-gray-500", "Following since {format_release_date(since)}" }
                }
            }
            FollowButton {
                state: follow_state,
                busy: follow_busy,
                artist_name: name.clone(),
                on_toggle: move |_| on_toggle_follow.call(()),
            }
        }
    }
}
