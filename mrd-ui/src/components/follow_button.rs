//! Follow icon

use crate::components::icons::{HeartIcon, LoaderIcon};
use dioxus::prelude::*;
use mrd_common::FollowState;

/// Heart button reflecting a follow state.
///
/// Purely presentational: the state comes in as a prop and a click is
/// reported through `on_toggle`. While `busy` the button is disabled.
#[component]
pub fn FollowButton(
    state: FollowState,
    #[props(default)] busy: bool,
    artist_name: String,
    on_toggle: EventHandler<()>,
) -> Element {
    let (label, marker, color) = match state {
        FollowState::Following => (format!("Unfollow {artist_name}"), "following", "text-red-500"),
        FollowState::NotFollowing => (format!("Follow {artist_name}"), "not-following", "text-gray-400"),
    };

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-gray-700 transition-colors disabled:opacity-60 {color}",
            r#type: "button",
            disabled: busy,
            title: "{label}",
            aria_label: "{label}",
            aria_pressed: if state.is_following() { "true" } else { "false" },
            "data-testid": "follow-button",
            "data-follow-state": marker,
            onclick: move |_| {
                if !busy {
                    on_toggle.call(());
                }
            },
            if busy {
                LoaderIcon { class: "w-5 h-5 animate-spin" }
            } else {
                HeartIcon { class: "w-5 h-5", filled: state.is_following() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(state: FollowState) -> Element {
        rsx! {
            FollowButton { state, artist_name: "Immortal".to_string(), on_toggle: |_| {} }
        }
    }

    fn render(state: FollowState) -> String {
        let mut dom = VirtualDom::new_with_props(harness, state);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_marker_follows_state() {
        let html = render(FollowState::Following);
        assert!(html.contains(r#"data-follow-state="following""#));
        assert!(html.contains("Unfollow Immortal"));

        let html = render(FollowState::NotFollowing);
        assert!(html.contains(r#"data-follow-state="not-following""#));
        assert!(html.contains("Follow Immortal"));
        assert!(!html.contains("Unfollow"));
    }
}
