//! Artist search bar

use crate::components::icons::SearchIcon;
use crate::components::text_input::{InputKind, TextInput};
use dioxus::prelude::*;

#[component]
pub fn SearchBar(
    #[props(default)] initial: String,
    #[props(default = "Search artists")] placeholder: &'static str,
    on_submit: EventHandler<String>,
) -> Element {
    let mut value = use_signal(|| initial.clone());

    rsx! {
        form {
            class: "flex items-center gap-2 mb-6",
            role: "search",
            onsubmit: move |evt| {
                evt.prevent_default();
                let query = value().trim().to_string();
                if !query.is_empty() {
                    on_submit.call(query);
                }
            },
            SearchIcon { class: "w-5 h-5 text-gray-500" }
            TextInput {
                id: "artist-search",
                label: "Artist name",
                value: value(),
                on_input: move |v| value.set(v),
                kind: InputKind::Search,
                label_hidden: true,
                placeholder,
                autofocus: true,
            }
        }
    }
}
