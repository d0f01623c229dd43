//! Release table

use crate::display_types::ReleaseEntry;
use dioxus::prelude::*;

/// Table shell; rows go in `children`
#[component]
pub fn ReleasesTable(children: Element) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full text-left text-sm text-gray-300", "data-testid": "releases-table",
                thead { class: "text-xs uppercase text-gray-500 border-b border-gray-700",
                    tr {
                        th { class: "py-2 pr-4", "Artist" }
                        th { class: "py-2 pr-4", "Album" }
                        th { class: "py-2 pr-4", "Release date" }
                        th { class: "py-2 pr-4", "Genre" }
                        th { class: "py-2", "Type" }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn ReleaseRow(release: ReleaseEntry) -> Element {
    let genre = release.genre.clone().unwrap_or_default();
    let release_type = release.release_type.clone().unwrap_or_default();

    rsx! {
        tr {
            class: "border-b border-gray-800 hover:bg-gray-800/50",
            "data-testid": "release-row",
            td { class: "py-2 pr-4 text-white", "{release.artist}" }
            td { class: "py-2 pr-4", "{release.album_title}" }
            td { class: "py-2 pr-4 whitespace-nowrap", "{release.date_label()}" }
            td { class: "py-2 pr-4", "{genre}" }
            td { class: "py-2", "{release_type}" }
        }
    }
}
