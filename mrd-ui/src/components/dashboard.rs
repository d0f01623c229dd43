//! Dashboard sections

use dioxus::prelude::*;

/// One titled dashboard block; the section's items go in `children`
#[component]
pub fn DashboardSectionView(title: String, children: Element) -> Element {
    rsx! {
        section { class: "mb-10", "data-testid": "dashboard-section",
            h2 { class: "text-lg font-semibold text-white mb-4", "{title}" }
            {children}
        }
    }
}

/// Grid used for artist cards on the dashboard and listing pages
#[component]
pub fn ArtistGrid(children: Element) -> Element {
    rsx! {
        div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3", "data-testid": "artist-grid", {children} }
    }
}
