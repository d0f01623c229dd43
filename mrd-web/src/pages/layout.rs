use crate::notify::Toaster;
use crate::Route;
use mrd_ui::{AppLayoutView, NavBarView, NavItem, ToastStack};
use dioxus::prelude::*;

const NAV: [(&str, &str); 4] = [
    ("dashboard", "Dashboard"),
    ("search", "Search"),
    ("my-artists", "My Artists"),
    ("releases", "Releases"),
];

fn nav_id(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "dashboard",
        Route::Search { .. } => "search",
        Route::MyArtists { .. } => "my-artists",
        Route::Releases { .. } => "releases",
    }
}

fn route_for(id: &str) -> Option<Route> {
    match id {
        "dashboard" => Some(Route::Dashboard {}),
        "search" => Some(Route::Search {
            query: String::new(),
            page: 1,
            size: 0,
        }),
        "my-artists" => Some(Route::MyArtists { page: 1 }),
        "releases" => Some(Route::Releases {
            page: 1,
            query: String::new(),
            from: String::new(),
            to: String::new(),
        }),
        _ => None,
    }
}

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let toaster: Toaster = use_context();
    let active = nav_id(&current_route);

    let nav_items = NAV
        .iter()
        .map(|(id, label)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
            is_active: *id == active,
        })
        .collect::<Vec<_>>();

    rsx! {
        AppLayoutView {
            nav_bar: rsx! {
                NavBarView {
                    nav_items,
                    on_nav_click: move |id: String| {
                        if let Some(route) = route_for(&id) {
                            navigator().push(route);
                        }
                    },
                }
            },
            extra: rsx! {
                ToastStack {
                    toasts: toaster.toasts(),
                    on_dismiss: move |id| toaster.dismiss(id),
                }
            },
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_match_active_ids() {
        for (id, _) in NAV {
            let route = route_for(id).unwrap();
            assert_eq!(nav_id(&route), id);
        }
        assert!(route_for("settings").is_none());
    }
}
