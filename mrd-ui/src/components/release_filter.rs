//! Release search and date-range filter form

use crate::components::button::{Button, ButtonVariant};
use crate::components::text_input::{InputKind, TextInput};
use dioxus::prelude::*;

/// Raw values of the filter form, validated by the caller
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReleaseFilterInput {
    pub query: String,
    pub from: String,
    pub to: String,
}

#[component]
pub fn ReleaseFilterView(
    initial: ReleaseFilterInput,
    /// Validation message from the last submit
    #[props(default)]
    error: Option<String>,
    on_submit: EventHandler<ReleaseFilterInput>,
) -> Element {
    let mut query = use_signal(|| initial.query.clone());
    let mut from = use_signal(|| initial.from.clone());
    let mut to = use_signal(|| initial.to.clone());

    let invalid = error.is_some();

    let submit = move || {
        on_submit.call(ReleaseFilterInput {
            query: query(),
            from: from(),
            to: to(),
        })
    };

    rsx! {
        form {
            class: "flex flex-wrap items-end gap-3 mb-6",
            "data-testid": "release-filter",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit();
            },
            div { class: "flex-1 min-w-48",
                TextInput {
                    id: "release-query",
                    label: "Artist or album",
                    value: query(),
                    on_input: move |v| query.set(v),
                    kind: InputKind::Search,
                    placeholder: "Search releases",
                }
            }
            div {
                TextInput {
                    id: "release-from",
                    label: "From",
                    value: from(),
                    on_input: move |v| from.set(v),
                    kind: InputKind::Date,
                    invalid,
                }
            }
            div {
                TextInput {
                    id: "release-to",
                    label: "To",
                    value: to(),
                    on_input: move |v| to.set(v),
                    kind: InputKind::Date,
                    invalid,
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                onclick: move |_| {},
                "Filter"
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    query.set(String::new());
                    from.set(String::new());
                    to.set(String::new());
                    submit();
                },
                "Reset"
            }
            if let Some(error) = error {
                p { class: "w-full text-sm text-red-400", "data-testid": "filter-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(error: Option<String>) -> Element {
        rsx! {
            ReleaseFilterView {
                initial: ReleaseFilterInput {
                    from: "2024-06-01".to_string(),
                    to: "2024-05-01".to_string(),
                    ..Default::default()
                },
                error,
                on_submit: |_| {},
            }
        }
    }

    fn render(error: Option<String>) -> String {
        let mut dom = VirtualDom::new_with_props(harness, error);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_error_flags_both_date_fields() {
        let html = render(Some("Invalid date range".to_string()));
        assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 2);
        assert_eq!(html.matches(r#"data-testid="filter-error""#).count(), 1);

        let html = render(None);
        assert!(!html.contains("aria-invalid"));
        assert!(html.contains(r#"for="release-to""#));
    }
}
