//! Toast notifications - pure view with callbacks

use crate::components::icons::{AlertTriangleIcon, XIcon};
use crate::stores::toasts::{Toast, ToastKind};
use dioxus::prelude::*;

/// Stack of dismissible toasts in the bottom-right corner
#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-md",
            for toast in toasts {
                ToastView { key: "{toast.id}", toast, on_dismiss }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let (color, testid) = match toast.kind {
        ToastKind::Success => ("bg-green-600", "toast-success"),
        ToastKind::Error => ("bg-red-700", "toast-error"),
    };
    let id = toast.id;

    rsx! {
        div {
            class: "{color} text-white px-6 py-4 rounded-lg shadow-lg",
            role: "status",
            "data-testid": testid,
            div { class: "flex items-center justify-between gap-4",
                if toast.kind == ToastKind::Error {
                    AlertTriangleIcon { class: "w-4 h-4 flex-shrink-0" }
                }
                div { class: "flex-1",
                    span { "{toast.message}" }
                }
                button {
                    class: "text-white hover:text-gray-200",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss.call(id),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
