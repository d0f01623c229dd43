//! User-facing notifications

use crate::timer::sleep;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use mrd_ui::stores::{Toast, ToastKind, ToastState, TOAST_DURATION_MS};
use std::time::Duration;

/// Sink for short user-facing messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Toast-backed notifier shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    state: Signal<ToastState>,
}

impl Toaster {
    pub fn new(state: Signal<ToastState>) -> Self {
        Self { state }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.state.read().toasts.clone()
    }

    pub fn dismiss(&self, id: u64) {
        let mut state = self.state;
        state.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut state = self.state;
        let id = state.write().push(kind, message);
        // Outlives the component that raised the toast
        spawn_forever(async move {
            sleep(Duration::from_millis(TOAST_DURATION_MS)).await;
            state.write().dismiss(id);
        });
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }
}

/// Create the app-wide toaster and provide it to descendants.
pub fn use_toaster_provider() -> Toaster {
    let state = use_signal(ToastState::default);
    use_context_provider(|| Toaster::new(state))
}
