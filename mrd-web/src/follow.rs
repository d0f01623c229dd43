//! Follow/unfollow an artist from any card

use crate::api::RestClient;
use crate::error::ApiError;
use crate::notify::{Notifier, Toaster};
use async_trait::async_trait;
use dioxus::prelude::*;
use mrd_common::{ArtistSource, FollowAction, FollowState, FollowToggle};
use mrd_ui::{ArtistCard, ArtistSummary};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// The two endpoints the follow toggle needs
#[async_trait(?Send)]
pub trait FollowApi {
    async fn follow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError>;
    async fn unfollow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl FollowApi for RestClient {
    async fn follow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        RestClient::follow(self, source, external_id).await
    }

    async fn unfollow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        RestClient::unfollow(self, source, external_id).await
    }
}

#[async_trait(?Send)]
impl<T: FollowApi + ?Sized> FollowApi for Rc<T> {
    async fn follow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        (**self).follow(source, external_id).await
    }

    async fn unfollow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        (**self).unfollow(source, external_id).await
    }
}

pub struct FollowArtistService<C, N> {
    client: C,
    notifier: N,
}

impl<C: FollowApi, N: Notifier> FollowArtistService<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// Send one follow or unfollow request for `artist`.
    ///
    /// Returns whether it succeeded. Success is announced through the
    /// notifier; failures are logged here and reported by the client.
    pub async fn apply(&self, artist: &ArtistSummary, action: FollowAction) -> bool {
        let result = match action {
            FollowAction::Follow => self.client.follow(artist.source, &artist.external_id).await,
            FollowAction::Unfollow => {
                self.client
                    .unfollow(artist.source, &artist.external_id)
                    .await
            }
        };

        match result {
            Ok(()) => {
                info!("{action:?} {} ({})", artist.name, artist.source);
                let message = match action {
                    FollowAction::Follow => format!("You are now following {}", artist.name),
                    FollowAction::Unfollow => format!("You no longer follow {}", artist.name),
                };
                self.notifier.success(&message);
                true
            }
            Err(err) => {
                warn!("{action:?} {} failed: {err}", artist.name);
                false
            }
        }
    }
}

/// Bind a [`FollowToggle`] for `artist` to a signal.
///
/// Returns the current toggle and the click handler. The handler spawns one
/// request through the `Rc<dyn FollowApi>` in context; a click while that
/// request is in flight is ignored.
pub fn use_follow_toggle(artist: &ArtistSummary) -> (FollowToggle, Callback<()>) {
    let api: Rc<dyn FollowApi> = use_context();
    let toaster: Toaster = use_context();
    let mut toggle = use_signal(|| FollowToggle::new(FollowState::from_followed(artist.followed)));

    let target = artist.clone();
    let on_toggle = use_callback(move |_: ()| {
        let Ok(action) = toggle.write().begin() else {
            debug!("Ignoring follow click for {} while busy", target.name);
            return;
        };
        let service = FollowArtistService::new(api.clone(), toaster);
        let artist = target.clone();
        spawn(async move {
            let succeeded = service.apply(&artist, action).await;
            toggle.write().finish(succeeded);
        });
    });

    (toggle(), on_toggle)
}

/// Artist card wired to the follow endpoints.
#[component]
pub fn FollowableArtistCard(artist: ArtistSummary) -> Element {
    let (toggle, on_toggle) = use_follow_toggle(&artist);

    rsx! {
        ArtistCard {
            artist,
            follow_state: toggle.state(),
            follow_busy: toggle.is_busy(),
            on_toggle_follow: on_toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockApi {
        calls: RefCell<Vec<(FollowAction, String)>>,
        fail: bool,
    }

    impl MockApi {
        fn record(&self, action: FollowAction, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push((action, id.to_string()));
            if self.fail {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl FollowApi for MockApi {
        async fn follow(&self, _source: ArtistSource, id: &str) -> Result<(), ApiError> {
            self.record(FollowAction::Follow, id)
        }

        async fn unfollow(&self, _source: ArtistSource, id: &str) -> Result<(), ApiError> {
            self.record(FollowAction::Unfollow, id)
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for MockNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn artist(followed: bool) -> ArtistSummary {
        ArtistSummary {
            external_id: "252211".to_string(),
            name: "Darkthrone".to_string(),
            source: ArtistSource::Discogs,
            image_url: None,
            followed,
            followed_since: None,
        }
    }

    #[tokio::test]
    async fn test_follow_sends_one_request_and_one_notification() {
        let service = FollowArtistService::new(MockApi::default(), MockNotifier::default());
        let artist = artist(false);
        let mut toggle = FollowToggle::new(FollowState::from_followed(artist.followed));

        let action = toggle.begin().unwrap();
        let succeeded = service.apply(&artist, action).await;
        toggle.finish(succeeded);

        assert_eq!(
            *service.client.calls.borrow(),
            vec![(FollowAction::Follow, "252211".to_string())]
        );
        assert_eq!(
            *service.notifier.successes.borrow(),
            vec!["You are now following Darkthrone".to_string()]
        );
        assert_eq!(toggle.state(), FollowState::Following);
    }

    #[tokio::test]
    async fn test_unfollow_when_following() {
        let service = FollowArtistService::new(MockApi::default(), MockNotifier::default());
        let artist = artist(true);
        let mut toggle = FollowToggle::new(FollowState::from_followed(artist.followed));

        let action = toggle.begin().unwrap();
        assert_eq!(action, FollowAction::Unfollow);
        toggle.finish(service.apply(&artist, action).await);

        assert_eq!(service.client.calls.borrow()[0].0, FollowAction::Unfollow);
        assert_eq!(
            *service.notifier.successes.borrow(),
            vec!["You no longer follow Darkthrone".to_string()]
        );
        assert_eq!(toggle.state(), FollowState::NotFollowing);
    }

    #[tokio::test]
    async fn test_failure_keeps_state_without_success_toast() {
        let api = MockApi {
            fail: true,
            ..Default::default()
        };
        let service = FollowArtistService::new(api, MockNotifier::default());
        let artist = artist(false);
        let mut toggle = FollowToggle::new(FollowState::NotFollowing);

        let action = toggle.begin().unwrap();
        toggle.finish(service.apply(&artist, action).await);

        assert_eq!(service.client.calls.borrow().len(), 1);
        assert!(service.notifier.successes.borrow().is_empty());
        assert_eq!(toggle.state(), FollowState::NotFollowing);
        assert!(!toggle.is_busy());
    }

    #[tokio::test]
    async fn test_second_click_while_in_flight_is_rejected() {
        let service = FollowArtistService::new(MockApi::default(), MockNotifier::default());
        let artist = artist(false);
        let mut toggle = FollowToggle::new(FollowState::NotFollowing);

        let action = toggle.begin().unwrap();
        assert!(toggle.begin().is_err());
        toggle.finish(service.apply(&artist, action).await);

        assert_eq!(service.client.calls.borrow().len(), 1);
        assert_eq!(service.notifier.successes.borrow().len(), 1);
    }

    fn card_harness(api: Rc<MockApi>) -> Element {
        use_context_provider(|| api.clone() as Rc<dyn FollowApi>);
        let toaster = crate::notify::use_toaster_provider();
        let (toggle, on_toggle) = use_follow_toggle(&artist(false));

        // Two clicks in a row: the second lands while the first is in flight
        use_hook(move || {
            spawn(async move {
                on_toggle.call(());
                on_toggle.call(());
            });
        });

        rsx! {
            mrd_ui::FollowButton {
                state: toggle.state(),
                busy: toggle.is_busy(),
                artist_name: "Darkthrone".to_string(),
                on_toggle: move |_| on_toggle.call(()),
            }
            mrd_ui::ToastStack { toasts: toaster.toasts(), on_dismiss: move |id| toaster.dismiss(id) }
        }
    }

    /// Drive spawned tasks until nothing is left to do right now.
    async fn run_pending(dom: &mut VirtualDom) {
        for _ in 0..10 {
            let work = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_clicking_card_follows_and_rerenders() {
        let api = Rc::new(MockApi::default());
        let mut dom = VirtualDom::new_with_props(card_harness, api.clone());
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-follow-state="not-following""#));

        run_pending(&mut dom).await;
        let html = dioxus_ssr::render(&dom);

        assert_eq!(api.calls.borrow().len(), 1);
        assert!(html.contains(r#"data-follow-state="following""#));
        assert!(!html.contains("animate-spin"));
        assert_eq!(html.matches(r#"data-testid="toast-success""#).count(), 1);
        assert!(html.contains("You are now following Darkthrone"));
    }
}
