//! REST client for the detector backend
//!
//! One method per endpoint. Every call carries the same JSON/no-cache headers
//! and the page's CSRF token, is bounded by the configured timeout, and maps
//! non-2xx responses to [`ApiError`]. Nothing is retried.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::notify::Notifier;
use crate::timer::with_timeout;
use chrono::NaiveDate;
use mrd_common::{ArtistSource, DateRange, Pagination, ResultPage};
use mrd_ui::display_types::{ArtistSummary, Dashboard, DashboardItems, DashboardSection, ReleaseEntry};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, warn};

const CSRF_HEADER: &str = "X-CSRF-TOKEN";

// -- Wire types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtistSearchResponse {
    #[serde(default)]
    search_results: Vec<ArtistSearchResult>,
    pagination: Pagination,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtistSearchResult {
    id: String,
    name: String,
    image_url: Option<String>,
    source: ArtistSource,
    #[serde(default)]
    followed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyArtistsResponse {
    #[serde(default)]
    my_artists: Vec<ArtistDto>,
    pagination: Pagination,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtistDto {
    external_id: String,
    artist_name: String,
    thumb: Option<String>,
    source: ArtistSource,
    followed_since: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleasesResponse {
    #[serde(default)]
    releases: Vec<ReleaseDto>,
    pagination: Pagination,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseDto {
    id: serde_json::Value,
    artist: String,
    album_title: String,
    release_date: Option<NaiveDate>,
    estimated_release_date: Option<String>,
    genre: Option<String>,
    #[serde(rename = "type")]
    release_type: Option<String>,
    cover_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    #[serde(default)]
    recently_followed_artists: Vec<ArtistDto>,
    #[serde(default)]
    upcoming_releases: Vec<ReleaseDto>,
    #[serde(default)]
    recent_releases: Vec<ReleaseDto>,
    #[serde(default)]
    most_expected_releases: Vec<ReleaseDto>,
}

/// Notification preferences of the current user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    pub frequency_in_weeks: u32,
    pub notification_at_release_date: bool,
    pub notification_at_announcement_date: bool,
    pub notify: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub public_id: String,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub last_login: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: String,
}

/// Filter for the releases listing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReleasesRequest {
    pub page: u32,
    pub query: Option<String>,
    pub date_range: DateRange,
}

// -- Mapping into display types --

impl From<ArtistSearchResult> for ArtistSummary {
    fn from(dto: ArtistSearchResult) -> Self {
        ArtistSummary {
            external_id: dto.id,
            name: dto.name,
            source: dto.source,
            image_url: dto.image_url,
            followed: dto.followed,
            followed_since: None,
        }
    }
}

impl From<ArtistDto> for ArtistSummary {
    fn from(dto: ArtistDto) -> Self {
        ArtistSummary {
            external_id: dto.external_id,
            name: dto.artist_name,
            source: dto.source,
            image_url: dto.thumb,
            // Only followed artists are ever returned as ArtistDto
            followed: true,
            followed_since: dto.followed_since,
        }
    }
}

impl From<ReleaseDto> for ReleaseEntry {
    fn from(dto: ReleaseDto) -> Self {
        let id = match dto.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        ReleaseEntry {
            id,
            artist: dto.artist,
            album_title: dto.album_title,
            release_date: dto.release_date,
            estimated_release_date: dto.estimated_release_date,
            genre: dto.genre,
            release_type: dto.release_type,
            cover_url: dto.cover_url,
        }
    }
}

fn releases(dtos: Vec<ReleaseDto>) -> DashboardItems {
    DashboardItems::Releases(dtos.into_iter().map(ReleaseEntry::from).collect())
}

impl From<DashboardResponse> for Dashboard {
    fn from(dto: DashboardResponse) -> Self {
        Dashboard::from_sections([
            DashboardSection {
                title: "Upcoming releases".to_string(),
                items: releases(dto.upcoming_releases),
            },
            DashboardSection {
                title: "Recent releases".to_string(),
                items: releases(dto.recent_releases),
            },
            DashboardSection {
                title: "Most expected releases".to_string(),
                items: releases(dto.most_expected_releases),
            },
            DashboardSection {
                title: "Recently followed artists".to_string(),
                items: DashboardItems::Artists(
                    dto.recently_followed_artists
                        .into_iter()
                        .map(ArtistSummary::from)
                        .collect(),
                ),
            },
        ])
    }
}

// -- Client --

/// Typed client over the backend REST API, cheap to clone
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
    csrf_token: Option<String>,
    notifier: Option<Rc<dyn Notifier>>,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            csrf_token: None,
            notifier: None,
        }
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token;
        self
    }

    /// Surface failures through `notifier` in addition to returning them.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Rc::new(notifier));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn search_artists(
        &self,
        query: &str,
        page: u32,
        size: u32,
    ) -> Result<ResultPage<ArtistSummary>, ApiError> {
        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("size", size.to_string()),
        ];
        let response: ArtistSearchResponse = self
            .fetch_json(self.request(Method::GET, "/rest/v1/artists/search").query(&params))
            .await?;
        Ok(ResultPage {
            items: response.search_results,
            pagination: response.pagination.normalized(),
        }
        .map(ArtistSummary::from))
    }

    pub async fn my_artists(&self, page: u32) -> Result<ResultPage<ArtistSummary>, ApiError> {
        let params = [("page", page.to_string())];
        let response: MyArtistsResponse = self
            .fetch_json(self.request(Method::GET, "/rest/v1/my-artists").query(&params))
            .await?;
        Ok(ResultPage {
            items: response.my_artists,
            pagination: response.pagination.normalized(),
        }
        .map(ArtistSummary::from))
    }

    pub async fn follow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        let path = follow_path("follow", source, external_id);
        self.send(self.request(Method::POST, &path)).await
    }

    pub async fn unfollow(&self, source: ArtistSource, external_id: &str) -> Result<(), ApiError> {
        let path = follow_path("unfollow", source, external_id);
        self.send(self.request(Method::POST, &path)).await
    }

    pub async fn releases(
        &self,
        request: &ReleasesRequest,
    ) -> Result<ResultPage<ReleaseEntry>, ApiError> {
        let response: ReleasesResponse = self
            .fetch_json(
                self.request(Method::GET, "/rest/v1/releases")
                    .query(&releases_query(request, self.config.page_size)),
            )
            .await?;
        Ok(ResultPage {
            items: response.releases,
            pagination: response.pagination.normalized(),
        }
        .map(ReleaseEntry::from))
    }

    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        let response: DashboardResponse = self
            .fetch_json(self.request(Method::GET, "/rest/v1/dashboard"))
            .await?;
        Ok(response.into())
    }

    pub async fn notification_config(&self) -> Result<NotificationConfig, ApiError> {
        self.fetch_json(self.request(Method::GET, "/rest/v1/notification-config"))
            .await
    }

    pub async fn update_notification_config(
        &self,
        config: &NotificationConfig,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(Method::PUT, "/rest/v1/notification-config")
                .json(config),
        )
        .await
    }

    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.fetch_json(self.request(Method::GET, "/rest/v1/users/current"))
            .await
    }

    pub async fn update_current_user(
        &self,
        update: &UpdateUserRequest,
    ) -> Result<CurrentUser, ApiError> {
        self.fetch_json(
            self.request(Method::PUT, "/rest/v1/users/current")
                .json(update),
        )
        .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("{method} {url}");
        self.http
            .request(method, url)
            .headers(default_headers(self.csrf_token.as_deref()))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let result = match self.execute(builder).await {
            Ok(body) => serde_json::from_str(&body).map_err(ApiError::from),
            Err(err) => Err(err),
        };
        self.report(result)
    }

    /// Issue a request whose response body is ignored.
    async fn send(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let result = self.execute(builder).await.map(|_| ());
        self.report(result)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let timeout = self.config.timeout;
        with_timeout(timeout, send_once(builder))
            .await
            .unwrap_or(Err(ApiError::Timeout(timeout)))
    }

    fn report<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ref err) = result {
            warn!("REST call failed: {err}");
            if let Some(notifier) = &self.notifier {
                notifier.error(&err.user_message());
            }
        }
        result
    }
}

/// Path of a follow/unfollow call; the id is encoded as a single segment.
fn follow_path(verb: &str, source: ArtistSource, external_id: &str) -> String {
    format!(
        "/rest/v1/artists/{verb}/{}/{}",
        source.path_segment(),
        urlencoding::encode(external_id)
    )
}

async fn send_once(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}

fn default_headers(csrf_token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    if let Some(value) = csrf_token.and_then(|token| HeaderValue::from_str(token).ok()) {
        headers.insert(CSRF_HEADER, value);
    }
    headers
}

fn releases_query(request: &ReleasesRequest, page_size: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", request.page.max(1).to_string()),
        ("size", page_size.to_string()),
    ];
    if let Some(query) = request.query.as_deref().map(str::trim) {
        if !query.is_empty() {
            params.push(("query", query.to_string()));
        }
    }
    params.extend(request.date_range.query_pairs());
    params
}
