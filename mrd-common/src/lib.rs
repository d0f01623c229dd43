//! mrd-common - Pure domain logic shared by the UI and web crates
//!
//! Nothing in here touches the network or the DOM.

mod artist_source;
mod date_range;
mod follow;
mod page_links;
mod pagination;
mod query;

pub use artist_source::ArtistSource;
pub use date_range::{DateRange, DateRangeError};
pub use follow::{FollowAction, FollowState, FollowToggle, ToggleBusy};
pub use page_links::{page_links, PageLink};
pub use pagination::{Pagination, ResultPage};
pub use query::QueryParams;
