mod dashboard;
mod layout;
mod my_artists;
mod releases;
mod search;

pub use dashboard::Dashboard;
pub use layout::AppLayout;
pub use my_artists::MyArtists;
pub use releases::Releases;
pub use search::Search;
