//! Shared UI components

pub mod app_layout;
pub mod artist_card;
pub mod button;
pub mod dashboard;
pub mod follow_button;
pub mod helpers;
pub mod icons;
pub mod nav_bar;
pub mod pagination;
pub mod release_filter;
pub mod releases_table;
pub mod results;
pub mod search_bar;
pub mod text_input;
pub mod toast;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use artist_card::ArtistCard;
pub use button::{Button, ButtonVariant};
pub use dashboard::{ArtistGrid, DashboardSectionView};
pub use follow_button::FollowButton;
pub use helpers::{ErrorDisplay, LoadingSpinner, NoResults, PageContainer, GENERIC_ERROR_MESSAGE};
pub use icons::{
    AlertTriangleIcon, ChevronLeftIcon, ChevronRightIcon, HeartIcon, ImageIcon, LoaderIcon,
    SearchIcon, XIcon,
};
pub use nav_bar::{NavBarView, NavItem};
pub use pagination::PaginationView;
pub use release_filter::{ReleaseFilterInput, ReleaseFilterView};
pub use releases_table::{ReleaseRow, ReleasesTable};
pub use results::{render_results, RenderState, ResultRenderer};
pub use search_bar::SearchBar;
pub use text_input::{InputKind, TextInput};
pub use toast::ToastStack;
pub use utils::format_release_date;
