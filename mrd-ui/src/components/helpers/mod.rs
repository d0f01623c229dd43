//! Common helper UI components

mod error_display;
mod loading_spinner;
mod no_results;
mod page_container;

pub use error_display::{ErrorDisplay, GENERIC_ERROR_MESSAGE};
pub use loading_spinner::LoadingSpinner;
pub use no_results::NoResults;
pub use page_container::PageContainer;
