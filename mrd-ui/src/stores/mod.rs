//! State types held in signals by the web app
//!
//! Kept free of any runtime handles so they can be unit tested directly.

pub mod toasts;

pub use toasts::*;
