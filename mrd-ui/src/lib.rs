//! mrd-ui - Display types and pure view components
//!
//! Components here take props and emit callbacks; they never talk to the
//! network. The web crate wires them to the REST client.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
