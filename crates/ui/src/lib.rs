//! UI library for imagelab
//! Dioxus components, routes, hash history and offline CSS

mod components;
mod history;
mod routes;
mod state;
mod styles;

pub use components::App;
pub use history::{HashHistory, HashLocation, MemoryLocation};
pub use routes::Route;
pub use state::*;
pub use styles::CUSTOM_STYLES;
