//! Process-wide navigation state

use std::sync::OnceLock;

use dioxus::prelude::*;
use navigation::{NavigationManager, RouteTable, RouterOptions, View, ROUTES};
use tracing::error;

static ROUTER_OPTIONS: OnceLock<RouterOptions> = OnceLock::new();

/// Navigation manager shared by every component, `None` if the table was rejected
pub static NAVIGATION: GlobalSignal<Option<NavigationManager<View>>> =
    Signal::global(build_navigation);

/// Set router options before launch. Returns false if already configured.
pub fn configure(options: RouterOptions) -> bool {
    ROUTER_OPTIONS.set(options).is_ok()
}

pub fn router_options() -> RouterOptions {
    ROUTER_OPTIONS.get().cloned().unwrap_or_default()
}

fn build_navigation() -> Option<NavigationManager<View>> {
    let options = router_options();
    match RouteTable::with_options(ROUTES.to_vec(), options.match_options) {
        Ok(table) => Some(NavigationManager::new(table, options)),
        Err(err) => {
            error!(%err, "route table rejected");
            None
        }
    }
}
