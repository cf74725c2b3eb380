//! Main application component with routing

use std::rc::Rc;

use dioxus::history::provide_history_context;
use dioxus::prelude::*;
use navigation::ROUTES;

use crate::history::HashHistory;
use crate::routes::Route;
use crate::state::{router_options, NAVIGATION};
use crate::styles::CUSTOM_STYLES;

/// Main application component
#[component]
pub fn App() -> Element {
    // Routes live in the URL fragment
    use_hook(|| provide_history_context(Rc::new(HashHistory::platform(&router_options()))));

    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all declared routes
#[component]
pub fn Layout() -> Element {
    let route: Route = use_route();
    let fragment = history().current_route();

    // Mirror router changes into the shared navigation manager
    use_effect(use_reactive((&fragment,), |(fragment,)| {
        if let Some(nav) = &mut *NAVIGATION.write() {
            nav.observe(&fragment);
        }
    }));

    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    let active_view = route.view();
    let current_name = match &*NAVIGATION.read() {
        Some(nav) => nav.current().name(),
        None => None,
    }
    .unwrap_or("…");

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            div { class: "title-bar",
                span { class: "title-text", "🖼️ imagelab v{version}" }
                span { class: "title-route", "{current_name} · #{fragment}" }
            }

            // Tab Navigation
            div { class: "tab-bar",
                for descriptor in ROUTES.iter() {
                    Link {
                        key: "{descriptor.name}",
                        to: Route::from_view(descriptor.view),
                        class: if active_view == Some(descriptor.view) { "tab-item tab-active" } else { "tab-item" },
                        "{descriptor.view.title()}"
                    }
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
