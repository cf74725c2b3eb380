//! Fallback page for fragments the router enum does not declare

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::NAVIGATION;
use crate::styles::CUSTOM_STYLES;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let fragment = history().current_route();

    // The route table decides matching. A fragment it accepts under looser
    // spelling (case, trailing slash) is redirected to the declared path.
    use_effect(use_reactive((&fragment,), |(fragment,)| {
        let redirect = match &mut *NAVIGATION.write() {
            Some(nav) => match nav.table().resolve(&fragment).canonical_path() {
                Some(canonical) => Some(canonical),
                None => {
                    nav.observe(&fragment);
                    None
                }
            },
            None => None,
        };
        if let Some(canonical) = redirect {
            navigator().replace(canonical);
        }
    }));

    let path = format!("/{}", segments.join("/"));

    rsx! {
        style { {CUSTOM_STYLES} }

        div { class: "content-area",
            div { class: "header-box",
                div { class: "header-title", "Page not found" }
                div { class: "header-subtitle",
                    "Nothing is registered at "
                    span { class: "not-found-path", "#{path}" }
                }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
            }
        }
    }
}
