//! View pages: the home index and a frame for each image tool

use dioxus::prelude::*;
use navigation::{View, ROUTES};

use super::ViewHeader;
use crate::routes::Route;
use crate::state::router_options;

/// Landing page listing every tool
#[component]
pub fn Home() -> Element {
    let options = router_options();

    rsx! {
        ViewHeader { view: View::Home }
        div { class: "card-grid",
            for descriptor in ROUTES.iter().filter(|d| d.view != View::Home) {
                Link {
                    key: "{descriptor.name}",
                    to: Route::from_view(descriptor.view),
                    class: "tool-card",
                    div { class: "tool-card-title", "{descriptor.view.title()}" }
                    div { class: "tool-card-text", "{descriptor.view.description()}" }
                    div { class: "tool-card-path", "{options.href(descriptor.path)}" }
                }
            }
        }
    }
}

#[component]
pub fn ImageSimilarity() -> Element {
    rsx! {
        ViewHeader { view: View::ImageSimilarity }
    }
}

#[component]
pub fn ColorHistogram() -> Element {
    rsx! {
        ViewHeader { view: View::ColorHistogram }
    }
}

#[component]
pub fn IoU() -> Element {
    rsx! {
        ViewHeader { view: View::IoU }
    }
}
