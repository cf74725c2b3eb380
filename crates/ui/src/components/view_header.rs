//! Page header shared by the view pages

use dioxus::prelude::*;
use navigation::View;

#[component]
pub fn ViewHeader(view: View) -> Element {
    rsx! {
        div { class: "header-box",
            div { class: "header-title", "{view.title()}" }
            div { class: "header-subtitle", "{view.description()}" }
        }
    }
}
