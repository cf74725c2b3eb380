//! Route definitions for the application

use dioxus::prelude::*;
use navigation::View;

use crate::components::{ColorHistogram, Home, ImageSimilarity, IoU, Layout, NotFound};

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/image-similarity")]
        ImageSimilarity {},
        #[route("/color-histogram")]
        ColorHistogram {},
        #[route("/iou")]
        IoU {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The view this route renders, `None` for the not-found page
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Home {} => Some(View::Home),
            Route::ImageSimilarity {} => Some(View::ImageSimilarity),
            Route::ColorHistogram {} => Some(View::ColorHistogram),
            Route::IoU {} => Some(View::IoU),
            Route::NotFound { .. } => None,
        }
    }

    pub fn from_view(view: View) -> Self {
        match view {
            View::Home => Route::Home {},
            View::ImageSimilarity => Route::ImageSimilarity {},
            View::ColorHistogram => Route::ColorHistogram {},
            View::IoU => Route::IoU {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigation::ROUTES;
    use std::str::FromStr;

    #[test]
    fn routes_agree_with_descriptor_table() {
        for descriptor in ROUTES.iter() {
            let route = Route::from_view(descriptor.view);
            assert_eq!(route.to_string(), descriptor.path);
            assert_eq!(route.view(), Some(descriptor.view));

            let parsed = Route::from_str(descriptor.path).expect("declared path parses");
            assert_eq!(parsed, route);
        }
    }

    #[test]
    fn undeclared_path_is_not_found() {
        let parsed = Route::from_str("/unknown").expect("catch-all parses");
        assert_eq!(
            parsed,
            Route::NotFound {
                segments: vec!["unknown".to_string()]
            }
        );
        assert_eq!(parsed.view(), None);
    }
}
