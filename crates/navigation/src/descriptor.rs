//! Static route descriptors for the application views

use std::fmt;

/// The views the application can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    ImageSimilarity,
    ColorHistogram,
    IoU,
}

impl View {
    /// Human readable title used for tabs and headings
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ImageSimilarity => "Image Similarity",
            View::ColorHistogram => "Color Histogram",
            View::IoU => "IoU",
        }
    }

    /// One line summary shown on the home page
    pub fn description(&self) -> &'static str {
        match self {
            View::Home => "Overview of the available tools",
            View::ImageSimilarity => "Compare two images and score how alike they are",
            View::ColorHistogram => "Inspect the per-channel color distribution of an image",
            View::IoU => "Measure the overlap between two bounding boxes",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A static record binding a URL path to a symbolic name and a view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor<V> {
    pub path: &'static str,
    pub name: &'static str,
    pub view: V,
}

impl<V> RouteDescriptor<V> {
    pub const fn new(path: &'static str, name: &'static str, view: V) -> Self {
        Self { path, name, view }
    }
}

/// Application routes, in match order
pub const ROUTES: [RouteDescriptor<View>; 4] = [
    RouteDescriptor::new("/", "Home", View::Home),
    RouteDescriptor::new("/image-similarity", "ImageSimilarity", View::ImageSimilarity),
    RouteDescriptor::new("/color-histogram", "ColorHistogram", View::ColorHistogram),
    RouteDescriptor::new("/iou", "IoU", View::IoU),
];
