//! UI Components

mod app;
mod not_found;
mod pages;
mod view_header;

pub use app::{App, Layout};
pub use not_found::NotFound;
pub use pages::{ColorHistogram, Home, ImageSimilarity, IoU};
pub use view_header::ViewHeader;
