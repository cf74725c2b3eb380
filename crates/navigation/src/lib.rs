//! Client-side route table and hash-history navigation model
//! Framework independent: the UI crate maps `View` onto its components

mod descriptor;
mod error;
mod fragment;
mod manager;
mod options;
mod table;

pub use descriptor::{RouteDescriptor, View, ROUTES};
pub use error::{NavigationError, RouteTableError};
pub use fragment::{parse_fragment, route_from_fragment, RawLocation};
pub use manager::{ListenerId, NavigationEvent, NavigationKind, NavigationManager};
pub use options::{MatchOptions, RouterOptions};
pub use table::{Location, RouteMatch, RouteTable};
