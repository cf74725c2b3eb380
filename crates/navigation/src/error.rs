//! Error types for route table construction and navigation

use thiserror::Error;

/// Errors raised while validating a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,
    #[error("route path `{0}` must start with '/'")]
    MissingLeadingSlash(String),
    #[error("route path `{0}` contains a dynamic segment; only static paths are supported")]
    DynamicSegment(String),
    #[error("route at index {0} has an empty name")]
    EmptyName(usize),
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),
}

/// Navigation failures reported by the navigation manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Target is the current location
    #[error("avoided redundant navigation to current location `{0}`")]
    Duplicated(String),
    #[error("no route named `{0}`")]
    UnknownName(String),
}
