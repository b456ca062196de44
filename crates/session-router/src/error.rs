// File: src/error.rs
// Purpose: Error types for route table construction and navigation

use thiserror::Error;

/// Errors raised while building a [`RouteTable`](crate::RouteTable)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Errors raised by programmatic navigation and URL generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No route named {0:?}")]
    UnknownRoute(String),
    #[error("Missing required param {param:?} for route {route:?}")]
    MissingParam { route: String, param: String },
    /// Target is the location the navigator is already on
    #[error("Avoided redundant navigation to current location: {0}")]
    Duplicated(String),
}
