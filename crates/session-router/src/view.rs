use serde::{Deserialize, Serialize};
use std::fmt;

/// View component a route renders
///
/// The router only needs the identity of a view; rendering belongs to the
/// UI layer that receives the resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Landing page, served at `/`
    Home,
    /// A joined session, served at `/:sessionCode`
    Session,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("Home"),
            View::Session => f.write_str("Session"),
        }
    }
}
