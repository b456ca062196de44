//! # Session Router
//!
//! Client-side routing for the session app:
//! - `/` renders the Home view (route `home`)
//! - `/:sessionCode` renders the Session view (route `session`), capturing
//!   any single non-empty path segment as `sessionCode`
//!
//! The [`RouteTable`] is an immutable value built once at startup and
//! shared by reference. A [`Navigator`] owns a [`History`] backend, resolves
//! its current location and performs push / replace / back / forward
//! navigation without reloading anything.
//!
//! ## Path Normalization
//!
//! - Query and hash never take part in matching: `/abc?x=1#y` → `/abc`
//! - Trailing slashes: `/abc/` → `/abc`
//! - Double slashes and backslashes collapse: `//abc` → `/abc`
//! - Captured segments are percent-decoded: `/caf%C3%A9` → `café`
//!
//! ## Unmatched URLs
//!
//! No catch-all route is declared. A URL with more than one segment (such as
//! `/abc/def`) resolves to [`Resolution::Unmatched`]; the navigator still
//! records it in history and the rendering layer shows nothing.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use session_router::{MemoryHistory, NavigationTarget, Navigator, RouteTable};
//!
//! let table = Arc::new(RouteTable::app());
//! assert_eq!(table.resolve("/").name(), Some("home"));
//!
//! let mut navigator = Navigator::new(table, MemoryHistory::new());
//! navigator.push(NavigationTarget::session("xyz")).unwrap();
//! assert_eq!(navigator.current().full_path(), "/xyz");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
mod history;
mod navigator;
pub mod path;
pub mod route;
mod table;
mod view;

pub use config::{RouteConfig, RouterConfig};
pub use error::{NavigationError, RouteTableError};
pub use history::{History, HistoryEntry, HistoryState, MemoryHistory, NavigationType};
pub use navigator::{NavigationTarget, Navigator, ResolvedRoute};
pub use path::Location;
pub use route::{Params, PatternSegment, Route};
pub use table::{app_routes, Resolution, RouteMatch, RouteTable, HOME, SESSION, SESSION_CODE};
pub use view::View;
