// File: src/table.rs
// Purpose: The ordered route table, URL resolution and reverse lookup

use std::collections::HashSet;

use crate::error::{NavigationError, RouteTableError};
use crate::path::Location;
use crate::route::{validate_pattern, Params, Route};
use crate::View;

/// Name of the landing route (`/`)
pub const HOME: &str = "home";
/// Name of the session route (`/:sessionCode`)
pub const SESSION: &str = "session";
/// Param captured by the session route
pub const SESSION_CODE: &str = "sessionCode";

/// A route selected for a path, together with its captured params
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Extracted parameters from the path
    pub params: Params,
}

impl RouteMatch {
    /// Captured value of a param
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Outcome of resolving a URL against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A route matched
    Matched(RouteMatch),
    /// No declared route matches `path`; nothing is rendered
    Unmatched { path: String },
}

impl Resolution {
    /// The matched route, if any
    pub fn route_match(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::Unmatched { .. } => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// Name of the matched route
    pub fn name(&self) -> Option<&str> {
        self.route_match().map(|m| m.route.name.as_str())
    }

    /// View to render, `None` when unmatched
    pub fn view(&self) -> Option<View> {
        self.route_match().map(|m| m.route.view)
    }

    /// Captured value of a param on the matched route
    pub fn param(&self, name: &str) -> Option<&str> {
        self.route_match().and_then(|m| m.param(name))
    }
}

/// Ordered, immutable collection of routes
///
/// Built once at startup and shared by reference. The first route whose
/// pattern matches a path wins.
///
/// # Examples
///
/// ```
/// use session_router::{RouteTable, View};
///
/// let table = RouteTable::app();
///
/// let resolution = table.resolve("/abc123");
/// assert_eq!(resolution.name(), Some("session"));
/// assert_eq!(resolution.view(), Some(View::Session));
/// assert_eq!(resolution.param("sessionCode"), Some("abc123"));
///
/// assert!(!table.resolve("/abc/def").is_matched());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    case_insensitive: bool,
}

impl RouteTable {
    /// Builds a table, checking patterns and name uniqueness
    pub fn new<I>(routes: I, case_insensitive: bool) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = Route>,
    {
        let routes: Vec<Route> = routes.into_iter().collect();
        let mut seen = HashSet::new();

        for route in &routes {
            validate_pattern(&route.pattern).map_err(|reason| {
                RouteTableError::InvalidPattern {
                    pattern: route.pattern.clone(),
                    reason,
                }
            })?;

            if !seen.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        tracing::debug!(routes = routes.len(), case_insensitive, "Route table built");

        Ok(Self {
            routes,
            case_insensitive,
        })
    }

    /// The application's routes: `/` → Home, `/:sessionCode` → Session
    pub fn app() -> Self {
        Self {
            routes: app_routes(),
            case_insensitive: true,
        }
    }

    /// Routes in matching order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Gets a route by its name
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolves a URL to a route
    ///
    /// Query and hash are ignored; the path is normalized before matching.
    pub fn resolve(&self, url: &str) -> Resolution {
        self.resolve_location(&Location::parse(url))
    }

    /// Resolves an already parsed location
    pub fn resolve_location(&self, location: &Location) -> Resolution {
        let path = location.path.as_str();

        let found = self.routes.iter().find_map(|route| {
            route
                .matches_with_options(path, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                })
        });

        match found {
            Some(route_match) => {
                tracing::debug!(path, route = %route_match.route.name, "Resolved route");
                Resolution::Matched(route_match)
            }
            None => {
                tracing::warn!(path, "No route matches path");
                Resolution::Unmatched {
                    path: path.to_string(),
                }
            }
        }
    }

    /// Generates the URL of a named route
    ///
    /// ```
    /// use session_router::RouteTable;
    /// use std::collections::HashMap;
    ///
    /// let table = RouteTable::app();
    /// let params = HashMap::from([("sessionCode".to_string(), "xyz".to_string())]);
    /// assert_eq!(table.url_for("session", &params).unwrap(), "/xyz");
    /// assert_eq!(table.url_for("home", &HashMap::new()).unwrap(), "/");
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let route = self
            .route_by_name(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        let unused: Vec<&String> = params
            .keys()
            .filter(|key| !route.params.contains(*key))
            .collect();
        if !unused.is_empty() {
            tracing::debug!(route = name, ?unused, "Discarding params the route does not declare");
        }

        route.generate_url(params)
    }

    /// Convenience form of [`url_for`](Self::url_for) taking param tuples
    pub fn url_for_params(
        &self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<String, NavigationError> {
        let param_map: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app()
    }
}

/// The static route list the application is built from
pub fn app_routes() -> Vec<Route> {
    vec![
        Route::new("/", HOME, View::Home),
        Route::new(format!("/:{}", SESSION_CODE), SESSION, View::Session),
    ]
}
