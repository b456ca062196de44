// File: src/navigator.rs
// Purpose: Programmatic navigation over a route table and a history backend

use std::sync::Arc;

use crate::error::NavigationError;
use crate::history::{History, MemoryHistory, NavigationType};
use crate::path::Location;
use crate::route::Params;
use crate::table::{Resolution, RouteTable, SESSION, SESSION_CODE};
use crate::View;

/// Where to navigate: a literal URL or a named route with params
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// App-relative URL, may carry a query and hash
    Path(String),
    /// Route name plus the params its pattern needs
    Named { name: String, params: Params },
}

impl NavigationTarget {
    /// Named target without params
    pub fn named(name: impl Into<String>) -> Self {
        NavigationTarget::Named {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Named target for the session view
    ///
    /// ```
    /// use session_router::{NavigationTarget, RouteTable};
    ///
    /// let table = RouteTable::app();
    /// let target = NavigationTarget::session("xyz");
    /// assert_eq!(target.to_url(&table).unwrap(), "/xyz");
    /// ```
    pub fn session(code: impl Into<String>) -> Self {
        Self::named(SESSION).with_param(SESSION_CODE, code)
    }

    /// Adds a param (no effect on path targets)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NavigationTarget::Named { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }
        self
    }

    /// App-relative URL this target points at
    pub fn to_url(&self, table: &RouteTable) -> Result<String, NavigationError> {
        match self {
            NavigationTarget::Path(url) => Ok(url.clone()),
            NavigationTarget::Named { name, params } => table.url_for(name, params),
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(url: &str) -> Self {
        NavigationTarget::Path(url.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(url: String) -> Self {
        NavigationTarget::Path(url)
    }
}

/// A location together with what it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub location: Location,
    pub resolution: Resolution,
}

impl ResolvedRoute {
    /// Resolves a URL against a table
    pub fn resolve(table: &RouteTable, url: &str) -> Self {
        let location = Location::parse(url);
        let resolution = table.resolve_location(&location);
        Self {
            location,
            resolution,
        }
    }

    pub fn full_path(&self) -> String {
        self.location.full_path()
    }

    pub fn name(&self) -> Option<&str> {
        self.resolution.name()
    }

    pub fn view(&self) -> Option<View> {
        self.resolution.view()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.resolution.param(name)
    }

    pub fn is_matched(&self) -> bool {
        self.resolution.is_matched()
    }
}

type AfterEachHook = Box<dyn FnMut(&ResolvedRoute, &ResolvedRoute, NavigationType)>;

/// Tracks the current route and drives the history backend
///
/// The current route is always the resolution of the history's current
/// location. Unmatched URLs are committed like any other; the resolution is
/// then [`Resolution::Unmatched`] and nothing is rendered.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use session_router::{MemoryHistory, NavigationTarget, Navigator, RouteTable, View};
///
/// let mut navigator = Navigator::new(Arc::new(RouteTable::app()), MemoryHistory::new());
/// assert_eq!(navigator.current().view(), Some(View::Home));
///
/// navigator.push(NavigationTarget::session("abc123")).unwrap();
/// assert_eq!(navigator.current().param("sessionCode"), Some("abc123"));
///
/// navigator.back();
/// assert_eq!(navigator.current().name(), Some("home"));
/// ```
pub struct Navigator<H: History = MemoryHistory> {
    table: Arc<RouteTable>,
    history: H,
    current: ResolvedRoute,
    hooks: Vec<AfterEachHook>,
}

impl<H: History> Navigator<H> {
    /// Creates a navigator positioned at the history's current location
    pub fn new(table: Arc<RouteTable>, history: H) -> Self {
        let current = ResolvedRoute::resolve(&table, &history.location());
        tracing::debug!(location = %current.location, base = history.base(), "Navigator started");

        Self {
            table,
            history,
            current,
            hooks: Vec::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// The route currently displayed
    pub fn current(&self) -> &ResolvedRoute {
        &self.current
    }

    /// Resolves a target without navigating
    pub fn resolve(&self, target: &NavigationTarget) -> Result<ResolvedRoute, NavigationError> {
        let url = target.to_url(&self.table)?;
        Ok(ResolvedRoute::resolve(&self.table, &url))
    }

    /// Navigates to `target`, adding a history entry
    pub fn push(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<&ResolvedRoute, NavigationError> {
        self.navigate(target.into(), NavigationType::Push)
    }

    /// Navigates to `target`, overwriting the current history entry
    pub fn replace(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<&ResolvedRoute, NavigationError> {
        self.navigate(target.into(), NavigationType::Replace)
    }

    /// Goes one entry back; `false` if already at the oldest entry
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    /// Goes one entry forward; `false` if already at the newest entry
    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries through history and re-resolves the location
    pub fn go(&mut self, delta: isize) -> bool {
        if !self.history.go(delta) {
            tracing::debug!(delta, "History move out of range, ignored");
            return false;
        }

        let to = ResolvedRoute::resolve(&self.table, &self.history.location());
        self.commit(to, NavigationType::Pop);
        true
    }

    /// Registers a callback run after every completed navigation
    ///
    /// The callback receives the new route, the previous one and how the
    /// navigation happened.
    pub fn after_each<F>(&mut self, hook: F)
    where
        F: FnMut(&ResolvedRoute, &ResolvedRoute, NavigationType) + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    fn navigate(
        &mut self,
        target: NavigationTarget,
        nav_type: NavigationType,
    ) -> Result<&ResolvedRoute, NavigationError> {
        let to = self.resolve(&target)?;
        let full_path = to.full_path();

        if full_path == self.current.full_path() {
            tracing::debug!(path = %full_path, "Skipping navigation to current location");
            return Err(NavigationError::Duplicated(full_path));
        }

        match nav_type {
            NavigationType::Replace => self.history.replace(&full_path),
            _ => self.history.push(&full_path),
        }

        self.commit(to, nav_type);
        Ok(&self.current)
    }

    fn commit(&mut self, to: ResolvedRoute, nav_type: NavigationType) {
        let from = std::mem::replace(&mut self.current, to);

        tracing::debug!(
            from = %from.location,
            to = %self.current.location,
            route = self.current.name().unwrap_or("<unmatched>"),
            ?nav_type,
            "Navigated"
        );

        for hook in &mut self.hooks {
            hook(&self.current, &from, nav_type);
        }
    }
}
