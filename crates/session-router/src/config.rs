// File: src/config.rs
// Purpose: Router configuration parsing from router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::RouteTableError;
use crate::history::MemoryHistory;
use crate::route::Route;
use crate::table::{app_routes, RouteTable};
use crate::View;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Base path the app is served under (e.g., "/app")
    #[serde(default = "default_base")]
    pub base: String,

    /// Whether static segments match case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Declared routes, in matching order
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

/// One declared route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    pub name: String,
    pub view: View,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_routes() -> Vec<RouteConfig> {
    app_routes().iter().map(RouteConfig::from).collect()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            case_insensitive: true,
            routes: default_routes(),
        }
    }
}

impl From<&Route> for RouteConfig {
    fn from(route: &Route) -> Self {
        Self {
            path: route.pattern.clone(),
            name: route.name.clone(),
            view: route.view,
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "No router config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse router config: {:?}", path))
    }

    /// Load configuration from default path (./router.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("router.toml")
    }

    /// Parse configuration from TOML text; empty text yields the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RouterConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds the route table the configuration declares
    pub fn build_table(&self) -> Result<RouteTable, RouteTableError> {
        let routes = self
            .routes
            .iter()
            .map(|r| Route::new(r.path.clone(), r.name.clone(), r.view));

        RouteTable::new(routes, self.case_insensitive)
    }

    /// In-memory history rooted at the configured base
    pub fn history(&self) -> MemoryHistory {
        MemoryHistory::with_base(&self.base)
    }
}
