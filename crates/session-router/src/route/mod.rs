//! Route module
//!
//! A `Route` binds a URL pattern to a named view. Matching and URL generation
//! are pure functions of the pattern.

use std::collections::HashMap;

use crate::error::NavigationError;
use crate::path::{decode_segment, encode_segment, normalize_path, segments};
use crate::View;

pub mod pattern;

pub use pattern::{classify_segment, parse_pattern, validate_pattern, PatternSegment};

/// Captured dynamic segments: param name → decoded value
pub type Params = HashMap<String, String>;

/// A single route: pattern, unique name and the view it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// URL pattern like "/:sessionCode"
    pub pattern: String,
    /// Unique name, used for programmatic navigation
    pub name: String,
    /// View rendered when this route is active
    pub view: View,
    /// Names of the dynamic params, in pattern order
    pub params: Vec<String>,
    segments: Vec<PatternSegment>,
}

impl Route {
    /// Creates a route from a pattern string
    ///
    /// # Examples
    ///
    /// ```
    /// use session_router::{Route, View};
    ///
    /// let route = Route::new("/:sessionCode", "session", View::Session);
    /// assert_eq!(route.params, vec!["sessionCode"]);
    /// ```
    pub fn new(pattern: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern);
        let params = segments
            .iter()
            .filter_map(|s| s.param_name().map(str::to_string))
            .collect();

        Route {
            pattern,
            name: name.into(),
            view,
            params,
            segments,
        }
    }

    /// Parsed pattern segments
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Whether the pattern has no dynamic segments
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path with options
    ///
    /// The path must have exactly as many segments as the pattern. Static
    /// segments compare literally (or ignoring ASCII case), dynamic segments
    /// capture the decoded path segment.
    ///
    /// ```
    /// use session_router::{Route, View};
    ///
    /// let route = Route::new("/:sessionCode", "session", View::Session);
    /// let params = route.matches_with_options("/abc123", true).unwrap();
    /// assert_eq!(params.get("sessionCode"), Some(&"abc123".to_string()));
    /// assert!(route.matches_with_options("/", true).is_none());
    /// ```
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path = normalize_path(path);
        let path_segments: Vec<&str> = segments(&path).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments)
            .try_fold(Params::new(), |mut params, (pattern_seg, path_seg)| {
                match pattern_seg {
                    PatternSegment::Static(text) => {
                        let matches = if case_insensitive {
                            text.eq_ignore_ascii_case(path_seg)
                        } else {
                            text == path_seg
                        };
                        matches.then_some(params)
                    }
                    PatternSegment::Param(name) => {
                        params.insert(name.clone(), decode_segment(path_seg).into_owned());
                        Some(params)
                    }
                }
            })
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Values are percent-encoded so each one fills exactly one segment.
    /// Params the pattern does not use are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use session_router::{Route, View};
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/:sessionCode", "session", View::Session);
    ///
    /// let mut params = HashMap::new();
    /// params.insert("sessionCode".to_string(), "xyz".to_string());
    ///
    /// assert_eq!(route.generate_url(&params).unwrap(), "/xyz");
    /// ```
    pub fn generate_url(&self, params: &Params) -> Result<String, NavigationError> {
        let parts = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegment::Static(text) => Ok(text.clone()),
                PatternSegment::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| encode_segment(value).into_owned())
                    .ok_or_else(|| NavigationError::MissingParam {
                        route: self.name.clone(),
                        param: name.clone(),
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("/{}", parts.join("/")))
    }
}
