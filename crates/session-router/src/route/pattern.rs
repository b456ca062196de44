//! Pattern parsing for route segments
//!
//! Pure functional parsing of route patterns such as `/:sessionCode` into typed segments.

/// A single segment of a route pattern
///
/// # Examples
///
/// ```
/// use session_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("about"), PatternSegment::Static("about".to_string()));
/// assert_eq!(
///     classify_segment(":sessionCode"),
///     PatternSegment::Param("sessionCode".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text that must appear in the path
    Static(String),
    /// Dynamic segment `:name`, captures exactly one non-empty path segment
    Param(String),
}

impl PatternSegment {
    /// Parameter name for dynamic segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param(name) => Some(name),
            PatternSegment::Static(_) => None,
        }
    }
}

/// Classifies a segment into a pattern segment (pure function)
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Param(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parses a full pattern into its segments
///
/// The root pattern `/` has no segments.
///
/// ```
/// use session_router::route::pattern::{parse_pattern, PatternSegment};
///
/// assert!(parse_pattern("/").is_empty());
/// assert_eq!(
///     parse_pattern("/join/:sessionCode"),
///     vec![
///         PatternSegment::Static("join".to_string()),
///         PatternSegment::Param("sessionCode".to_string()),
///     ]
/// );
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<PatternSegment> {
    crate::path::segments(pattern).map(classify_segment).collect()
}

/// Checks a pattern is well-formed, returning the reason it is not
///
/// A pattern must start with `/`, every `:param` needs a name, and a param
/// name may appear only once.
pub fn validate_pattern(pattern: &str) -> Result<(), String> {
    if !pattern.starts_with('/') {
        return Err("pattern must start with '/'".to_string());
    }

    let segments = parse_pattern(pattern);
    let names: Vec<&str> = segments.iter().filter_map(|s| s.param_name()).collect();

    if names.iter().any(|name| name.is_empty()) {
        return Err("dynamic segment is missing a name".to_string());
    }

    let duplicate = names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].contains(*name));
    if let Some((_, name)) = duplicate {
        return Err(format!("param :{} appears more than once", name));
    }

    Ok(())
}
