//! Path utilities for validation, normalization and segment encoding
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod location;
pub use location::Location;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use session_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/abc123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("abc123")); // Missing leading /
/// assert!(!is_valid_path("/abc123/")); // Trailing /
/// assert!(!is_valid_path("//abc123")); // Double //
/// assert!(!is_valid_path("\\abc123")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/abc/` → `/abc`
/// - Double slashes: `//abc` → `/abc`
/// - Backslashes: `\abc` → `/abc`
///
/// Percent-encoded separators (`%2F`) are left alone, so a captured segment
/// containing an encoded slash stays one segment.
///
/// # Examples
///
/// ```
/// use session_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/abc123");
/// assert!(matches!(path, Cow::Borrowed("/abc123")));
///
/// assert_eq!(normalize_path("/abc123/"), "/abc123");
/// assert_eq!(normalize_path("\\abc\\def"), "/abc/def");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Normalizes a path and re-encodes every segment to one canonical form
///
/// Two spellings of the same segment (`café`, `caf%C3%A9`) end up
/// identical, and characters an address bar cannot hold raw are escaped.
/// Encoded separators stay inside their segment. A segment that does not
/// decode to valid UTF-8 is kept as written.
///
/// ```
/// use session_router::path::canonical_path;
///
/// assert_eq!(canonical_path("/café/"), "/caf%C3%A9");
/// assert_eq!(canonical_path("/caf%c3%a9"), "/caf%C3%A9");
/// assert_eq!(canonical_path("/a b"), "/a%20b");
/// assert_eq!(canonical_path("/a%2fb"), "/a%2Fb");
/// assert_eq!(canonical_path("/abc123"), "/abc123");
/// ```
pub fn canonical_path(path: &str) -> String {
    let normalized = normalize_path(path);
    let encoded: Vec<String> = segments(&normalized)
        .map(|segment| match urlencoding::decode(segment) {
            Ok(decoded) => encode_segment(&decoded).into_owned(),
            Err(_) => segment.to_string(),
        })
        .collect();

    format!("/{}", encoded.join("/"))
}

/// Splits a normalized path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Percent-decodes a captured path segment
///
/// A segment that does not decode to valid UTF-8 is kept verbatim.
///
/// ```
/// use session_router::path::decode_segment;
///
/// assert_eq!(decode_segment("caf%C3%A9"), "café");
/// assert_eq!(decode_segment("a%2Fb"), "a/b");
/// assert_eq!(decode_segment("%FF"), "%FF");
/// ```
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(segment, error = %err, "Keeping undecodable path segment as-is");
            Cow::Borrowed(segment)
        }
    }
}

/// Percent-encodes a param value so it occupies exactly one path segment
///
/// ```
/// use session_router::path::encode_segment;
///
/// assert_eq!(encode_segment("xyz"), "xyz");
/// assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Canonical form of a history base: leading slash, no trailing slash
///
/// The root base normalizes to the empty string.
///
/// ```
/// use session_router::path::normalize_base;
///
/// assert_eq!(normalize_base("/"), "");
/// assert_eq!(normalize_base("app/"), "/app");
/// assert_eq!(normalize_base("/nested/app"), "/nested/app");
/// ```
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Removes `base` from the front of a browser URL
///
/// URLs outside the base are returned unchanged. The base only matches on a
/// segment boundary, so `/app` does not strip `/application`.
///
/// ```
/// use session_router::path::strip_base;
///
/// assert_eq!(strip_base("/app/xyz", "/app"), "/xyz");
/// assert_eq!(strip_base("/app", "/app"), "/");
/// assert_eq!(strip_base("/app?x=1", "/app"), "/?x=1");
/// assert_eq!(strip_base("/application", "/app"), "/application");
/// ```
pub fn strip_base<'a>(url: &'a str, base: &str) -> Cow<'a, str> {
    if base.is_empty() {
        return Cow::Borrowed(url);
    }

    match url.strip_prefix(base) {
        Some("") => Cow::Borrowed("/"),
        Some(rest) if rest.starts_with('/') => Cow::Borrowed(rest),
        Some(rest) if rest.starts_with('?') || rest.starts_with('#') => {
            Cow::Owned(format!("/{}", rest))
        }
        _ => Cow::Borrowed(url),
    }
}

/// Prepends `base` to an app-relative URL
///
/// ```
/// use session_router::path::join_base;
///
/// assert_eq!(join_base("/xyz", "/app"), "/app/xyz");
/// assert_eq!(join_base("/xyz", ""), "/xyz");
/// ```
pub fn join_base(url: &str, base: &str) -> String {
    format!("{}{}", base, url)
}
