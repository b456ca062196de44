use std::fmt;

/// A URL split into path, query and hash
///
/// Only `path` takes part in route matching. The query and hash are kept
/// verbatim (without their `?` / `#` markers) so the full location survives a
/// round trip through history.
///
/// # Examples
///
/// ```
/// use session_router::path::Location;
///
/// let location = Location::parse("/abc123/?name=Ada#chat");
/// assert_eq!(location.path, "/abc123");
/// assert_eq!(location.query.as_deref(), Some("name=Ada"));
/// assert_eq!(location.hash.as_deref(), Some("chat"));
/// assert_eq!(location.full_path(), "/abc123?name=Ada#chat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Normalized path, each segment percent-encoded in canonical form
    pub path: String,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl Location {
    /// Parses a URL (path plus optional `?query` and `#hash`)
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: super::canonical_path(path),
            query: query.filter(|q| !q.is_empty()),
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// Rebuilds `path[?query][#hash]`
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }

    /// Decoded `key=value` pairs of the query string, in order
    ///
    /// A key without `=` maps to an empty value; `+` decodes to a space.
    ///
    /// ```
    /// use session_router::path::Location;
    ///
    /// let location = Location::parse("/xyz?name=Ada+L&muted&room=a%26b");
    /// assert_eq!(
    ///     location.query_pairs(),
    ///     vec![
    ///         ("name".to_string(), "Ada L".to_string()),
    ///         ("muted".to_string(), String::new()),
    ///         ("room".to_string(), "a&b".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let decode = |raw: &str| {
            let spaced = raw.replace('+', " ");
            match urlencoding::decode(&spaced) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => spaced.clone(),
            }
        };

        self.query
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(pair), String::new()),
            })
            .collect()
    }

    /// First decoded value for a query key
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let location = Location::parse("/abc123");
        assert_eq!(location.path, "/abc123");
        assert_eq!(location.query, None);
        assert_eq!(location.hash, None);
    }

    #[test]
    fn test_parse_hash_before_query_marker() {
        // A '?' after '#' belongs to the fragment
        let location = Location::parse("/abc#frag?not-a-query");
        assert_eq!(location.path, "/abc");
        assert_eq!(location.query, None);
        assert_eq!(location.hash.as_deref(), Some("frag?not-a-query"));
    }

    #[test]
    fn test_parse_empty_markers() {
        let location = Location::parse("/?#");
        assert_eq!(location.path, "/");
        assert_eq!(location.query, None);
        assert_eq!(location.hash, None);
        assert_eq!(location.full_path(), "/");
    }

    #[test]
    fn test_parse_empty_url() {
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn test_query_value() {
        let location = Location::parse("/xyz?a=1&a=2&b");
        assert_eq!(location.query_value("a"), Some("1".to_string()));
        assert_eq!(location.query_value("b"), Some(String::new()));
        assert_eq!(location.query_value("c"), None);
    }
}
