//! URL fragment parsing for hash-based history

/// A location split into its parts, before any route matching.
/// Query keys, values and the hash are stored decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLocation {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl RawLocation {
    /// Rebuild `path?query#hash`, percent-encoding query and hash
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if !self.query.is_empty() {
            out.push('?');
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        urlencoding::encode(k).into_owned()
                    } else {
                        format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
                    }
                })
                .collect();
            out.push_str(&pairs.join("&"));
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(&urlencoding::encode(hash));
        }
        out
    }
}

/// Parse a full URL, a `#...` fragment or a bare path into a `RawLocation`.
///
/// Anything up to and including the first `#` is dropped. The remaining text
/// is split into path, query and an optional in-page hash. An empty path
/// becomes `/` and a missing leading slash is added.
pub fn parse_fragment(raw: &str) -> RawLocation {
    let (before_hash, hash) = match strip_document(raw).split_once('#') {
        Some((before, hash)) => (before, Some(decode(hash))),
        None => (strip_document(raw), None),
    };

    let (path, query) = match before_hash.split_once('?') {
        Some((path, query)) => (path, parse_query(query)),
        None => (before_hash, Vec::new()),
    };

    RawLocation {
        path: with_leading_slash(path),
        query,
        hash,
    }
}

/// Router path for a fragment: the text after `#`, query and hash kept as-is
pub fn route_from_fragment(raw: &str) -> String {
    with_leading_slash(strip_document(raw))
}

fn strip_document(raw: &str) -> &str {
    match raw.split_once('#') {
        Some((_, rest)) => rest,
        None => raw,
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_query(k), decode_query(v)),
            None => (decode_query(pair), String::new()),
        })
        .collect()
}

// `+` is a space in query strings
fn decode_query(text: &str) -> String {
    decode(&text.replace('+', " "))
}

fn decode(text: &str) -> String {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| text.to_string())
}
