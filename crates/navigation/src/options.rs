//! Router configuration

/// How route paths are compared against a location
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// When false, a single trailing slash is ignored
    pub strict: bool,
    /// When false, paths compare ASCII case-insensitively
    pub sensitive: bool,
}

impl MatchOptions {
    /// Normalize a path for comparison
    pub fn normalize(&self, path: &str) -> String {
        let trimmed = if !self.strict && path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        if self.sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_ascii_lowercase()
        }
    }
}

/// Configuration for the navigation manager
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterOptions {
    pub base: String,
    pub match_options: MatchOptions,
    pub scroll_restoration: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            base: String::new(),
            match_options: MatchOptions::default(),
            scroll_restoration: true,
        }
    }
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document path placed in front of the `#` in generated links
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        // a base that already carries a fragment keeps only the part before it
        self.base = match base.split_once('#') {
            Some((before, _)) => before.to_string(),
            None => base,
        };
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.match_options.strict = strict;
        self
    }

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.match_options.sensitive = sensitive;
        self
    }

    pub fn with_scroll_restoration(mut self, enabled: bool) -> Self {
        self.scroll_restoration = enabled;
        self
    }

    /// Link target for a path under hash history
    pub fn href(&self, path: &str) -> String {
        format!("{}#{}", self.base, path)
    }
}
