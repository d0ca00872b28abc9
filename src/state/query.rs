//! Search query normalization.

/// Normalized free-text query: trimmed and lowercased.
///
/// An empty query means "no filter". Unlike an active search term, an empty
/// query is a valid steady state, so construction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// The normalized needle.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test against an already-lowercased haystack.
    pub(crate) fn matches_lowercased(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_str())
    }
}
