//! Static asset path resolution.

/// Joins asset paths onto the site's public base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBase {
    prefix: String,
}

impl AssetBase {
    /// Creates a base from a public URL such as `/Official-DART-Website`.
    /// Trailing slashes are dropped; an empty prefix serves from the root.
    pub fn new(public_url: impl AsRef<str>) -> Self {
        Self {
            prefix: public_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// The normalised prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolves `path` against the base, ignoring any leading slashes.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }
}
