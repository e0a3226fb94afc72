//! Image reference resolution.

/// Turns image names from the static data into URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base: String,
}

impl ImageResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URLs and root-relative paths pass through; bare names are
    /// joined onto the asset base. Empty references have no image.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if reference.starts_with("http://")
            || reference.starts_with("https://")
            || reference.starts_with('/')
        {
            return Some(reference.to_string());
        }
        Some(format!("{}/{}", self.base, reference))
    }
}
