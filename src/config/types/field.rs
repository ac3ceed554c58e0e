//! Config field path.

/// Dotted path of a `publish.toml` field, e.g. `remote.branch`.
///
/// Sections expose these as associated constants so diagnostics never
/// spell field names by hand:
///
/// ```ignore
/// diag.error(RemoteConfig::BRANCH, "invalid branch name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
