//! Descriptive package metadata for manifest generation

/// Metadata describing the package a manifest represents.
///
/// Immutable once constructed and passed by value into the generator.
/// Name defaulting (to the scan-root directory name) is the caller's
/// concern; by the time a `PackageMetadata` exists, all three fields are
/// settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    name: String,
    version: String,
    supplier: String,
}

impl PackageMetadata {
    /// Bundle up the three mandatory fields.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            supplier: supplier.into(),
        }
    }

    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Package supplier.
    pub fn supplier(&self) -> &str {
        &self.supplier
    }
}
