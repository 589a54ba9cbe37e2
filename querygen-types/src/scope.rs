//! Names already visible to a generated source file.

use std::collections::BTreeSet;

/// Package whose members are visible everywhere without an import.
pub const DEFAULT_IMPORTED_PACKAGE: &str = "java.lang";

/// The packages and classes a generated file can refer to by local name.
///
/// A type whose package is in `packages`, or whose full name is in
/// `classes`, renders with its local name; anything else is fully qualified
/// so generated code never picks up the wrong type on a name collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportScope {
    packages: BTreeSet<String>,
    classes: BTreeSet<String>,
}

impl ImportScope {
    /// A scope that knows nothing; every name renders fully qualified.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            packages: BTreeSet::new(),
            classes: BTreeSet::new(),
        }
    }

    /// Builds a scope from explicit package and class sets.
    pub fn from_parts<P, C>(packages: P, classes: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.insert(package.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, full_name: impl Into<String>) -> Self {
        self.classes.insert(full_name.into());
        self
    }

    /// Returns true if a type with these names may be written unqualified.
    pub fn is_visible(&self, package_name: &str, full_name: &str) -> bool {
        self.packages.contains(package_name) || self.classes.contains(full_name)
    }

    pub fn packages(&self) -> &BTreeSet<String> {
        &self.packages
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }
}

impl Default for ImportScope {
    fn default() -> Self {
        Self::empty().with_package(DEFAULT_IMPORTED_PACKAGE)
    }
}
