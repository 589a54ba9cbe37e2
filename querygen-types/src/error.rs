//! Error types for descriptor construction.

use thiserror::Error;

/// Result type for descriptor operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors raised while building a type descriptor.
///
/// These indicate a programming error in whoever assembled the metamodel;
/// a descriptor is never produced in a state that violates its name invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The full name is not `package_name + "." + local_name`.
    #[error("type '{full_name}' is not declared in package '{package_name}'")]
    PackageMismatch {
        full_name: String,
        package_name: String,
    },

    /// A required name component was empty.
    #[error("empty {0} name")]
    EmptyName(&'static str),
}
