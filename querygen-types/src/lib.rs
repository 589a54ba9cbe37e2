//! Type descriptor metamodel for querygen.
//!
//! Defines the immutable values the code generator uses to talk about the
//! types it emits query classes for:
//! - [`Type`]: a nameable type with generic parameters and cached
//!   array/component derivations
//! - [`TypeCategory`]: the semantic role a type plays in the metamodel
//! - [`ImportScope`]: the packages and classes already visible in a
//!   generated source file, used to shorten rendered names
//!
//! Descriptors are cheap to clone (reference counted) and safe to share
//! across threads.

mod category;
mod descriptor;
mod error;
mod scope;

pub use category::TypeCategory;
pub use descriptor::{ARRAY_MARKER, Type, TypeBuilder, WILDCARD};
pub use error::{TypeError, TypeResult};
pub use scope::{DEFAULT_IMPORTED_PACKAGE, ImportScope};
