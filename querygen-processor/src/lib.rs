//! Annotation processor support for querygen.
//!
//! The processor front end walks a domain class, hands its members to this
//! crate, and gets back the scanning policy to use when building the query
//! metamodel:
//! - [`ProcessorConfig`]: which annotations mark entities, supertypes,
//!   embeddables, projections, skipped members, and mapped properties
//! - [`VisibilityPolicySelector`]: decides whether to scan fields, methods,
//!   or both, from where the relevant annotations sit
//! - [`AnnotatedMember`]: the membership test the selector needs from a
//!   member, implemented by [`Member`] or by the front end's own types

mod config;
mod error;
mod member;
mod visibility;

pub use config::{MARKER_ANNOTATION, ProcessorConfig};
pub use error::{ConfigError, ConfigResult};
pub use member::{AnnotatedMember, AnnotationId, Member, MemberKind};
pub use visibility::{VisibilityPolicy, VisibilityPolicySelector};
