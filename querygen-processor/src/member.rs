//! Declared members of a domain class, as seen by the processor.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Fully qualified name of an annotation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name after the last `.`.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnnotationId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AnnotationId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Kind of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    Other,
}

/// A member the visibility selector can inspect.
///
/// Only two facts are needed: what kind of member it is, and whether a given
/// annotation is attached to it.
pub trait AnnotatedMember {
    fn kind(&self) -> MemberKind;

    fn has_annotation(&self, annotation: &AnnotationId) -> bool;
}

/// A plain member description for front ends without their own member type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub annotations: HashSet<AnnotationId>,
}

impl Member {
    fn new(name: &str, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotations: HashSet::new(),
        }
    }

    /// Shorthand for a field with no annotations.
    pub fn field(name: &str) -> Self {
        Self::new(name, MemberKind::Field)
    }

    /// Shorthand for a method with no annotations.
    pub fn method(name: &str) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub fn constructor(name: &str) -> Self {
        Self::new(name, MemberKind::Constructor)
    }

    /// Adds an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: impl Into<AnnotationId>) -> Self {
        self.annotations.insert(annotation.into());
        self
    }
}

impl AnnotatedMember for Member {
    fn kind(&self) -> MemberKind {
        self.kind
    }

    fn has_annotation(&self, annotation: &AnnotationId) -> bool {
        self.annotations.contains(annotation)
    }
}

impl<M: AnnotatedMember + ?Sized> AnnotatedMember for &M {
    fn kind(&self) -> MemberKind {
        (**self).kind()
    }

    fn has_annotation(&self, annotation: &AnnotationId) -> bool {
        (**self).has_annotation(annotation)
    }
}
