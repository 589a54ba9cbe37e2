//! Member visibility policy: which member kinds the metamodel builder scans.

use crate::member::{AnnotatedMember, AnnotationId, MemberKind};
use querygen_types::Type;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which member kinds to scan when building a class's query type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    FieldsOnly,
    MethodsOnly,
    All,
}

impl VisibilityPolicy {
    pub fn scans_fields(&self) -> bool {
        matches!(self, Self::FieldsOnly | Self::All)
    }

    pub fn scans_methods(&self) -> bool {
        matches!(self, Self::MethodsOnly | Self::All)
    }
}

/// Chooses a [`VisibilityPolicy`] from where mapping annotations are placed.
///
/// A class that annotates only fields is scanned by field, one that
/// annotates only accessor methods is scanned by method. Mixed placement,
/// or no relevant annotation at all, scans both.
#[derive(Debug, Clone)]
pub struct VisibilityPolicySelector {
    relevant: Vec<AnnotationId>,
}

impl VisibilityPolicySelector {
    /// Creates a selector for an ordered set of relevant annotations.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new<I>(relevant: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnnotationId>,
    {
        let mut ordered: Vec<AnnotationId> = Vec::new();
        for annotation in relevant {
            let annotation = annotation.into();
            if !ordered.contains(&annotation) {
                ordered.push(annotation);
            }
        }
        Self { relevant: ordered }
    }

    pub fn relevant_annotations(&self) -> &[AnnotationId] {
        &self.relevant
    }

    /// Returns true if `member` carries any relevant annotation.
    pub fn is_relevant<M: AnnotatedMember + ?Sized>(&self, member: &M) -> bool {
        self.relevant.iter().any(|a| member.has_annotation(a))
    }

    /// Decides the policy for `class` given its declared members.
    pub fn select<M: AnnotatedMember>(&self, class: &Type, members: &[M]) -> VisibilityPolicy {
        let mut fields = false;
        let mut methods = false;
        for member in members {
            match member.kind() {
                MemberKind::Field if !fields => fields = self.is_relevant(member),
                MemberKind::Method if !methods => methods = self.is_relevant(member),
                _ => {}
            }
            if fields && methods {
                break;
            }
        }

        let policy = match (fields, methods) {
            (true, false) => VisibilityPolicy::FieldsOnly,
            (false, true) => VisibilityPolicy::MethodsOnly,
            _ => VisibilityPolicy::All,
        };
        debug!(class = %class.full_name(), ?policy, fields, methods, "Selected member visibility");
        policy
    }
}
