use querygen_processor::{
    AnnotatedMember, AnnotationId, Member, MemberKind, ProcessorConfig, VisibilityPolicy,
    VisibilityPolicySelector,
};
use querygen_types::Type;
use std::cell::Cell;

const COLUMN: &str = "javax.persistence.Column";
const ID: &str = "javax.persistence.Id";
const QUERY_TYPE: &str = "com.mysema.query.annotations.QueryType";

fn entity() -> Type {
    Type::new("com.acme.Customer", "com.acme", "Customer", []).unwrap()
}

fn jpa_selector() -> VisibilityPolicySelector {
    ProcessorConfig::jpa().selector()
}

// ── Decision table ───────────────────────────────────────────────

#[test]
fn annotated_field_only_scans_fields() {
    let members = vec![
        Member::field("name").annotated(COLUMN),
        Member::method("getName"),
    ];
    assert_eq!(
        jpa_selector().select(&entity(), &members),
        VisibilityPolicy::FieldsOnly
    );
}

#[test]
fn annotated_method_only_scans_methods() {
    let members = vec![
        Member::field("name"),
        Member::method("getName").annotated(COLUMN),
    ];
    assert_eq!(
        jpa_selector().select(&entity(), &members),
        VisibilityPolicy::MethodsOnly
    );
}

#[test]
fn annotated_both_scans_all() {
    let members = vec![
        Member::field("id").annotated(ID),
        Member::method("getName").annotated(COLUMN),
    ];
    assert_eq!(jpa_selector().select(&entity(), &members), VisibilityPolicy::All);
}

#[test]
fn no_annotations_scans_all() {
    let members = vec![Member::field("name"), Member::method("getName")];
    assert_eq!(jpa_selector().select(&entity(), &members), VisibilityPolicy::All);
}

#[test]
fn no_members_scans_all() {
    let members: Vec<Member> = Vec::new();
    assert_eq!(jpa_selector().select(&entity(), &members), VisibilityPolicy::All);
}

// ── Relevance ────────────────────────────────────────────────────

#[test]
fn marker_annotation_is_relevant() {
    let members = vec![Member::method("getTotal").annotated(QUERY_TYPE)];
    assert_eq!(
        jpa_selector().select(&entity(), &members),
        VisibilityPolicy::MethodsOnly
    );
}

#[test]
fn unrelated_annotations_are_ignored() {
    let members = vec![
        Member::field("name").annotated("javax.annotation.Nullable"),
        Member::method("getName").annotated(COLUMN),
    ];
    assert_eq!(
        jpa_selector().select(&entity(), &members),
        VisibilityPolicy::MethodsOnly
    );
}

#[test]
fn constructors_and_other_members_are_ignored() {
    let mut other = Member::field("Inner").annotated(COLUMN);
    other.kind = MemberKind::Other;
    let members = vec![Member::constructor("<init>").annotated(COLUMN), other];
    assert_eq!(jpa_selector().select(&entity(), &members), VisibilityPolicy::All);
}

#[test]
fn querydsl_preset_ignores_jpa_mapping() {
    let selector = ProcessorConfig::querydsl().selector();
    let members = vec![Member::field("name").annotated(COLUMN)];
    assert_eq!(selector.select(&entity(), &members), VisibilityPolicy::All);
}

#[test]
fn is_relevant_checks_any_configured_annotation() {
    let selector = VisibilityPolicySelector::new([ID, COLUMN]);
    assert!(selector.is_relevant(&Member::field("a").annotated(COLUMN)));
    assert!(!selector.is_relevant(&Member::field("a")));
}

// ── Short-circuiting ─────────────────────────────────────────────

/// Member that counts how often it is asked about annotations.
struct CountingMember {
    kind: MemberKind,
    annotation: Option<AnnotationId>,
    probes: Cell<usize>,
}

impl CountingMember {
    fn new(kind: MemberKind, annotation: Option<&str>) -> Self {
        Self {
            kind,
            annotation: annotation.map(AnnotationId::from),
            probes: Cell::new(0),
        }
    }
}

impl AnnotatedMember for CountingMember {
    fn kind(&self) -> MemberKind {
        self.kind
    }

    fn has_annotation(&self, annotation: &AnnotationId) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.annotation.as_ref() == Some(annotation)
    }
}

#[test]
fn later_fields_not_probed_once_a_field_is_relevant() {
    let selector = VisibilityPolicySelector::new([ID, COLUMN]);
    let members = vec![
        CountingMember::new(MemberKind::Field, Some(ID)),
        CountingMember::new(MemberKind::Field, Some(COLUMN)),
        CountingMember::new(MemberKind::Method, None),
    ];
    assert_eq!(selector.select(&entity(), &members), VisibilityPolicy::FieldsOnly);
    // First match wins: only the first configured annotation was probed.
    assert_eq!(members[0].probes.get(), 1);
    assert_eq!(members[1].probes.get(), 0);
    assert_eq!(members[2].probes.get(), 2);
}

#[test]
fn works_with_member_references() {
    let owned = [
        Member::field("name"),
        Member::method("getName").annotated(ID),
    ];
    let borrowed: Vec<&Member> = owned.iter().collect();
    assert_eq!(
        jpa_selector().select(&entity(), &borrowed),
        VisibilityPolicy::MethodsOnly
    );
}
