use querygen_projection::ProjectionError;

#[test]
fn error_display_no_matching_constructor() {
    let err = ProjectionError::NoMatchingConstructor {
        target: "com.acme.Row".into(),
        signature: "(boolean)".into(),
    };
    assert_eq!(
        format!("{err}"),
        "no constructor found for com.acme.Row with parameters: (boolean)"
    );
}

#[test]
fn error_display_no_such_constructor() {
    let err = ProjectionError::NoSuchConstructor {
        target: "com.acme.Row".into(),
        signature: "(int)".into(),
    };
    assert_eq!(format!("{err}"), "com.acme.Row declares no constructor (int)");
}

#[test]
fn error_display_arity() {
    let err = ProjectionError::ArityMismatch {
        expected: 3,
        actual: 1,
    };
    assert_eq!(format!("{err}"), "argument count mismatch: expected 3, got 1");
}

#[test]
fn invocation_helper() {
    let err = ProjectionError::invocation("com.acme.Row", "bad age");
    assert_eq!(
        err,
        ProjectionError::Invocation {
            target: "com.acme.Row".into(),
            message: "bad age".into(),
        }
    );
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(ProjectionError::invocation("a", "b"));
    assert!(err.source().is_none());
}
