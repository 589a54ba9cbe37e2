use pretty_assertions::assert_eq;
use querygen_projection::{
    NO_ARGS, Primitive, ProjectionError, ProjectionType, RuntimeType, Value,
    constructor_parameters,
};

#[derive(Debug, Clone, PartialEq)]
enum Built {
    Empty,
    Count(i32),
    Named(String, i32),
    Tagged(String, Vec<i32>),
}

fn int() -> RuntimeType {
    Primitive::Int.into()
}

fn string() -> RuntimeType {
    RuntimeType::string()
}

fn name_of(args: &[Value]) -> String {
    args[0].as_str().unwrap_or_default().to_string()
}

fn overloaded() -> ProjectionType<Built> {
    ProjectionType::new("com.acme.CustomerSummary")
        .with_constructor(vec![], |_| Ok(Built::Empty))
        .with_constructor(vec![int()], |args| {
            Ok(Built::Count(args[0].as_i32().unwrap_or_default()))
        })
        .with_constructor(vec![string(), int()], |args| {
            Ok(Built::Named(name_of(&args), args[1].as_i32().unwrap_or_default()))
        })
}

fn tagged() -> ProjectionType<Built> {
    ProjectionType::new("com.acme.Tagged").with_varargs_constructor(
        vec![string(), RuntimeType::array_of(int())],
        |args| {
            let tags = args[1]
                .as_array()
                .unwrap_or_default()
                .iter()
                .filter_map(Value::as_i32)
                .collect();
            Ok(Built::Tagged(name_of(&args), tags))
        },
    )
}

// ── Fixed-arity resolution ───────────────────────────────────────

#[test]
fn picks_constructor_matching_argument_types() {
    let projection = overloaded();
    let params = projection.constructor_parameters(&[string(), int()]).unwrap();
    assert_eq!(params, &[string(), int()][..]);

    let resolution = projection.resolve(&[string(), int()]).unwrap();
    assert_eq!(resolution.constructor_index(), 2);
    let built = projection
        .new_instance(&resolution, vec!["alice".into(), 3.into()])
        .unwrap();
    assert_eq!(built, Built::Named("alice".into(), 3));
}

#[test]
fn boxed_argument_matches_primitive_parameter() {
    let projection = overloaded();
    let resolution = projection
        .resolve(&[RuntimeType::boxed(Primitive::Int)])
        .unwrap();
    assert_eq!(resolution.constructor_index(), 1);
}

#[test]
fn zero_arguments_select_no_arg_constructor() {
    let projection = overloaded();
    let params = projection.constructor_parameters(&[]).unwrap();
    assert_eq!(params, NO_ARGS);

    let resolution = projection.resolve(&[]).unwrap();
    assert_eq!(resolution.constructor_index(), 0);
    assert!(resolution.transformers().is_empty());
    assert_eq!(projection.new_instance(&resolution, vec![]).unwrap(), Built::Empty);
}

#[test]
fn zero_arguments_without_no_arg_constructor_fail() {
    let err = tagged().resolve(&[]).unwrap_err();
    assert!(matches!(err, ProjectionError::NoMatchingConstructor { .. }));
}

#[test]
fn unmatched_signature_reports_types() {
    let err = overloaded()
        .constructor_parameters(&[Primitive::Boolean.into()])
        .unwrap_err();
    assert_eq!(
        err,
        ProjectionError::NoMatchingConstructor {
            target: "com.acme.CustomerSummary".into(),
            signature: "(boolean)".into(),
        }
    );
    assert!(err.to_string().contains("(boolean)"));
}

#[test]
fn string_does_not_match_int_only_target() {
    let projection =
        ProjectionType::new("com.acme.Counter").with_constructor(vec![int()], |_| Ok(Built::Empty));
    let err = projection.resolve(&[string()]).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::NoMatchingConstructor {
            target: "com.acme.Counter".into(),
            signature: "(java.lang.String)".into(),
        }
    );
}

#[test]
fn first_declared_candidate_wins() {
    let projection = ProjectionType::new("com.acme.Ambiguous")
        .with_constructor(vec![RuntimeType::object()], |_| Ok("object"))
        .with_constructor(vec![string()], |_| Ok("string"));
    let resolution = projection.resolve(&[string()]).unwrap();
    assert_eq!(resolution.constructor_index(), 0);
    assert_eq!(
        projection.new_instance(&resolution, vec!["x".into()]).unwrap(),
        "object"
    );
}

#[test]
fn free_function_resolves_over_signatures() {
    let projection = overloaded();
    let params =
        constructor_parameters("com.acme.CustomerSummary", projection.signatures(), &[int()])
            .unwrap();
    assert_eq!(params, &[int()][..]);
}

// ── Variadic resolution ──────────────────────────────────────────

#[test]
fn variadic_accepts_fixed_arguments_only() {
    let projection = tagged();
    let params = projection.constructor_parameters(&[string()]).unwrap();
    assert_eq!(params, &[string(), RuntimeType::array_of(int())][..]);

    let resolution = projection.resolve(&[string()]).unwrap();
    let built = projection
        .new_instance(&resolution, vec!["s".into()])
        .unwrap();
    assert_eq!(built, Built::Tagged("s".into(), vec![]));
}

#[test]
fn variadic_packs_trailing_arguments() {
    let projection = tagged();
    let resolution = projection.resolve(&[string(), int(), int()]).unwrap();
    assert_eq!(resolution.transformers().names(), vec!["varargs"]);

    let packed = resolution
        .transformers()
        .apply(vec!["s".into(), 1.into(), 2.into()])
        .unwrap();
    assert_eq!(
        packed,
        vec![
            Value::from("s"),
            Value::array(int(), vec![Value::Int(1), Value::Int(2)]),
        ]
    );

    let built = projection
        .new_instance(&resolution, vec!["s".into(), 1.into(), 2.into()])
        .unwrap();
    assert_eq!(built, Built::Tagged("s".into(), vec![1, 2]));
}

#[test]
fn variadic_accepts_an_array_argument() {
    let projection = tagged();
    assert!(
        projection
            .resolve(&[string(), RuntimeType::array_of(int())])
            .is_ok()
    );
}

#[test]
fn variadic_rejects_mismatched_tail() {
    let err = tagged().resolve(&[string(), int(), string()]).unwrap_err();
    assert!(matches!(err, ProjectionError::NoMatchingConstructor { .. }));
}

#[test]
fn fixed_constructor_rejects_extra_arguments() {
    let err = overloaded()
        .resolve(&[string(), int(), int()])
        .unwrap_err();
    assert!(matches!(err, ProjectionError::NoMatchingConstructor { .. }));
}

// ── Exact lookup ─────────────────────────────────────────────────

#[test]
fn exact_lookup_by_declared_parameters() {
    let projection = overloaded();
    let constructor = projection.constructor(&[string(), int()]).unwrap();
    assert_eq!(constructor.signature().to_string(), "(java.lang.String, int)");
    assert_eq!(
        constructor.invoke(vec!["bob".into(), 7.into()]).unwrap(),
        Built::Named("bob".into(), 7)
    );
}

#[test]
fn exact_lookup_does_not_box() {
    let err = overloaded()
        .constructor(&[RuntimeType::boxed(Primitive::Int)])
        .unwrap_err();
    assert!(matches!(err, ProjectionError::NoSuchConstructor { .. }));
}

#[test]
fn variadic_signature_display() {
    let projection = tagged();
    let signature = projection.signatures().next().unwrap();
    assert_eq!(signature.to_string(), "(java.lang.String, int...)");
}
