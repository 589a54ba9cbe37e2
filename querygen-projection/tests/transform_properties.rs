//! Property-based tests for constructor resolution and argument transformation.

use proptest::prelude::*;
use querygen_projection::{
    ConstructorSignature, Primitive, ProjectionType, RuntimeType, Value, compatible,
    transformers_for,
};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn primitive_strategy() -> impl Strategy<Value = Primitive> {
    prop::sample::select(Primitive::ALL.to_vec())
}

fn parameter_strategy() -> impl Strategy<Value = RuntimeType> {
    prop_oneof![
        primitive_strategy().prop_map(RuntimeType::from),
        primitive_strategy().prop_map(RuntimeType::boxed),
        Just(RuntimeType::string()),
        Just(RuntimeType::object()),
    ]
}

fn signature_strategy() -> impl Strategy<Value = Vec<RuntimeType>> {
    prop::collection::vec(parameter_strategy(), 1..6)
}

// =============================================================================
// RESOLUTION PROPERTIES
// =============================================================================

mod resolution_properties {
    use super::*;

    proptest! {
        #[test]
        fn every_type_is_compatible_with_itself(param in parameter_strategy()) {
            prop_assert!(compatible(&param, &param));
        }

        #[test]
        fn sole_constructor_resolves_its_own_signature(params in signature_strategy()) {
            let projection = ProjectionType::new("com.acme.P")
                .with_constructor(params.clone(), |_| Ok(()));
            let resolution = projection.resolve(&params).unwrap();
            prop_assert_eq!(resolution.constructor_index(), 0);
            prop_assert_eq!(resolution.parameters(), &params[..]);
        }

        #[test]
        fn longer_argument_lists_never_match_fixed_constructors(
            params in signature_strategy(),
            extra in parameter_strategy(),
        ) {
            let projection = ProjectionType::new("com.acme.P")
                .with_constructor(params.clone(), |_| Ok(()));
            let mut given = params;
            given.push(extra);
            prop_assert!(projection.resolve(&given).is_err());
        }
    }
}

// =============================================================================
// TRANSFORMATION PROPERTIES
// =============================================================================

mod transformation_properties {
    use super::*;

    proptest! {
        #[test]
        fn no_null_reaches_a_primitive_parameter(params in signature_strategy()) {
            let sig = ConstructorSignature::new(params.clone());
            let out = transformers_for(&sig)
                .apply(vec![Value::Null; params.len()])
                .unwrap();
            prop_assert_eq!(out.len(), params.len());
            for (param, value) in params.iter().zip(&out) {
                prop_assert_eq!(param.is_primitive(), !value.is_null());
            }
        }

        #[test]
        fn packed_arity_equals_parameter_count(
            fixed in prop::collection::vec(Just(RuntimeType::string()), 0..4),
            tail in 0usize..6,
        ) {
            let mut params = fixed.clone();
            params.push(RuntimeType::array_of(Primitive::Int.into()));
            let sig = ConstructorSignature::variadic(params);

            let mut args: Vec<Value> = fixed.iter().map(|_| Value::from("s")).collect();
            args.extend((0..tail).map(|i| Value::Int(i as i32)));

            let out = transformers_for(&sig).apply(args).unwrap();
            prop_assert_eq!(out.len(), fixed.len() + 1);
            prop_assert_eq!(out.last().and_then(Value::as_array).map(<[Value]>::len), Some(tail));
        }
    }
}
