//! Argument transformers applied to a raw argument array before a
//! constructor is invoked.
//!
//! The chain order is fixed: variadic packing first, so the array has the
//! constructor's arity, then null-safe primitive substitution on the packed
//! array.

use crate::constructor::ConstructorSignature;
use crate::error::{ProjectionError, ProjectionResult};
use crate::runtime_type::{Primitive, RuntimeType};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Reshapes an argument array for one specific constructor.
///
/// Implementations are built once per constructor and hold no per-call state.
pub trait ArgumentTransformer: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this transformer has anything to do for its constructor.
    fn is_applicable(&self) -> bool;

    fn apply(&self, args: Vec<Value>) -> ProjectionResult<Vec<Value>>;
}

/// Packs trailing arguments into the array a variadic parameter expects.
#[derive(Debug, Clone)]
pub struct VarArgsTransformer {
    parameter_count: usize,
    component: Option<RuntimeType>,
}

impl VarArgsTransformer {
    pub fn new(signature: &ConstructorSignature) -> Self {
        Self {
            parameter_count: signature.len(),
            component: signature.varargs_component().cloned(),
        }
    }
}

impl ArgumentTransformer for VarArgsTransformer {
    fn name(&self) -> &'static str {
        "varargs"
    }

    fn is_applicable(&self) -> bool {
        self.component.is_some()
    }

    fn apply(&self, args: Vec<Value>) -> ProjectionResult<Vec<Value>> {
        let Some(component) = &self.component else {
            return Ok(args);
        };
        let fixed = self.parameter_count - 1;
        if args.len() < fixed {
            return Err(ProjectionError::ArityMismatch {
                expected: fixed,
                actual: args.len(),
            });
        }

        let mut args = args;
        let tail = args.split_off(fixed);
        args.push(Value::array(component.clone(), tail));
        Ok(args)
    }
}

/// Replaces nulls bound for primitive parameters with that primitive's zero.
#[derive(Debug, Clone)]
pub struct NullSafePrimitiveTransformer {
    parameter_count: usize,
    locations: Vec<(usize, Primitive)>,
}

impl NullSafePrimitiveTransformer {
    pub fn new(signature: &ConstructorSignature) -> Self {
        let locations = signature
            .parameters()
            .iter()
            .enumerate()
            .filter_map(|(location, p)| p.as_primitive().map(|kind| (location, kind)))
            .collect();
        Self {
            parameter_count: signature.len(),
            locations,
        }
    }

    pub fn locations(&self) -> &[(usize, Primitive)] {
        &self.locations
    }
}

impl ArgumentTransformer for NullSafePrimitiveTransformer {
    fn name(&self) -> &'static str {
        "null-safe-primitive"
    }

    fn is_applicable(&self) -> bool {
        !self.locations.is_empty()
    }

    fn apply(&self, mut args: Vec<Value>) -> ProjectionResult<Vec<Value>> {
        for &(location, kind) in &self.locations {
            match args.get_mut(location) {
                Some(arg) if arg.is_null() => *arg = kind.zero_value(),
                Some(_) => {}
                None => {
                    return Err(ProjectionError::ArityMismatch {
                        expected: self.parameter_count,
                        actual: args.len(),
                    });
                }
            }
        }
        Ok(args)
    }
}

/// The applicable transformers for one constructor, in application order.
#[derive(Debug, Clone, Default)]
pub struct TransformerChain {
    transformers: Vec<Arc<dyn ArgumentTransformer>>,
}

impl TransformerChain {
    /// Keeps only the applicable transformers, preserving order.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ArgumentTransformer>>,
    {
        Self {
            transformers: candidates
                .into_iter()
                .filter(|t| t.is_applicable())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    /// Feeds `args` through every transformer in order.
    pub fn apply(&self, args: Vec<Value>) -> ProjectionResult<Vec<Value>> {
        self.transformers
            .iter()
            .try_fold(args, |args, transformer| transformer.apply(args))
    }
}

/// Builds the transformer chain for a constructor.
pub fn transformers_for(signature: &ConstructorSignature) -> TransformerChain {
    TransformerChain::new([
        Arc::new(VarArgsTransformer::new(signature)) as Arc<dyn ArgumentTransformer>,
        Arc::new(NullSafePrimitiveTransformer::new(signature)),
    ])
}
