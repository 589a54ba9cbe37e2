//! Constructor resolution against an argument-type signature.
//!
//! Candidates are scanned in declaration order and the first one that fits
//! wins. There is no "most specific" tie-breaking: two structurally valid
//! candidates resolve to whichever was declared first.

use crate::constructor::ConstructorSignature;
use crate::error::{ProjectionError, ProjectionResult};
use crate::runtime_type::{RuntimeType, format_signature};
use crate::transform::TransformerChain;
use tracing::debug;

/// Parameter list returned for the no-argument constructor.
pub const NO_ARGS: &[RuntimeType] = &[];

/// Outcome of resolving a constructor: which one, and how to shape its arguments.
#[derive(Debug, Clone)]
pub struct Resolution {
    index: usize,
    parameters: Vec<RuntimeType>,
    transformers: TransformerChain,
}

impl Resolution {
    pub(crate) fn new(index: usize, parameters: Vec<RuntimeType>, transformers: TransformerChain) -> Self {
        Self {
            index,
            parameters,
            transformers,
        }
    }

    /// Position of the constructor in declaration order.
    pub fn constructor_index(&self) -> usize {
        self.index
    }

    pub fn parameters(&self) -> &[RuntimeType] {
        &self.parameters
    }

    pub fn transformers(&self) -> &TransformerChain {
        &self.transformers
    }
}

/// Returns true if an argument of type `argument` can be passed where
/// `parameter` is declared.
///
/// Both sides are normalised first: arrays are unwrapped to their component
/// and primitives are boxed.
pub fn compatible(parameter: &RuntimeType, argument: &RuntimeType) -> bool {
    parameter
        .normalize()
        .is_assignable_from(&argument.normalize())
}

/// Returns the parameter list of the first constructor compatible with `given`.
pub fn constructor_parameters<'a, I>(
    target: &str,
    signatures: I,
    given: &[RuntimeType],
) -> ProjectionResult<&'a [RuntimeType]>
where
    I: IntoIterator<Item = &'a ConstructorSignature>,
{
    match find_match(signatures, given) {
        Some((index, parameters)) => {
            debug!(target_type = %target, index, given = %format_signature(given), "Matched constructor");
            Ok(parameters)
        }
        None => Err(no_match(target, given)),
    }
}

pub(crate) fn find_match<'a, I>(signatures: I, given: &[RuntimeType]) -> Option<(usize, &'a [RuntimeType])>
where
    I: IntoIterator<Item = &'a ConstructorSignature>,
{
    for (index, signature) in signatures.into_iter().enumerate() {
        let parameters = signature.parameters();
        if given.is_empty() || parameters.is_empty() {
            if given.is_empty() && parameters.is_empty() {
                return Some((index, NO_ARGS));
            }
            continue;
        }
        if matches(signature, given) {
            return Some((index, parameters));
        }
    }
    None
}

pub(crate) fn no_match(target: &str, given: &[RuntimeType]) -> ProjectionError {
    let signature = format_signature(given);
    debug!(target_type = %target, given = %signature, "No matching constructor");
    ProjectionError::NoMatchingConstructor {
        target: target.to_string(),
        signature,
    }
}

// Walks parameters and arguments in step. Once parameters run out, a
// variadic constructor keeps checking arguments against its last parameter.
fn matches(signature: &ConstructorSignature, given: &[RuntimeType]) -> bool {
    let parameters = signature.parameters();
    let mut remaining = parameters.iter();
    let mut current: Option<&RuntimeType> = None;
    let mut matched = 0;

    for argument in given {
        if let Some(parameter) = remaining.next() {
            if !compatible(parameter, argument) {
                return false;
            }
            current = Some(parameter);
            matched += 1;
        } else if signature.is_varargs() {
            match current {
                Some(parameter) if compatible(parameter, argument) => {}
                _ => return false,
            }
        } else {
            return false;
        }
    }

    // A variadic constructor called with only its fixed arguments leaves the
    // trailing parameter unmatched; that is an empty tail, not a miss.
    matched == parameters.len() || (signature.is_varargs() && matched + 1 == parameters.len())
}
