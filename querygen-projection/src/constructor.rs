//! Projection targets and their declared constructors.

use crate::error::{ProjectionError, ProjectionResult};
use crate::resolver::{self, Resolution};
use crate::runtime_type::{RuntimeType, format_signature};
use crate::transform::transformers_for;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Function that builds a projection from a fully transformed argument array.
pub type Invoker<T> = Arc<dyn Fn(Vec<Value>) -> ProjectionResult<T> + Send + Sync>;

/// Parameter types of one constructor, and whether the last one is variadic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorSignature {
    parameters: Vec<RuntimeType>,
    varargs: bool,
}

impl ConstructorSignature {
    pub fn new(parameters: Vec<RuntimeType>) -> Self {
        Self {
            parameters,
            varargs: false,
        }
    }

    /// A signature whose last parameter accepts a variable-length tail.
    ///
    /// The last parameter should be an array type; its component is the
    /// element type of the tail. An empty parameter list cannot be variadic.
    pub fn variadic(parameters: Vec<RuntimeType>) -> Self {
        let varargs = !parameters.is_empty();
        Self {
            parameters,
            varargs,
        }
    }

    pub fn parameters(&self) -> &[RuntimeType] {
        &self.parameters
    }

    pub fn is_varargs(&self) -> bool {
        self.varargs
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Element type of the variadic tail.
    pub fn varargs_component(&self) -> Option<&RuntimeType> {
        if !self.varargs {
            return None;
        }
        self.parameters
            .last()
            .map(|last| last.component_type().unwrap_or(last))
    }
}

impl fmt::Display for ConstructorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format_signature(&self.parameters);
        match rendered.strip_suffix("[])").filter(|_| self.varargs) {
            Some(head) => write!(f, "{head}...)"),
            None => f.write_str(&rendered),
        }
    }
}

/// A declared constructor: its signature plus the function that runs it.
pub struct Constructor<T> {
    signature: ConstructorSignature,
    invoker: Invoker<T>,
}

impl<T> Constructor<T> {
    pub fn new(signature: ConstructorSignature, invoker: Invoker<T>) -> Self {
        Self { signature, invoker }
    }

    pub fn signature(&self) -> &ConstructorSignature {
        &self.signature
    }

    /// Runs the constructor on an already transformed argument array.
    pub fn invoke(&self, args: Vec<Value>) -> ProjectionResult<T> {
        (self.invoker)(args)
    }
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            invoker: Arc::clone(&self.invoker),
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A projection target type and its constructors in declaration order.
///
/// Declaration order matters: resolution takes the first constructor that
/// fits, not the most specific one.
pub struct ProjectionType<T> {
    name: String,
    constructors: Vec<Constructor<T>>,
}

impl<T> ProjectionType<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
        }
    }

    /// Declares a constructor with fixed parameters.
    #[must_use]
    pub fn with_constructor<F>(self, parameters: Vec<RuntimeType>, invoker: F) -> Self
    where
        F: Fn(Vec<Value>) -> ProjectionResult<T> + Send + Sync + 'static,
    {
        self.with(ConstructorSignature::new(parameters), invoker)
    }

    /// Declares a constructor whose last parameter is variadic.
    #[must_use]
    pub fn with_varargs_constructor<F>(self, parameters: Vec<RuntimeType>, invoker: F) -> Self
    where
        F: Fn(Vec<Value>) -> ProjectionResult<T> + Send + Sync + 'static,
    {
        self.with(ConstructorSignature::variadic(parameters), invoker)
    }

    fn with<F>(mut self, signature: ConstructorSignature, invoker: F) -> Self
    where
        F: Fn(Vec<Value>) -> ProjectionResult<T> + Send + Sync + 'static,
    {
        self.constructors
            .push(Constructor::new(signature, Arc::new(invoker)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructors(&self) -> &[Constructor<T>] {
        &self.constructors
    }

    pub fn signatures(&self) -> impl Iterator<Item = &ConstructorSignature> {
        self.constructors.iter().map(Constructor::signature)
    }

    /// Returns the constructor declaring exactly `parameters`.
    pub fn constructor(&self, parameters: &[RuntimeType]) -> ProjectionResult<&Constructor<T>> {
        self.constructors
            .iter()
            .find(|c| c.signature.parameters() == parameters)
            .ok_or_else(|| ProjectionError::NoSuchConstructor {
                target: self.name.clone(),
                signature: format_signature(parameters),
            })
    }

    /// Parameter list of the first constructor compatible with `given`.
    pub fn constructor_parameters(&self, given: &[RuntimeType]) -> ProjectionResult<&[RuntimeType]> {
        resolver::constructor_parameters(&self.name, self.signatures(), given)
    }

    /// Resolves the constructor for `given` and its argument transformers.
    pub fn resolve(&self, given: &[RuntimeType]) -> ProjectionResult<Resolution> {
        let (index, parameters) = resolver::find_match(self.signatures(), given)
            .ok_or_else(|| resolver::no_match(&self.name, given))?;
        let signature = self.constructors[index].signature();
        let transformers = transformers_for(signature);
        debug!(
            target_type = %self.name,
            signature = %signature,
            transformers = transformers.len(),
            "Resolved projection constructor"
        );
        Ok(Resolution::new(index, parameters.to_vec(), transformers))
    }

    /// Transforms `args` through the resolution's pipeline and invokes its constructor.
    pub fn new_instance(&self, resolution: &Resolution, args: Vec<Value>) -> ProjectionResult<T> {
        let constructor = self
            .constructors
            .get(resolution.constructor_index())
            .ok_or_else(|| ProjectionError::NoSuchConstructor {
                target: self.name.clone(),
                signature: format_signature(resolution.parameters()),
            })?;
        let args = resolution.transformers().apply(args)?;
        // Invokers index the array positionally; only a full-arity array reaches them.
        let expected = constructor.signature().len();
        if args.len() != expected {
            return Err(ProjectionError::ArityMismatch {
                expected,
                actual: args.len(),
            });
        }
        constructor.invoke(args)
    }
}

impl<T> fmt::Debug for ProjectionType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectionType")
            .field("name", &self.name)
            .field("constructors", &self.constructors)
            .finish()
    }
}
