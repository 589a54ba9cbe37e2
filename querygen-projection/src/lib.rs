//! Constructor-based projections for querygen.
//!
//! A projection target declares its constructors against an explicit
//! [`RuntimeType`] model. Given the types of a query's projected columns,
//! [`ProjectionType::resolve`] picks the first compatible constructor and
//! builds the [`TransformerChain`] that reshapes each raw row before the
//! constructor runs: variadic tails are packed into an array, then nulls bound
//! for primitive parameters become that primitive's zero value.
//!
//! [`ProjectionFactory`] caches resolutions per argument signature and
//! [`Projections`] streams rows through a resolved constructor.

mod constructor;
mod error;
mod factory;
mod iter;
mod resolver;
mod runtime_type;
mod transform;
mod value;

pub use constructor::{Constructor, ConstructorSignature, Invoker, ProjectionType};
pub use error::{ProjectionError, ProjectionResult};
pub use factory::{Binding, ProjectionFactory};
pub use iter::{CloseableIterator, Projections};
pub use resolver::{NO_ARGS, Resolution, compatible, constructor_parameters};
pub use runtime_type::{ClassType, OBJECT, Primitive, RuntimeType, format_signature};
pub use transform::{
    ArgumentTransformer, NullSafePrimitiveTransformer, TransformerChain, VarArgsTransformer,
    transformers_for,
};
pub use value::Value;
