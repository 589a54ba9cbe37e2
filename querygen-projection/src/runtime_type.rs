//! Explicit runtime type model used for constructor matching.
//!
//! Projection targets declare their constructors against these types up
//! front, so resolution needs no runtime introspection.

use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

pub const OBJECT: &str = "java.lang.Object";

static OBJECT_CLASS: LazyLock<Arc<ClassType>> = LazyLock::new(|| Arc::new(ClassType::new(OBJECT)));

static NUMBER_CLASS: LazyLock<Arc<ClassType>> =
    LazyLock::new(|| Arc::new(ClassType::new("java.lang.Number")));

static STRING_CLASS: LazyLock<Arc<ClassType>> =
    LazyLock::new(|| Arc::new(ClassType::new("java.lang.String")));

static BOXED: LazyLock<[Arc<ClassType>; 8]> = LazyLock::new(|| {
    let number = || vec![Arc::clone(&NUMBER_CLASS)];
    [
        Arc::new(ClassType::new("java.lang.Boolean")),
        Arc::new(ClassType::with_supertypes("java.lang.Byte", number())),
        Arc::new(ClassType::new("java.lang.Character")),
        Arc::new(ClassType::with_supertypes("java.lang.Short", number())),
        Arc::new(ClassType::with_supertypes("java.lang.Integer", number())),
        Arc::new(ClassType::with_supertypes("java.lang.Long", number())),
        Arc::new(ClassType::with_supertypes("java.lang.Float", number())),
        Arc::new(ClassType::with_supertypes("java.lang.Double", number())),
    ]
});

/// The eight primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The reference type a value of this kind boxes to.
    pub fn boxed(&self) -> Arc<ClassType> {
        Arc::clone(&BOXED[*self as usize])
    }

    /// Value substituted when a null reaches a parameter of this kind.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Boolean => Value::Boolean(false),
            Self::Byte => Value::Byte(0),
            Self::Char => Value::Char('\0'),
            Self::Short => Value::Short(0),
            Self::Int => Value::Int(0),
            Self::Long => Value::Long(0),
            Self::Float => Value::Float(0.0),
            Self::Double => Value::Double(0.0),
        }
    }
}

/// A named reference type and its declared supertypes.
///
/// Every class is implicitly a subtype of `java.lang.Object`. Identity is
/// the name.
#[derive(Debug, Clone)]
pub struct ClassType {
    name: String,
    supertypes: Vec<Arc<ClassType>>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_supertypes(name: impl Into<String>, supertypes: Vec<Arc<ClassType>>) -> Self {
        Self {
            name: name.into(),
            supertypes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertypes(&self) -> &[Arc<ClassType>] {
        &self.supertypes
    }

    pub fn is_object(&self) -> bool {
        self.name == OBJECT
    }

    /// Returns true if `other` is this class or one of its transitive supertypes.
    pub fn is_subtype_of(&self, other: &ClassType) -> bool {
        other.is_object()
            || self == other
            || self.supertypes.iter().any(|s| s.is_subtype_of(other))
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassType {}

impl Hash for ClassType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// The type of a constructor parameter or a projected argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    Primitive(Primitive),
    Class(Arc<ClassType>),
    Array(Box<RuntimeType>),
}

impl RuntimeType {
    pub fn object() -> Self {
        Self::Class(Arc::clone(&OBJECT_CLASS))
    }

    pub fn string() -> Self {
        Self::Class(Arc::clone(&STRING_CLASS))
    }

    pub fn number() -> Self {
        Self::Class(Arc::clone(&NUMBER_CLASS))
    }

    /// A class with no declared supertypes besides the implicit top type.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(Arc::new(ClassType::new(name)))
    }

    /// A class extending the given types. Non-class entries are ignored.
    pub fn subclass(name: impl Into<String>, supertypes: &[RuntimeType]) -> Self {
        let supertypes = supertypes
            .iter()
            .filter_map(RuntimeType::as_class)
            .cloned()
            .collect();
        Self::Class(Arc::new(ClassType::with_supertypes(name, supertypes)))
    }

    pub fn array_of(component: RuntimeType) -> Self {
        Self::Array(Box::new(component))
    }

    /// Boxed reference type for a primitive kind.
    pub fn boxed(primitive: Primitive) -> Self {
        Self::Class(primitive.boxed())
    }

    pub fn as_class(&self) -> Option<&Arc<ClassType>> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn component_type(&self) -> Option<&RuntimeType> {
        match self {
            Self::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Unwraps one array level, then boxes a primitive.
    pub fn normalize(&self) -> RuntimeType {
        let unwrapped = self.component_type().unwrap_or(self);
        match unwrapped {
            Self::Primitive(p) => Self::boxed(*p),
            other => other.clone(),
        }
    }

    /// Returns true if a value of type `other` may be stored in a slot of this type.
    pub fn is_assignable_from(&self, other: &RuntimeType) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Self::Class(target), Self::Class(source)) => source.is_subtype_of(target),
            (Self::Class(target), Self::Array(_)) => target.is_object(),
            (Self::Array(target), Self::Array(source)) => {
                !target.is_primitive()
                    && !source.is_primitive()
                    && target.is_assignable_from(source)
            }
            _ => false,
        }
    }
}

impl From<Primitive> for RuntimeType {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Arc<ClassType>> for RuntimeType {
    fn from(class: Arc<ClassType>) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::Class(class) => f.write_str(class.name()),
            Self::Array(component) => write!(f, "{component}[]"),
        }
    }
}

/// Renders a type sequence as `(a, b, c)` for diagnostics.
pub fn format_signature(types: &[RuntimeType]) -> String {
    let parts: Vec<String> = types.iter().map(ToString::to_string).collect();
    format!("({})", parts.join(", "))
}
