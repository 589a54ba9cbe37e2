//! The [`Type`] descriptor and its builder.

use crate::{ImportScope, TypeCategory, TypeError, TypeResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// Suffix that marks an array type name.
pub const ARRAY_MARKER: &str = "[]";

/// Token rendered in place of an absent or self-referential type parameter.
pub const WILDCARD: &str = "?";

/// An immutable descriptor of a nameable type.
///
/// Identity is the full name plus the type parameters: category, flags,
/// package and simple name do not take part in equality, and the hash is
/// derived from the full name alone.
///
/// Array and component derivations are computed on first access and cached
/// for the lifetime of the descriptor. Concurrent first accesses race on a
/// write-once cell, so every caller observes the same derived value.
#[derive(Clone)]
pub struct Type(Arc<Inner>);

struct Inner {
    category: TypeCategory,
    full_name: String,
    package_name: String,
    simple_name: String,
    local_name: String,
    parameters: Vec<Option<Type>>,
    primitive: bool,
    final_class: bool,
    array_type: OnceLock<Type>,
    component_type: OnceLock<Option<Type>>,
}

impl Type {
    /// Creates a simple, non-primitive, non-final descriptor.
    pub fn new<I>(
        full_name: impl Into<String>,
        package_name: impl Into<String>,
        simple_name: impl Into<String>,
        parameters: I,
    ) -> TypeResult<Self>
    where
        I: IntoIterator<Item = Type>,
    {
        Self::builder(full_name, package_name, simple_name)
            .parameters(parameters)
            .build()
    }

    /// Creates a descriptor for a bare name outside any package.
    pub fn named(simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        Self::from_parts(
            TypeCategory::Simple,
            simple_name.clone(),
            String::new(),
            simple_name,
            false,
            false,
            Vec::new(),
        )
    }

    /// Starts a builder for the full form of the constructor.
    pub fn builder(
        full_name: impl Into<String>,
        package_name: impl Into<String>,
        simple_name: impl Into<String>,
    ) -> TypeBuilder {
        TypeBuilder {
            category: TypeCategory::Simple,
            full_name: full_name.into(),
            package_name: package_name.into(),
            simple_name: simple_name.into(),
            primitive: false,
            final_class: false,
            parameters: Vec::new(),
        }
    }

    /// Copies this descriptor with a new parameter list.
    ///
    /// `None` entries stand for absent parameters and render as [`WILDCARD`].
    #[must_use]
    pub fn with_parameters<I>(&self, parameters: I) -> Self
    where
        I: IntoIterator<Item = Option<Type>>,
    {
        Self::from_parts(
            self.0.category,
            self.0.full_name.clone(),
            self.0.package_name.clone(),
            self.0.simple_name.clone(),
            self.0.primitive,
            self.0.final_class,
            parameters.into_iter().collect(),
        )
    }

    /// Returns this descriptor re-tagged with `category`.
    ///
    /// When the category already matches the same instance is returned.
    #[must_use]
    pub fn as_category(&self, category: TypeCategory) -> Self {
        if self.0.category == category {
            return self.clone();
        }
        Self::from_parts(
            category,
            self.0.full_name.clone(),
            self.0.package_name.clone(),
            self.0.simple_name.clone(),
            self.0.primitive,
            self.0.final_class,
            self.0.parameters.clone(),
        )
    }

    /// Returns the descriptor of `T[]` for this type `T`.
    pub fn array_type(&self) -> &Type {
        self.0.array_type.get_or_init(|| {
            Self::from_parts(
                TypeCategory::Array,
                format!("{}{ARRAY_MARKER}", self.0.full_name),
                self.0.package_name.clone(),
                format!("{}{ARRAY_MARKER}", self.0.simple_name),
                false,
                false,
                Vec::new(),
            )
        })
    }

    /// Returns the element descriptor when this is an array type.
    pub fn component_type(&self) -> Option<&Type> {
        self.0
            .component_type
            .get_or_init(|| {
                let full_name = self.0.full_name.strip_suffix(ARRAY_MARKER)?;
                let simple_name = self
                    .0
                    .simple_name
                    .strip_suffix(ARRAY_MARKER)
                    .unwrap_or(&self.0.simple_name);
                Some(Self::from_parts(
                    TypeCategory::Simple,
                    full_name.to_string(),
                    self.0.package_name.clone(),
                    simple_name.to_string(),
                    false,
                    false,
                    Vec::new(),
                ))
            })
            .as_ref()
    }

    /// Returns true if the full name carries the array marker.
    pub fn is_array(&self) -> bool {
        self.0.full_name.ends_with(ARRAY_MARKER)
    }

    /// Renders the type for generated source using the default import scope.
    pub fn generic_name(&self, as_argument_type: bool) -> String {
        self.generic_name_in(as_argument_type, &ImportScope::default())
    }

    /// Renders the type for generated source, shortening names visible in `scope`.
    ///
    /// Parameters are rendered recursively. A parameter that is absent, or
    /// whose full name equals this type's full name, renders as [`WILDCARD`]
    /// instead of recursing; recursive bounds such as `Enum<E extends Enum<E>>`
    /// therefore terminate.
    ///
    /// Argument position makes no difference for a simple descriptor; the
    /// flag exists for descriptors that render bounds.
    pub fn generic_name_in(&self, _as_argument_type: bool, scope: &ImportScope) -> String {
        let raw = self.raw_name(scope);
        if self.0.parameters.is_empty() {
            return raw.to_string();
        }

        let rendered: Vec<String> = self
            .0
            .parameters
            .iter()
            .map(|parameter| match parameter {
                Some(p) if p.full_name() != self.full_name() => p.generic_name_in(false, scope),
                _ => WILDCARD.to_string(),
            })
            .collect();
        format!("{raw}<{}>", rendered.join(", "))
    }

    /// Returns the local name when `scope` makes it unambiguous, else the full name.
    pub fn raw_name(&self, scope: &ImportScope) -> &str {
        if scope.is_visible(&self.0.package_name, &self.0.full_name) {
            &self.0.local_name
        } else {
            &self.0.full_name
        }
    }

    /// Primitive spelling of this type. Simple descriptors have none.
    pub fn primitive_name(&self) -> Option<&str> {
        None
    }

    pub fn category(&self) -> TypeCategory {
        self.0.category
    }

    pub fn full_name(&self) -> &str {
        &self.0.full_name
    }

    pub fn package_name(&self) -> &str {
        &self.0.package_name
    }

    pub fn simple_name(&self) -> &str {
        &self.0.simple_name
    }

    /// Full name with the package prefix stripped.
    pub fn local_name(&self) -> &str {
        &self.0.local_name
    }

    pub fn parameters(&self) -> &[Option<Type>] {
        &self.0.parameters
    }

    pub fn is_primitive(&self) -> bool {
        self.0.primitive
    }

    pub fn is_final(&self) -> bool {
        self.0.final_class
    }

    /// Returns true if both handles share the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    // Callers guarantee the package prefix invariant.
    fn from_parts(
        category: TypeCategory,
        full_name: String,
        package_name: String,
        simple_name: String,
        primitive: bool,
        final_class: bool,
        parameters: Vec<Option<Type>>,
    ) -> Self {
        let local_name = if package_name.is_empty() {
            full_name.clone()
        } else {
            full_name[package_name.len() + 1..].to_string()
        };
        Self(Arc::new(Inner {
            category,
            full_name,
            package_name,
            simple_name,
            local_name,
            parameters,
            primitive,
            final_class,
            array_type: OnceLock::new(),
            component_type: OnceLock::new(),
        }))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.full_name == other.0.full_name && self.0.parameters == other.0.parameters)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.full_name.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generic_name(true))
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("category", &self.0.category)
            .field("full_name", &self.0.full_name)
            .field("parameters", &self.0.parameters)
            .field("primitive", &self.0.primitive)
            .field("final", &self.0.final_class)
            .finish()
    }
}

/// Builder for the full descriptor constructor.
///
/// Validation happens in [`TypeBuilder::build`]: a descriptor whose full name
/// is not `package + "." + local` is rejected rather than constructed.
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    category: TypeCategory,
    full_name: String,
    package_name: String,
    simple_name: String,
    primitive: bool,
    final_class: bool,
    parameters: Vec<Option<Type>>,
}

impl TypeBuilder {
    #[must_use]
    pub fn category(mut self, category: TypeCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn primitive(mut self, primitive: bool) -> Self {
        self.primitive = primitive;
        self
    }

    #[must_use]
    pub fn final_class(mut self, final_class: bool) -> Self {
        self.final_class = final_class;
        self
    }

    /// Appends parameters.
    #[must_use]
    pub fn parameters<I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = Type>,
    {
        self.parameters.extend(parameters.into_iter().map(Some));
        self
    }

    /// Appends an absent parameter, rendered as [`WILDCARD`].
    #[must_use]
    pub fn wildcard(mut self) -> Self {
        self.parameters.push(None);
        self
    }

    pub fn build(self) -> TypeResult<Type> {
        if self.full_name.is_empty() {
            return Err(TypeError::EmptyName("full"));
        }
        if self.simple_name.is_empty() {
            return Err(TypeError::EmptyName("simple"));
        }
        if !self.package_name.is_empty() {
            let in_package = self
                .full_name
                .strip_prefix(&self.package_name)
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|local| !local.is_empty());
            if !in_package {
                return Err(TypeError::PackageMismatch {
                    full_name: self.full_name,
                    package_name: self.package_name,
                });
            }
        }

        Ok(Type::from_parts(
            self.category,
            self.full_name,
            self.package_name,
            self.simple_name,
            self.primitive,
            self.final_class,
            self.parameters,
        ))
    }
}
