use serde::{Deserialize, Serialize};

/// Semantic role of a type in the generated query metamodel.
///
/// The category decides which kind of path class the generator emits for a
/// property of this type. It is not part of a descriptor's identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    #[default]
    Simple,
    Map,
    Collection,
    List,
    Set,
    Array,
    Comparable,
    Boolean,
    Date,
    DateTime,
    Enum,
    Custom,
    Entity,
    Interface,
    Numeric,
    String,
    Time,
}
