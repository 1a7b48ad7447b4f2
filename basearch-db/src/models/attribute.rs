use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use uuid::Uuid;

use super::table::ColumnDef;

/// Storage kind of an attribute; constraint values must have the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Integer,
    Boolean,
    Uuid,
}

/// A non-null attribute value.
///
/// There is no null variant: "attribute is null" cannot be expressed as a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Uuid(Uuid),
}

impl AttributeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Text(_) => ValueKind::Text,
            AttributeValue::Integer(_) => ValueKind::Integer,
            AttributeValue::Boolean(_) => ValueKind::Boolean,
            AttributeValue::Uuid(_) => ValueKind::Uuid,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl<const N: usize> From<&HeaplessString<N>> for AttributeValue {
    fn from(value: &HeaplessString<N>) -> Self {
        AttributeValue::Text(value.as_str().to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        AttributeValue::Uuid(value)
    }
}

/// Compile-time registry of the queryable attributes of one entity type
///
/// Implemented by a field-less enum per entity. Typed lookups use the enum directly,
/// so a misspelled attribute does not compile; `from_name` serves the string path.
pub trait Attribute: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every attribute of the entity type
    fn all() -> &'static [Self];

    /// Logical attribute name used by callers
    fn name(self) -> &'static str;

    /// Column backing the attribute
    fn column(self) -> &'static ColumnDef;

    fn kind(self) -> ValueKind {
        self.column().kind
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|attr| attr.name() == name)
    }
}
