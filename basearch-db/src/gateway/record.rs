use basearch_api::StoreError;
use heapless::String as HeaplessString;
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::attribute::AttributeValue;

/// One `column = value` equality condition, already resolved to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub column: &'static str,
    pub value: AttributeValue,
}

impl Constraint {
    pub fn new(column: &'static str, value: AttributeValue) -> Self {
        Self { column, value }
    }
}

/// Store-neutral row: the identifier plus the non-null column values.
///
/// A column missing from `values` is NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    table: &'static str,
    id: Uuid,
    values: BTreeMap<&'static str, AttributeValue>,
}

impl Record {
    pub fn new(table: &'static str, id: Uuid) -> Self {
        Self {
            table,
            id,
            values: BTreeMap::new(),
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn with(mut self, column: &'static str, value: impl Into<AttributeValue>) -> Self {
        self.values.insert(column, value.into());
        self
    }

    pub fn with_optional<V: Into<AttributeValue>>(mut self, column: &'static str, value: Option<V>) -> Self {
        self.set(column, value.map(Into::into));
        self
    }

    pub fn set(&mut self, column: &'static str, value: Option<AttributeValue>) {
        match value {
            Some(value) => {
                self.values.insert(column, value);
            }
            None => {
                self.values.remove(column);
            }
        }
    }

    pub fn get(&self, column: &str) -> Option<&AttributeValue> {
        self.values.get(column)
    }

    pub fn values(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        self.values.iter().map(|(column, value)| (*column, value))
    }

    /// True when every constraint holds for this record; NULL never matches.
    pub fn matches(&self, constraints: &[Constraint]) -> bool {
        constraints
            .iter()
            .all(|c| self.values.get(c.column) == Some(&c.value))
    }

    pub fn text(&self, column: &'static str) -> Result<Option<&str>, StoreError> {
        match self.values.get(column) {
            None => Ok(None),
            Some(AttributeValue::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.decode_error(column, format!("expected text, found {:?}", other.kind()))),
        }
    }

    pub fn boolean(&self, column: &'static str) -> Result<Option<bool>, StoreError> {
        match self.values.get(column) {
            None => Ok(None),
            Some(AttributeValue::Boolean(b)) => Ok(Some(*b)),
            Some(other) => Err(self.decode_error(column, format!("expected boolean, found {:?}", other.kind()))),
        }
    }

    /// Retrieves an optional `HeaplessString` from the record.
    pub fn optional_heapless<const N: usize>(
        &self,
        column: &'static str,
    ) -> Result<Option<HeaplessString<N>>, StoreError> {
        self.text(column)?
            .map(|s| {
                HeaplessString::from_str(s).map_err(|_| {
                    self.decode_error(column, format!("value is too long (max {N} chars)"))
                })
            })
            .transpose()
    }

    /// Retrieves a required `HeaplessString` from the record.
    pub fn heapless<const N: usize>(&self, column: &'static str) -> Result<HeaplessString<N>, StoreError> {
        self.optional_heapless(column)?
            .ok_or_else(|| self.decode_error(column, "value is missing".to_string()))
    }

    fn decode_error(&self, column: &'static str, message: String) -> StoreError {
        StoreError::Decode {
            table: self.table,
            column,
            message,
        }
    }
}
