//! Schema description of a loadable struct
//!
//! Usually generated by `#[derive(EnvSchema)]`; can be written by hand for
//! types the derive does not cover.

use std::collections::HashMap;

use crate::error::Error;
use crate::types::DeclaredType;
use crate::value::{EnvValue, Value};

/// Metadata for one struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name
    pub name: &'static str,
    /// Key looked up in the raw entries
    pub key: String,
    pub declared_type: DeclaredType,
    /// Fail when the key is absent or blank, whatever the policy
    pub required: bool,
    /// The struct supplies its own value when none is resolved
    pub has_default: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, key: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            name,
            key: key.into(),
            declared_type,
            required: false,
            has_default: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn has_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }
}

/// Fields of a loadable type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub type_name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { type_name, fields }
    }

    /// Check the schema can be bound at all.
    pub fn validate(&self) -> Result<(), Error> {
        if self.fields.is_empty() {
            return Err(Error::not_loadable(self.type_name, "it declares no fields"));
        }

        for (index, field) in self.fields.iter().enumerate() {
            let earlier = &self.fields[..index];
            if earlier.iter().any(|f| f.name == field.name) {
                return Err(Error::not_loadable(
                    self.type_name,
                    format!("field '{}' is declared twice", field.name),
                ));
            }
            if earlier.iter().any(|f| f.key == field.key) {
                return Err(Error::not_loadable(
                    self.type_name,
                    format!("key '{}' is bound to more than one field", field.key),
                ));
            }
        }
        Ok(())
    }
}

/// Resolved values handed to [`EnvSchema::construct`].
///
/// Fields that should use the struct's own default are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: HashMap<&'static str, Value>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, value: Value) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove and convert a field's value; `None` when it was not resolved.
    pub fn take<T: EnvValue>(&mut self, field: &str) -> Result<Option<T>, Error> {
        self.values
            .remove(field)
            .map(|value| {
                T::from_value(value).map_err(|source| Error::InvalidValue {
                    field: field.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Like [`take`](Self::take), but a missing value is an error.
    pub fn require<T: EnvValue>(&mut self, field: &str) -> Result<T, Error> {
        self.take(field)?.ok_or_else(|| Error::MissingField {
            field: field.to_string(),
        })
    }
}

/// A struct that can be bound from raw entries.
///
/// Derive it with `#[derive(EnvSchema)]`.
pub trait EnvSchema: Sized {
    fn schema() -> Schema;

    /// Build the struct; fields missing from `values` use their defaults.
    fn construct(values: FieldValues) -> Result<Self, Error>;
}
