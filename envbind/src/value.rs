//! Converted values and their link to Rust types

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use serde::ser::{Serialize, Serializer};

use crate::error::ValueError;
use crate::types::{DeclaredType, ScalarKind};

/// A value produced by a converter, before it is moved into a struct field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    Sequence(Vec<Value>),
    /// Distinct elements, first occurrence kept
    Set(Vec<Value>),
    /// Distinct keys, last assignment wins
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    /// Build a set value, collapsing duplicates.
    pub fn set_from(items: impl IntoIterator<Item = Value>) -> Self {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items {
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Value::Set(distinct)
    }

    /// Build a mapping value; a repeated key overwrites the earlier value.
    pub fn mapping_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut merged: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match merged.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => merged.push((key, value)),
            }
        }
        Value::Mapping(merged)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short description of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => ScalarKind::Bool.name(),
            Value::Char(_) => ScalarKind::Char.name(),
            Value::I8(_) => ScalarKind::I8.name(),
            Value::I16(_) => ScalarKind::I16.name(),
            Value::I32(_) => ScalarKind::I32.name(),
            Value::I64(_) => ScalarKind::I64.name(),
            Value::Isize(_) => ScalarKind::Isize.name(),
            Value::U8(_) => ScalarKind::U8.name(),
            Value::U16(_) => ScalarKind::U16.name(),
            Value::U32(_) => ScalarKind::U32.name(),
            Value::U64(_) => ScalarKind::U64.name(),
            Value::Usize(_) => ScalarKind::Usize.name(),
            Value::F32(_) => ScalarKind::F32.name(),
            Value::F64(_) => ScalarKind::F64.name(),
            Value::String(_) => ScalarKind::String.name(),
            Value::Sequence(_) => "sequence",
            Value::Set(_) => "set",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Char(v) => serializer.serialize_char(*v),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::Isize(v) => serializer.serialize_i64(*v as i64),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::Usize(v) => serializer.serialize_u64(*v as u64),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Sequence(items) | Value::Set(items) => serializer.collect_seq(items),
            Value::Mapping(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        }
    }
}

/// A Rust type that can be the target of a configuration field.
///
/// Implemented for the scalar types, `String`, `Option<T>`, `Vec<T>`,
/// `HashSet<T>`, `BTreeSet<T>`, `HashMap<K, V>` and `BTreeMap<K, V>`.
/// Implement it for your own type together with a converter that claims
/// [`DeclaredType::Custom`].
pub trait EnvValue: Sized {
    /// Declared type handed to the converters.
    fn declared_type() -> DeclaredType;

    /// Move a converted value into `Self`.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

macro_rules! scalar_env_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                fn declared_type() -> DeclaredType {
                    DeclaredType::Scalar(ScalarKind::$kind)
                }

                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::$kind(v) => Ok(v),
                        other => Err(ValueError::mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

scalar_env_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl<T: EnvValue> EnvValue for Option<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::nullable(T::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: EnvValue> EnvValue for Vec<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::sequence(T::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Sequence(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("sequence", &other)),
        }
    }
}

impl<T: EnvValue + Eq + Hash> EnvValue for HashSet<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::set(T::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

impl<T: EnvValue + Ord> EnvValue for BTreeSet<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::set(T::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

fn mapping_entries<K: EnvValue, V: EnvValue>(
    value: Value,
) -> Result<impl Iterator<Item = Result<(K, V), ValueError>>, ValueError> {
    match value {
        Value::Mapping(entries) => Ok(entries
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))),
        other => Err(ValueError::mismatch("mapping", &other)),
    }
}

impl<K: EnvValue + Eq + Hash, V: EnvValue> EnvValue for HashMap<K, V> {
    fn declared_type() -> DeclaredType {
        DeclaredType::mapping(K::declared_type(), V::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        mapping_entries(value)?.collect()
    }
}

impl<K: EnvValue + Ord, V: EnvValue> EnvValue for BTreeMap<K, V> {
    fn declared_type() -> DeclaredType {
        DeclaredType::mapping(K::declared_type(), V::declared_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        mapping_entries(value)?.collect()
    }
}
