//! Per-field resolution of a raw value into a final value

use crate::config::EmptyValuePolicy;
use crate::converter::{CompositeConverter, Converter};
use crate::error::Error;
use crate::schema::FieldDescriptor;
use crate::types::{DeclaredType, ScalarKind};
use crate::value::Value;

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Use this value for the field.
    Value(Value),
    /// Leave the field out so the struct's declared default applies.
    UseDefault,
}

/// Combines a raw value, the field's metadata and the empty-value policy.
///
/// Resolution order:
/// 1. `required` and absent or blank: [`Error::MissingRequiredProperty`]
/// 2. absent with a declared default: [`Resolution::UseDefault`]
/// 3. absent or blank: `None` for `Option<T>`, else the policy decides.
///    `Null` fails; `DefaultFill` takes the declared default, else the
///    type's zero value
/// 4. otherwise the trimmed value goes through the converter
#[derive(Debug, Clone, Copy)]
pub struct FieldValueResolver<'a> {
    converter: &'a CompositeConverter,
    policy: EmptyValuePolicy,
}

impl<'a> FieldValueResolver<'a> {
    pub fn new(converter: &'a CompositeConverter, policy: EmptyValuePolicy) -> Self {
        Self { converter, policy }
    }

    pub fn resolve(&self, field: &FieldDescriptor, raw: Option<&str>) -> Result<Resolution, Error> {
        let blank = raw.map_or(true, |r| r.trim().is_empty());

        if field.required && blank {
            return Err(Error::MissingRequiredProperty {
                key: field.key.clone(),
            });
        }

        let raw = match raw {
            None if field.has_default => return Ok(Resolution::UseDefault),
            Some(raw) if !blank => raw.trim(),
            _ => return self.resolve_empty(field),
        };

        self.converter
            .convert(raw, &field.declared_type)
            .map(Resolution::Value)
            .map_err(|e| Error::convert(&field.key, e))
    }

    fn resolve_empty(&self, field: &FieldDescriptor) -> Result<Resolution, Error> {
        if field.declared_type.is_nullable() {
            return Ok(Resolution::Value(Value::Null));
        }

        let filled = match self.policy {
            EmptyValuePolicy::Null => None,
            EmptyValuePolicy::DefaultFill if field.has_default => Some(Resolution::UseDefault),
            EmptyValuePolicy::DefaultFill => zero_value(&field.declared_type).map(Resolution::Value),
        };
        filled.ok_or_else(|| Error::EmptyNonNullable {
            field: field.name.to_string(),
            key: field.key.clone(),
        })
    }
}

/// The zero-like value [`EmptyValuePolicy::DefaultFill`] uses for a type.
///
/// `None` for [`DeclaredType::Custom`]: there is no general way to make one.
pub fn zero_value(ty: &DeclaredType) -> Option<Value> {
    let value = match ty {
        DeclaredType::Scalar(kind) => match kind {
            ScalarKind::Bool => Value::Bool(false),
            ScalarKind::Char => Value::Char('\0'),
            ScalarKind::I8 => Value::I8(0),
            ScalarKind::I16 => Value::I16(0),
            ScalarKind::I32 => Value::I32(0),
            ScalarKind::I64 => Value::I64(0),
            ScalarKind::Isize => Value::Isize(0),
            ScalarKind::U8 => Value::U8(0),
            ScalarKind::U16 => Value::U16(0),
            ScalarKind::U32 => Value::U32(0),
            ScalarKind::U64 => Value::U64(0),
            ScalarKind::Usize => Value::Usize(0),
            ScalarKind::F32 => Value::F32(0.0),
            ScalarKind::F64 => Value::F64(0.0),
            ScalarKind::String => Value::String(String::new()),
        },
        DeclaredType::Sequence(_) => Value::Sequence(Vec::new()),
        DeclaredType::Set(_) => Value::Set(Vec::new()),
        DeclaredType::Mapping(..) => Value::Mapping(Vec::new()),
        DeclaredType::Nullable(_) => Value::Null,
        DeclaredType::Custom(_) => return None,
    };
    Some(value)
}
