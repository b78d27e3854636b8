use std::fmt::Display;
use std::str::FromStr;

use super::Converter;
use crate::error::ConvertError;
use crate::types::{DeclaredType, ScalarKind};
use crate::value::Value;

/// Converts a single token into one scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarConverter {
    kind: ScalarKind,
}

impl ScalarConverter {
    pub fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    /// One converter per [`ScalarKind`].
    pub fn all() -> impl Iterator<Item = ScalarConverter> {
        ScalarKind::ALL.into_iter().map(Self::new)
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }
}

fn parse<T>(raw: &str, ty: &DeclaredType) -> Result<T, ConvertError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| ConvertError::conversion(raw, ty, e))
}

fn single_char(raw: &str, ty: &DeclaredType) -> Result<char, ConvertError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConvertError::conversion(
            raw,
            ty,
            "expected exactly one character",
        )),
    }
}

impl Converter for ScalarConverter {
    fn can_handle(&self, ty: &DeclaredType) -> bool {
        *ty == DeclaredType::Scalar(self.kind)
    }

    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError> {
        if !self.can_handle(ty) {
            return Err(ConvertError::unsupported(ty));
        }

        // bool's FromStr accepts exactly "true" and "false"
        let value = match self.kind {
            ScalarKind::String => Value::String(raw.to_string()),
            ScalarKind::Bool => Value::Bool(parse(raw, ty)?),
            ScalarKind::Char => Value::Char(single_char(raw, ty)?),
            ScalarKind::I8 => Value::I8(parse(raw, ty)?),
            ScalarKind::I16 => Value::I16(parse(raw, ty)?),
            ScalarKind::I32 => Value::I32(parse(raw, ty)?),
            ScalarKind::I64 => Value::I64(parse(raw, ty)?),
            ScalarKind::Isize => Value::Isize(parse(raw, ty)?),
            ScalarKind::U8 => Value::U8(parse(raw, ty)?),
            ScalarKind::U16 => Value::U16(parse(raw, ty)?),
            ScalarKind::U32 => Value::U32(parse(raw, ty)?),
            ScalarKind::U64 => Value::U64(parse(raw, ty)?),
            ScalarKind::Usize => Value::Usize(parse(raw, ty)?),
            ScalarKind::F32 => Value::F32(parse(raw, ty)?),
            ScalarKind::F64 => Value::F64(parse(raw, ty)?),
        };
        Ok(value)
    }
}
