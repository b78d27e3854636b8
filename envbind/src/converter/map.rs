use super::{CompositeConverter, Converter};
use crate::error::ConvertError;
use crate::types::DeclaredType;
use crate::value::Value;

/// Converts `k1=v1;k2=v2` style strings into mappings.
///
/// Each entry splits on the first key/value separator only, so values may
/// contain it. Keys and values resolve through the inner registry, which
/// includes the collection converter: `HashMap<String, Vec<String>>` works.
#[derive(Debug, Clone)]
pub struct MapConverter {
    inner: CompositeConverter,
    entry_separator: String,
    key_value_separator: String,
}

impl MapConverter {
    pub fn new(
        inner: CompositeConverter,
        entry_separator: impl Into<String>,
        key_value_separator: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            entry_separator: entry_separator.into(),
            key_value_separator: key_value_separator.into(),
        }
    }

    fn split_entry<'a>(&self, entry: &'a str) -> Result<(&'a str, &'a str), ConvertError> {
        entry
            .split_once(self.key_value_separator.as_str())
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, value)| !key.is_empty() && !value.is_empty())
            .ok_or_else(|| ConvertError::InvalidFormat {
                entry: entry.to_string(),
                expected: format!("key{}value", self.key_value_separator),
            })
    }
}

impl Converter for MapConverter {
    fn can_handle(&self, ty: &DeclaredType) -> bool {
        matches!(ty, DeclaredType::Mapping(..))
    }

    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError> {
        let DeclaredType::Mapping(key_type, value_type) = ty else {
            return Err(ConvertError::unsupported(ty));
        };

        let entries = raw
            .split(self.entry_separator.as_str())
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (raw_key, raw_value) = self.split_entry(entry)?;
                let key = self.inner.convert(raw_key, key_type)?;
                let value = self.inner.convert(raw_value, value_type)?;
                Ok((key, value))
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;

        Ok(Value::mapping_from(entries))
    }
}
