use super::{CompositeConverter, Converter};
use crate::error::ConvertError;
use crate::types::DeclaredType;
use crate::value::Value;

/// Converts separator-delimited lists into sequences and sets.
///
/// Tokens are trimmed and blank tokens dropped. Elements resolve through the
/// inner registry only, so an element type can never be this converter's own
/// container type.
#[derive(Debug, Clone)]
pub struct CollectionConverter {
    inner: CompositeConverter,
    separator: String,
}

impl CollectionConverter {
    pub fn new(inner: CompositeConverter, separator: impl Into<String>) -> Self {
        Self {
            inner,
            separator: separator.into(),
        }
    }

    fn convert_elements(
        &self,
        raw: &str,
        element: &DeclaredType,
    ) -> Result<Vec<Value>, ConvertError> {
        raw.split(self.separator.as_str())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| self.inner.convert(token, element))
            .collect()
    }
}

impl Converter for CollectionConverter {
    fn can_handle(&self, ty: &DeclaredType) -> bool {
        matches!(ty, DeclaredType::Sequence(_) | DeclaredType::Set(_))
    }

    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError> {
        match ty {
            DeclaredType::Sequence(element) => {
                Ok(Value::Sequence(self.convert_elements(raw, element)?))
            }
            DeclaredType::Set(element) => {
                Ok(Value::set_from(self.convert_elements(raw, element)?))
            }
            other => Err(ConvertError::unsupported(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ScalarConverter;
    use crate::types::ScalarKind;
    use std::sync::Arc;

    fn converter(separator: &str) -> CollectionConverter {
        let scalars = ScalarConverter::all()
            .map(|c| Arc::new(c) as Arc<dyn Converter>)
            .collect();
        CollectionConverter::new(CompositeConverter::new(scalars), separator)
    }

    fn strings(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::String(s.to_string())).collect()
    }

    #[test]
    fn test_sequence_keeps_order_and_duplicates() {
        let ty = DeclaredType::sequence(ScalarKind::String.into());
        assert_eq!(
            converter(",").convert("foo, bar, baz, foo", &ty).unwrap(),
            Value::Sequence(strings(&["foo", "bar", "baz", "foo"]))
        );
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let ty = DeclaredType::set(ScalarKind::I16.into());
        assert_eq!(
            converter(",").convert("42, 43, 44, 42", &ty).unwrap(),
            Value::Set(vec![Value::I16(42), Value::I16(43), Value::I16(44)])
        );
    }

    #[test]
    fn test_blank_tokens_dropped() {
        let ty = DeclaredType::sequence(ScalarKind::Bool.into());
        assert_eq!(
            converter(",").convert(" true,, ,false, ", &ty).unwrap(),
            Value::Sequence(vec![Value::Bool(true), Value::Bool(false)])
        );
    }

    #[test]
    fn test_multi_char_separator() {
        let ty = DeclaredType::sequence(ScalarKind::F64.into());
        assert_eq!(
            converter("::").convert("1.5 :: 2.5", &ty).unwrap(),
            Value::Sequence(vec![Value::F64(1.5), Value::F64(2.5)])
        );
    }

    #[test]
    fn test_split_then_join_recovers_elements() {
        let ty = DeclaredType::sequence(ScalarKind::String.into());
        for separator in [",", "|", " ; "] {
            let items = ["a", "b", "c"];
            let joined = items.join(separator);
            assert_eq!(
                converter(separator).convert(&joined, &ty).unwrap(),
                Value::Sequence(strings(&items))
            );
        }
    }

    #[test]
    fn test_element_failure_propagates() {
        let ty = DeclaredType::sequence(ScalarKind::I32.into());
        let err = converter(",").convert("1, two, 3", &ty).unwrap_err();
        assert!(matches!(err, ConvertError::Conversion { ref raw, .. } if raw == "two"));
    }

    #[test]
    fn test_non_collection_is_unsupported() {
        let ty: DeclaredType = ScalarKind::I32.into();
        assert!(!converter(",").can_handle(&ty));
        assert!(matches!(
            converter(",").convert("1", &ty),
            Err(ConvertError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_nested_collection_is_unsupported() {
        let element = DeclaredType::sequence(ScalarKind::I32.into());
        let ty = DeclaredType::sequence(element.clone());
        assert_eq!(
            converter(",").convert("1", &ty).unwrap_err(),
            ConvertError::UnsupportedType { declared: element }
        );
    }
}
