//! Structural description of a field's target type

use std::fmt;

/// Scalar kinds understood by the built-in converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// Every scalar kind, in the order the default registry consults them.
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::String,
        ScalarKind::Bool,
        ScalarKind::Char,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::Isize,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::Usize,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Rust spelling of the kind, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Char => "char",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "String",
        }
    }
}

/// Declared type of a configuration field.
///
/// Built once by the schema (usually the `EnvSchema` derive) and never mutated.
/// Container variants always carry their type arguments, so a sequence without
/// an element type or a map without a value type cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Scalar(ScalarKind),
    /// Ordered, duplicates kept (`Vec<T>`)
    Sequence(Box<DeclaredType>),
    /// Duplicates collapsed (`HashSet<T>`, `BTreeSet<T>`)
    Set(Box<DeclaredType>),
    /// Key and value types (`HashMap<K, V>`, `BTreeMap<K, V>`)
    Mapping(Box<DeclaredType>, Box<DeclaredType>),
    /// `Option<T>`
    Nullable(Box<DeclaredType>),
    /// A user type that only a user-registered converter knows how to build.
    Custom(&'static str),
}

impl DeclaredType {
    pub fn sequence(element: DeclaredType) -> Self {
        DeclaredType::Sequence(Box::new(element))
    }

    pub fn set(element: DeclaredType) -> Self {
        DeclaredType::Set(Box::new(element))
    }

    pub fn mapping(key: DeclaredType, value: DeclaredType) -> Self {
        DeclaredType::Mapping(Box::new(key), Box::new(value))
    }

    pub fn nullable(inner: DeclaredType) -> Self {
        DeclaredType::Nullable(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, DeclaredType::Nullable(_))
    }

    /// The type with every outer `Nullable` wrapper removed.
    pub fn non_nullable(&self) -> &DeclaredType {
        let mut ty = self;
        while let DeclaredType::Nullable(inner) = ty {
            ty = inner;
        }
        ty
    }
}

impl From<ScalarKind> for DeclaredType {
    fn from(kind: ScalarKind) -> Self {
        DeclaredType::Scalar(kind)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Scalar(kind) => f.write_str(kind.name()),
            DeclaredType::Sequence(element) => write!(f, "Sequence<{element}>"),
            DeclaredType::Set(element) => write!(f, "Set<{element}>"),
            DeclaredType::Mapping(key, value) => write!(f, "Mapping<{key}, {value}>"),
            DeclaredType::Nullable(inner) => write!(f, "Nullable<{inner}>"),
            DeclaredType::Custom(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let ty = DeclaredType::mapping(
            ScalarKind::String.into(),
            DeclaredType::sequence(ScalarKind::I32.into()),
        );
        assert_eq!(ty.to_string(), "Mapping<String, Sequence<i32>>");
    }

    #[test]
    fn test_non_nullable_strips_all_wrappers() {
        let ty = DeclaredType::nullable(DeclaredType::nullable(ScalarKind::U16.into()));
        assert!(ty.is_nullable());
        assert_eq!(ty.non_nullable(), &DeclaredType::Scalar(ScalarKind::U16));
        assert!(!ty.non_nullable().is_nullable());
    }
}
