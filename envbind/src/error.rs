//! Error types for binding configuration

use std::path::PathBuf;

use crate::types::DeclaredType;

/// Errors that can occur when loading configuration.
///
/// A load stops at the first failure, in field declaration order. Every
/// variant names the key or field it is about.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The env file does not exist.
    #[error("Env file '{}' does not exist", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The env file exists but could not be read.
    #[error("Failed to read env file '{}': {source}", .path.display())]
    FileRead {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A non-blank, non-comment line is not a `KEY=value` pair.
    #[error("Invalid line {line_number} in '{}': {line}", .path.display())]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number
        line_number: usize,
        line: String,
    },

    /// The target type cannot be bound (no fields, duplicate names or keys).
    #[error("Type '{type_name}' cannot be loaded: {reason}")]
    NotLoadable { type_name: String, reason: String },

    /// The load configuration itself is unusable (e.g. an empty separator).
    #[error("Invalid load configuration: {message}")]
    InvalidConfig { message: String },

    /// A field marked `required` has no non-blank value.
    #[error("Required property '{key}' is not set")]
    MissingRequiredProperty {
        /// Source key of the field
        key: String,
    },

    /// A non-nullable field is blank and nothing can stand in for it.
    #[error("Cannot provide an empty value for non-nullable field '{field}' (key '{key}')")]
    EmptyNonNullable { field: String, key: String },

    /// The raw value could not be converted to the declared type.
    #[error("Failed to convert property '{key}': {source}")]
    Convert {
        key: String,
        #[source]
        source: ConvertError,
    },

    /// Record construction found no value and no default for a field.
    #[error("No value supplied for field '{field}'")]
    MissingField { field: String },

    /// Record construction got a value whose shape does not fit the field.
    #[error("Invalid value for field '{field}': {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: ValueError,
    },
}

impl Error {
    /// Attach the source key to a converter failure.
    pub fn convert(key: impl Into<String>, source: ConvertError) -> Self {
        Self::Convert {
            key: key.into(),
            source,
        }
    }

    pub fn not_loadable(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotLoadable {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Failures raised by converters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// No converter in the registry claims the declared type.
    #[error("No converter found for type {declared}")]
    UnsupportedType { declared: DeclaredType },

    /// A token could not be parsed into its scalar type.
    #[error("Cannot convert '{raw}' to {declared}: {message}")]
    Conversion {
        raw: String,
        declared: DeclaredType,
        message: String,
    },

    /// A map entry is not a `key<separator>value` pair.
    #[error("Invalid format: '{entry}'. Expected: {expected}")]
    InvalidFormat { entry: String, expected: String },
}

impl ConvertError {
    pub fn unsupported(declared: &DeclaredType) -> Self {
        Self::UnsupportedType {
            declared: declared.clone(),
        }
    }

    pub fn conversion(
        raw: impl Into<String>,
        declared: &DeclaredType,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Conversion {
            raw: raw.into(),
            declared: declared.clone(),
            message: message.to_string(),
        }
    }
}

/// A converted value does not have the shape the Rust field expects.
///
/// Only reachable when a hand-written schema or converter disagrees with the
/// field's [`EnvValue`](crate::EnvValue) implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueError {
    pub expected: String,
    pub found: String,
}

impl ValueError {
    pub fn mismatch(expected: impl Into<String>, found: &crate::Value) -> Self {
        Self {
            expected: expected.into(),
            found: found.kind_name().to_string(),
        }
    }
}
