//! Options controlling a single load

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::converter::CompositeConverter;
use crate::error::Error;

/// What to do with a field whose value is missing or blank.
///
/// In both policies a nullable (`Option<T>`) field becomes `None`, and an
/// absent key on a field with a declared default uses that default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyValuePolicy {
    /// Any other field fails with [`Error::EmptyNonNullable`], including a
    /// blank value on a field with a declared default.
    Null,
    /// Any other field gets its declared default, else its type's zero value:
    /// `0`, `false`, `""`, an empty collection. Types without a known zero
    /// still fail.
    #[default]
    DefaultFill,
}

/// Separators used by the collection and map converters.
///
/// Plain substring splits: a separator inside a value cannot be escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Between list/set items (`a,b,c`)
    pub item: String,
    /// Between map entries (`a=1;b=2`)
    pub entry: String,
    /// Between a map key and its value
    pub key_value: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            item: ",".to_string(),
            entry: ";".to_string(),
            key_value: "=".to_string(),
        }
    }
}

impl Separators {
    /// Reject separators that make container values ambiguous.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, separator) in [
            ("item", &self.item),
            ("entry", &self.entry),
            ("key/value", &self.key_value),
        ] {
            if separator.is_empty() {
                return Err(Error::invalid_config(format!(
                    "{name} separator must not be empty"
                )));
            }
        }
        if self.entry == self.key_value {
            return Err(Error::invalid_config(format!(
                "entry and key/value separators must differ (both '{}')",
                self.entry
            )));
        }
        if self.entry == self.item {
            return Err(Error::invalid_config(format!(
                "entry and item separators must differ (both '{}')",
                self.entry
            )));
        }
        Ok(())
    }
}

/// Configuration of a load.
///
/// ```rust
/// use envbind::{EmptyValuePolicy, LoadConfig};
///
/// let config = LoadConfig::new()
///     .path("/etc/myapp")
///     .profile("dev")
///     .empty_value_policy(EmptyValuePolicy::Null);
/// assert_eq!(config.full_path(), std::path::Path::new("/etc/myapp/.env.dev"));
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    file_name: String,
    path: PathBuf,
    profile: Option<String>,
    empty_value_policy: EmptyValuePolicy,
    separators: Separators,
    converter: Option<CompositeConverter>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            file_name: ".env".to_string(),
            path: PathBuf::from("."),
            profile: None,
            empty_value_policy: EmptyValuePolicy::default(),
            separators: Separators::default(),
            converter: None,
        }
    }
}

impl LoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Directory containing the env file.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Profile suffix: profile `dev` loads `.env.dev`.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn empty_value_policy(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_value_policy = policy;
        self
    }

    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn item_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.item = separator.into();
        self
    }

    pub fn entry_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.entry = separator.into();
        self
    }

    pub fn key_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.key_value = separator.into();
        self
    }

    /// Use a pre-built registry instead of the standard one.
    ///
    /// The separators of this config are then ignored by conversion; the
    /// registry carries its own.
    pub fn converter(mut self, converter: CompositeConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn get_empty_value_policy(&self) -> EmptyValuePolicy {
        self.empty_value_policy
    }

    pub fn get_separators(&self) -> &Separators {
        &self.separators
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    /// `path/file_name`, with `.profile` appended when a profile is set.
    pub fn full_path(&self) -> PathBuf {
        let file_name = match &self.profile {
            Some(profile) => format!("{}.{}", self.file_name, profile),
            None => self.file_name.clone(),
        };
        self.path.join(file_name)
    }

    /// The registry used for conversion: the override, or a standard one
    /// built from the separators.
    pub fn effective_converter(&self) -> CompositeConverter {
        match &self.converter {
            Some(converter) => converter.clone(),
            None => CompositeConverter::with_separators(&self.separators),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.converter.is_none() {
            self.separators.validate()?;
        }
        Ok(())
    }
}
