//! Reading `KEY=value` env files

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::Error;

/// Ordered `key -> raw value` mapping.
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntries {
    entries: Vec<(String, String)>,
    // key -> position in `entries`
    index: HashMap<String, usize>,
}

impl RawEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEntries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

/// Parse env file contents. `path` is only used in error messages.
///
/// Blank lines and `#` comments are skipped. Every other line is split on its
/// first `=`; key and value are trimmed.
pub fn parse_env(contents: &str, path: &Path) -> Result<RawEntries, Error> {
    let mut entries = RawEntries::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(k, _)| !k.is_empty())
            .ok_or_else(|| Error::MalformedLine {
                path: path.to_path_buf(),
                line_number: index + 1,
                line: line.to_string(),
            })?;

        entries.insert(key, value);
    }

    Ok(entries)
}

/// Read and parse the env file at `path`.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<RawEntries, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let entries = parse_env(&contents, path)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "read env file");
    Ok(entries)
}
