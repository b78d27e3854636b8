//! Bind `.env` files and environment variables onto typed structs
//!
//! `envbind` reads flat `KEY=value` configuration and converts every value into
//! the declared type of a struct field: scalars, strings, `Option<T>`, and
//! lists, sets and maps of those, nested one level (`HashMap<String, Vec<u16>>`).
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvSchema)]` describes the struct
//! - **Nested containers**: `a,b,c` lists and sets, `k1=v1;k2=v2` maps
//! - **Empty-value policy**: blank values fail, or become zero values
//! - **Profiles**: `.env.dev`, `.env.prod` next to `.env`
//! - **Extensible**: register converters for your own types
//!
//! # Value Parsing
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db`
//! - Numbers: `MAX_CONNECTIONS=42`
//! - Booleans (exactly `true` or `false`): `DEBUG=true`
//! - Lists and sets: `HOSTS=a.example.com, b.example.com`
//! - Maps: `LIMITS=read=10; write=2`
//! - Maps of lists: `ROUTES=api=a,b; web=c`
//!
//! # Example
//!
//! ```rust
//! use envbind::{EnvSchema, RawEntries, LoadConfig};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, EnvSchema)]
//! struct Config {
//!     #[env(key = "DATABASE_URL", required)]
//!     pub database_url: String,
//!
//!     #[env(default = 8080)]
//!     pub port: u16,
//!
//!     pub hosts: Vec<String>,
//!
//!     pub limits: HashMap<String, u32>,
//!
//!     pub api_token: Option<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let entries: RawEntries = [
//!     ("DATABASE_URL", "postgres://localhost/db"),
//!     ("HOSTS", "a, b"),
//!     ("LIMITS", "read=10; write=2"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config: Config = envbind::load_from_entries(&entries, &LoadConfig::new())?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.hosts, vec!["a", "b"]);
//! assert_eq!(config.limits["write"], 2);
//! assert_eq!(config.api_token, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! On the struct: prepended to every key.
//!
//! ## `#[env(key = "CUSTOM_NAME")]`
//!
//! Key to read. Defaults to the field name in upper case.
//!
//! ## `#[env(required)]`
//!
//! The key must be present and non-blank, whatever the empty-value policy.
//!
//! ## `#[env(default)]` / `#[env(default = value)]`
//!
//! Used when the key is absent or blank. `Option<T>` fields cannot take a
//! default: they already fall back to `None`.
//!
//! # Empty values
//!
//! A field whose key is absent or blank resolves as follows:
//!
//! 1. `required`: error
//! 2. `Option<T>`: `None`
//! 3. absent with a declared default: the default
//! 4. [`EmptyValuePolicy::Null`]: error, even when a default is declared
//! 5. [`EmptyValuePolicy::DefaultFill`]: the declared default, else `0`,
//!    `false`, `""` or an empty collection

pub mod converter;

mod config;
mod error;
mod loader;
mod reader;
mod resolve;
mod schema;
mod types;
mod value;

pub use config::{EmptyValuePolicy, LoadConfig, Separators};
pub use converter::{CompositeConverter, Converter};
pub use envbind_derive::EnvSchema;
pub use error::{ConvertError, Error, ValueError};
pub use loader::{from_env, load, load_from_entries};
pub use reader::{parse_env, read_env_file, RawEntries};
pub use resolve::{zero_value, FieldValueResolver, Resolution};
pub use schema::{EnvSchema, FieldDescriptor, FieldValues, Schema};
pub use types::{DeclaredType, ScalarKind};
pub use value::{EnvValue, Value};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;
