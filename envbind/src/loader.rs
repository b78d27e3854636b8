//! Binding raw entries onto an [`EnvSchema`] type

use std::env;

use crate::config::LoadConfig;
use crate::error::Error;
use crate::reader::{read_env_file, RawEntries};
use crate::resolve::{FieldValueResolver, Resolution};
use crate::schema::{EnvSchema, FieldValues, Schema};

/// Load `T` from the env file described by `config`.
///
/// # Errors
///
/// - The env file is missing, unreadable or malformed
/// - `T` or `config` is not usable (see [`Error::NotLoadable`], [`Error::InvalidConfig`])
/// - Any field fails to resolve; the first failure in declaration order is returned
pub fn load<T: EnvSchema>(config: &LoadConfig) -> Result<T, Error> {
    let schema = T::schema();
    schema.validate()?;
    config.validate()?;

    let path = config.full_path();
    tracing::debug!(target_type = schema.type_name, path = %path.display(), "loading configuration");
    let entries = read_env_file(&path)?;
    bind(&schema, &entries, config)
}

/// Load `T` from already-read entries.
pub fn load_from_entries<T: EnvSchema>(entries: &RawEntries, config: &LoadConfig) -> Result<T, Error> {
    let schema = T::schema();
    schema.validate()?;
    config.validate()?;

    tracing::debug!(target_type = schema.type_name, entries = entries.len(), "loading configuration from entries");
    bind(&schema, entries, config)
}

/// Load `T` from the process environment.
///
/// Variables that are not valid Unicode are skipped.
pub fn from_env<T: EnvSchema>(config: &LoadConfig) -> Result<T, Error> {
    let entries: RawEntries = env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    load_from_entries(&entries, config)
}

fn bind<T: EnvSchema>(schema: &Schema, entries: &RawEntries, config: &LoadConfig) -> Result<T, Error> {
    let converter = config.effective_converter();
    let resolver = FieldValueResolver::new(&converter, config.get_empty_value_policy());

    let mut values = FieldValues::new();
    for field in &schema.fields {
        match resolver.resolve(field, entries.get(&field.key))? {
            Resolution::Value(value) => {
                tracing::trace!(field = field.name, key = %field.key, null = value.is_null(), "resolved field");
                values.insert(field.name, value);
            }
            Resolution::UseDefault => {
                tracing::trace!(field = field.name, key = %field.key, "using declared default");
            }
        }
    }

    T::construct(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyValuePolicy;
    use crate::error::ConvertError;
    use crate::schema::FieldDescriptor;
    use crate::types::DeclaredType;
    use crate::value::EnvValue;
    use std::collections::HashMap;
    use std::io::Write;

    // Hand-written schema, as a derive would produce it.
    #[derive(Debug, PartialEq)]
    struct Database {
        host: String,
        port: u16,
        driver: String,
        replicas: Vec<String>,
        pool: HashMap<String, u32>,
        password: Option<String>,
    }

    impl EnvSchema for Database {
        fn schema() -> Schema {
            Schema::new(
                "Database",
                vec![
                    FieldDescriptor::new("host", "DB_HOST", String::declared_type()).required(true),
                    FieldDescriptor::new("port", "DB_PORT", u16::declared_type()),
                    FieldDescriptor::new("driver", "DB_DRIVER", String::declared_type())
                        .has_default(true),
                    FieldDescriptor::new("replicas", "DB_REPLICAS", <Vec<String>>::declared_type()),
                    FieldDescriptor::new(
                        "pool",
                        "DB_POOL",
                        <HashMap<String, u32>>::declared_type(),
                    ),
                    FieldDescriptor::new(
                        "password",
                        "DB_PASSWORD",
                        <Option<String>>::declared_type(),
                    ),
                ],
            )
        }

        fn construct(mut values: FieldValues) -> Result<Self, Error> {
            Ok(Self {
                host: values.require("host")?,
                port: values.require("port")?,
                driver: values
                    .take("driver")?
                    .unwrap_or_else(|| "postgres".to_string()),
                replicas: values.require("replicas")?,
                pool: values.require("pool")?,
                password: values.take("password")?.unwrap_or_default(),
            })
        }
    }

    fn entries(pairs: &[(&str, &str)]) -> RawEntries {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_binds_all_fields() {
        let raw = entries(&[
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_REPLICAS", "r1, r2"),
            ("DB_POOL", "min=1; max=10"),
            ("DB_PASSWORD", "secret"),
        ]);
        let db: Database = load_from_entries(&raw, &LoadConfig::new()).unwrap();

        assert_eq!(
            db,
            Database {
                host: "localhost".to_string(),
                port: 5432,
                driver: "postgres".to_string(),
                replicas: vec!["r1".to_string(), "r2".to_string()],
                pool: HashMap::from([("min".to_string(), 1), ("max".to_string(), 10)]),
                password: Some("secret".to_string()),
            }
        );
    }

    #[test]
    fn test_default_fill_for_missing_fields() {
        let raw = entries(&[("DB_HOST", "localhost")]);
        let db: Database = load_from_entries(&raw, &LoadConfig::new()).unwrap();

        assert_eq!(db.port, 0);
        assert_eq!(db.driver, "postgres");
        assert!(db.replicas.is_empty());
        assert!(db.pool.is_empty());
        assert_eq!(db.password, None);
    }

    #[test]
    fn test_null_policy_reports_first_empty_field() {
        let raw = entries(&[("DB_HOST", "localhost"), ("DB_REPLICAS", "")]);
        let config = LoadConfig::new().empty_value_policy(EmptyValuePolicy::Null);

        match load_from_entries::<Database>(&raw, &config) {
            Err(Error::EmptyNonNullable { field, key }) => {
                assert_eq!(field, "port");
                assert_eq!(key, "DB_PORT");
            }
            other => panic!("Expected EmptyNonNullable, got {other:?}"),
        }
    }

    #[test]
    fn test_required_checked_before_anything_else() {
        let raw = entries(&[("DB_PORT", "not a number")]);
        assert!(matches!(
            load_from_entries::<Database>(&raw, &LoadConfig::new()),
            Err(Error::MissingRequiredProperty { ref key }) if key == "DB_HOST"
        ));
    }

    #[test]
    fn test_conversion_error_aborts() {
        let raw = entries(&[("DB_HOST", "localhost"), ("DB_PORT", "abc")]);
        assert!(matches!(
            load_from_entries::<Database>(&raw, &LoadConfig::new()),
            Err(Error::Convert {
                ref key,
                source: ConvertError::Conversion { .. },
            }) if key == "DB_PORT"
        ));
    }

    #[test]
    fn test_loads_same_entries_identically() {
        let raw = entries(&[("DB_HOST", "h"), ("DB_POOL", "a=1")]);
        let first: Database = load_from_entries(&raw, &LoadConfig::new()).unwrap();
        let second: Database = load_from_entries(&raw, &LoadConfig::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_reads_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".env.test")).unwrap();
        writeln!(file, "DB_HOST=db.internal\nDB_POOL=max=4").unwrap();

        let config = LoadConfig::new().path(dir.path()).profile("test");
        let db: Database = load(&config).unwrap();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.pool["max"], 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoadConfig::new().path(dir.path());
        assert!(matches!(
            load::<Database>(&config),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_separators_rejected_before_reading() {
        let config = LoadConfig::new()
            .path("/nonexistent")
            .key_value_separator(";");
        assert!(matches!(
            load::<Database>(&config),
            Err(Error::InvalidConfig { .. })
        ));
    }

    struct Nothing;

    impl EnvSchema for Nothing {
        fn schema() -> Schema {
            Schema::new("Nothing", vec![])
        }

        fn construct(_values: FieldValues) -> Result<Self, Error> {
            Ok(Nothing)
        }
    }

    #[test]
    fn test_schema_without_fields_not_loadable() {
        assert!(matches!(
            load_from_entries::<Nothing>(&RawEntries::new(), &LoadConfig::new()),
            Err(Error::NotLoadable { .. })
        ));
    }

    #[test]
    fn test_custom_type_without_converter() {
        struct Timeout;

        impl EnvSchema for Timeout {
            fn schema() -> Schema {
                Schema::new(
                    "Timeout",
                    vec![FieldDescriptor::new(
                        "timeout",
                        "TIMEOUT",
                        DeclaredType::Custom("Duration"),
                    )],
                )
            }

            fn construct(_values: FieldValues) -> Result<Self, Error> {
                Ok(Timeout)
            }
        }

        let raw = entries(&[("TIMEOUT", "30s")]);
        assert!(matches!(
            load_from_entries::<Timeout>(&raw, &LoadConfig::new()),
            Err(Error::Convert {
                source: ConvertError::UnsupportedType { .. },
                ..
            })
        ));
        assert!(matches!(
            load_from_entries::<Timeout>(&RawEntries::new(), &LoadConfig::new()),
            Err(Error::EmptyNonNullable { .. })
        ));
    }
}
