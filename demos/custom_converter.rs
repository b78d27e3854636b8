//! Example registering a converter for a custom type

use envbind::{
    CompositeConverter, ConvertError, Converter, DeclaredType, EnvSchema, EnvValue, LoadConfig,
    RawEntries, Value, ValueError,
};
use std::collections::HashMap;
use std::time::Duration;

/// `Duration` written as `500ms`, `30s` or `5m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Timeout(Duration);

impl EnvValue for Timeout {
    fn declared_type() -> DeclaredType {
        DeclaredType::Custom("Timeout")
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::U64(millis) => Ok(Timeout(Duration::from_millis(millis))),
            other => Err(ValueError::mismatch("Timeout", &other)),
        }
    }
}

#[derive(Debug)]
struct TimeoutConverter;

impl Converter for TimeoutConverter {
    fn can_handle(&self, ty: &DeclaredType) -> bool {
        *ty == Timeout::declared_type()
    }

    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError> {
        let (digits, factor) = if let Some(ms) = raw.strip_suffix("ms") {
            (ms, 1)
        } else if let Some(s) = raw.strip_suffix('s') {
            (s, 1_000)
        } else if let Some(m) = raw.strip_suffix('m') {
            (m, 60_000)
        } else {
            return Err(ConvertError::conversion(raw, ty, "missing unit (ms, s or m)"));
        };

        digits
            .trim()
            .parse::<u64>()
            .map(|n| Value::U64(n * factor))
            .map_err(|e| ConvertError::conversion(raw, ty, e))
    }
}

#[derive(Debug, EnvSchema)]
struct Config {
    pub connect_timeout: Timeout,

    // Custom types work as map values and list elements too
    pub route_timeouts: HashMap<String, Timeout>,

    pub idle_timeout: Option<Timeout>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let converter = CompositeConverter::builder()
        .add_base_converter(TimeoutConverter)
        .build();

    let entries: RawEntries = [
        ("CONNECT_TIMEOUT", "30s"),
        ("ROUTE_TIMEOUTS", "search=500ms; export=5m"),
    ]
    .into_iter()
    .collect();

    let config: Config =
        envbind::load_from_entries(&entries, &LoadConfig::new().converter(converter))?;

    println!("Configuration loaded:");
    println!("  Connect timeout: {:?}", config.connect_timeout.0);
    println!("  Route timeouts: {:?}", config.route_timeouts);
    println!("  Idle timeout: {:?}", config.idle_timeout);

    Ok(())
}
