//! Example comparing the two empty-value policies

use envbind::{EmptyValuePolicy, EnvSchema, LoadConfig, RawEntries};

#[derive(Debug, EnvSchema)]
struct Config {
    // Blank values fail under Null, fall back to the default under DefaultFill
    #[env(default = 3)]
    pub retries: u8,

    // Blank values become None under both policies
    pub proxy: Option<String>,

    // Blank values fail under Null, become 0 under DefaultFill
    pub workers: u32,

    // Blank values fail under Null, become an empty list under DefaultFill
    pub peers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let entries: RawEntries = [("RETRIES", ""), ("PROXY", ""), ("WORKERS", "")]
        .into_iter()
        .collect();

    let filled: Config = envbind::load_from_entries(
        &entries,
        &LoadConfig::new().empty_value_policy(EmptyValuePolicy::DefaultFill),
    )?;
    println!("DefaultFill: {filled:?}");

    let strict = envbind::load_from_entries::<Config>(
        &entries,
        &LoadConfig::new().empty_value_policy(EmptyValuePolicy::Null),
    );
    match strict {
        Ok(config) => println!("Null: {config:?}"),
        Err(e) => println!("Null: {e}"),
    }

    Ok(())
}
