//! Example demonstrating lists, sets and maps

use envbind::{EnvSchema, LoadConfig, RawEntries};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, EnvSchema)]
#[env(prefix = "APP_")]
struct Config {
    // APP_TAGS=production, api, v2
    pub tags: Vec<String>,

    // Duplicates collapse: APP_ADMINS=alice, bob, alice
    pub admins: HashSet<String>,

    // APP_LIMITS=read=100; write=10
    pub limits: BTreeMap<String, u32>,

    // Map of lists: APP_ROUTES=api=10.0.0.1,10.0.0.2; web=10.0.0.3
    pub routes: HashMap<String, Vec<String>>,

    // Integer keys, set values: APP_SHARDS=1=a,b; 2=c
    pub shards: BTreeMap<u8, HashSet<String>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let entries: RawEntries = [
        ("APP_TAGS", "production, api, v2"),
        ("APP_ADMINS", "alice, bob, alice"),
        ("APP_LIMITS", "read=100; write=10"),
        ("APP_ROUTES", "api=10.0.0.1,10.0.0.2; web=10.0.0.3"),
        ("APP_SHARDS", "1=a,b; 2=c"),
    ]
    .into_iter()
    .collect();

    let config: Config = envbind::load_from_entries(&entries, &LoadConfig::new())?;

    println!("Configuration loaded:");
    println!("  Tags: {:?}", config.tags);
    println!("  Admins: {:?}", config.admins);
    println!("  Limits: {:?}", config.limits);
    println!("  Routes: {:?}", config.routes);
    println!("  Shards: {:?}", config.shards);

    Ok(())
}
