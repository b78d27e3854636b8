//! Basic usage example

use envbind::{EnvSchema, LoadConfig};

#[derive(Debug, EnvSchema)]
struct Config {
    // Required field: loaded from DATABASE_URL
    #[env(required)]
    pub database_url: String,

    // With default value
    #[env(default = "127.0.0.1:8080".to_string())]
    pub server_addr: String,

    // Numeric type
    #[env(default = 10)]
    pub max_connections: u32,

    // Boolean type, false when blank or missing
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Write a .env file for demonstration
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join(".env"),
        "# Database\nDATABASE_URL=postgres://localhost/mydb\nSERVER_ADDR=0.0.0.0:3000\n",
    )?;

    // Load configuration
    let config = Config::load(&LoadConfig::new().path(dir.path()))?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
