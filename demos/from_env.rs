//! Example loading from the process environment

use envbind::EnvSchema;

#[derive(Debug, EnvSchema)]
#[env(prefix = "MYAPP_")]
struct Config {
    // Loaded from MYAPP_DATABASE_URL
    #[env(required)]
    pub database_url: String,

    // Loaded from MYAPP_ALLOWED_ORIGINS
    pub allowed_origins: Vec<String>,

    // Loaded from MYAPP_LOG
    #[env(key = "LOG", default = "info".to_string())]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var(
        "MYAPP_ALLOWED_ORIGINS",
        "https://example.com, https://admin.example.com",
    );

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Allowed origins: {:?}", config.allowed_origins);
    println!("  Log level: {}", config.log_level);

    Ok(())
}
