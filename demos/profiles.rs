//! Example selecting an env file by profile

use envbind::{EnvSchema, LoadConfig};

#[derive(Debug, EnvSchema)]
struct Config {
    #[env(key = "DATASOURCE_HOST", required)]
    pub host: String,

    #[env(key = "DATASOURCE_PORT", default = 5432)]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join(".env"), "DATASOURCE_HOST=localhost\n")?;
    std::fs::write(
        dir.path().join(".env.prod"),
        "DATASOURCE_HOST=db.prod.internal\nDATASOURCE_PORT=6432\n",
    )?;

    for profile in [None, Some("prod")] {
        let mut config = LoadConfig::new().path(dir.path());
        if let Some(profile) = profile {
            config = config.profile(profile);
        }

        let loaded = Config::load(&config)?;
        println!(
            "{} -> {}:{}",
            config.full_path().display(),
            loaded.host,
            loaded.port
        );
    }

    Ok(())
}
