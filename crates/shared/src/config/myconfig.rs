use anyhow::{Context, Result, anyhow};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
}

fn parse_max_connections(raw: Option<String>) -> Result<u32> {
    match raw {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(value) => {
            let parsed = value
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
            if parsed == 0 {
                return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be at least 1"));
            }
            Ok(parsed)
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let database_max_connections =
            parse_max_connections(std::env::var("DATABASE_MAX_CONNECTIONS").ok())?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            database_url,
            database_max_connections,
            jwt_secret,
            run_migrations,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_defaults_when_unset() {
        assert_eq!(parse_max_connections(None).unwrap(), 5);
    }

    #[test]
    fn pool_size_honors_the_override() {
        assert_eq!(parse_max_connections(Some("20".into())).unwrap(), 20);
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        assert!(parse_max_connections(Some("0".into())).is_err());
    }

    #[test]
    fn non_numeric_pool_size_is_rejected() {
        assert!(parse_max_connections(Some("lots".into())).is_err());
    }
}
