use crate::modules::node::repository::{
    ContentRepository, InMemoryNodeRepository, PgNodeRepository,
};
use crate::utils::database;
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid value for {0}: {1}")]
    InvalidVariable(&'static str, String),
    #[error("failed to load node seed file {0}")]
    InvalidSeedFile(String),
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CacheConfig {
    pub max_age: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub app: AppConfig,
    pub database: Option<DatabaseConfig>,
    pub seed_file: Option<String>,
    pub cache: CacheConfig,
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, Error> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| Error::InvalidVariable(name, raw)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 8000)?;
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            4,
        )?;
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections,
        });
        let max_age = parse_or("CACHE_MAX_AGE", lookup("CACHE_MAX_AGE"), 60)?;

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            database,
            seed_file: lookup("NODES_SEED_FILE"),
            cache: CacheConfig { max_age },
        })
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppConfig,
    pub cache: CacheConfig,
    pub nodes: Arc<dyn ContentRepository>,
}

impl Context {
    pub fn new(app: AppConfig, cache: CacheConfig, nodes: Arc<dyn ContentRepository>) -> Self {
        Self { app, cache, nodes }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let nodes: Arc<dyn ContentRepository> = match (self.database, self.seed_file) {
            (Some(database), _) => {
                let db_conn = database::connect(&database.url, database.max_connections).await?;
                database::migrate(&db_conn).await?;
                tracing::info!("Serving nodes from Postgres");
                Arc::new(PgNodeRepository::new(db_conn.pool))
            }
            (None, Some(seed_file)) => {
                let repository = InMemoryNodeRepository::from_json_file(&seed_file)
                    .map_err(|_| Error::InvalidSeedFile(seed_file.clone()))?;
                tracing::info!("Serving {} nodes from {}", repository.len(), seed_file);
                Arc::new(repository)
            }
            (None, None) => {
                tracing::warn!("DATABASE_URL not set, serving an empty in-memory node store");
                Arc::new(InMemoryNodeRepository::default())
            }
        };

        Ok(Context::new(self.app, self.cache, nodes))
    }
}
