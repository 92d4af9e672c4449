use std::path::PathBuf;

use food_store::MongoSettings;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_MONGODB_DATABASE: &str = "Wikidb";
const DEFAULT_MONGODB_COLLECTION: &str = "articles";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got `{0}`")]
    InvalidPort(String),

    #[error("FOOD_STORE must be either `mongodb` or `memory`, got `{0}`")]
    UnknownStore(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreBackend,
    pub mongo: MongoSettings,
    pub public_dir: PathBuf,
}

impl Config {
    /// Reads the process environment, including a `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let store = match var("FOOD_STORE", "mongodb").to_ascii_lowercase().as_str() {
            "mongodb" => StoreBackend::MongoDb,
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::UnknownStore(other.to_owned())),
        };

        let mongo = MongoSettings {
            uri: var("MONGODB_URI", DEFAULT_MONGODB_URI),
            database: var("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
            collection: var("MONGODB_COLLECTION", DEFAULT_MONGODB_COLLECTION),
        };

        Ok(Self {
            port,
            store,
            mongo,
            public_dir: PathBuf::from(var("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
        })
    }
}
