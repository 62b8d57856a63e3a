use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "film-comment-service.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_FILM_CATALOG_URL: &str = "FILM_CATALOG_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub film_catalog: FilmCatalog,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: PathBuf = match file_path {
            Some(p) => p.as_ref().to_path_buf(),
            None => {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
            }
        };

        let raw_config = match fs::read_to_string(&file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(db_url) = lookup(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(base_url) = lookup(ENV_NAME_FILM_CATALOG_URL) {
            self.film_catalog.base_url = base_url;
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct FilmCatalog {
    pub base_url: String,
    /// Upper bound of a single existence query.
    pub timeout: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            film_catalog,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::FilmCatalog { base_url, timeout } = film_catalog.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(anyhow!("Missing film catalog base URL"));
        }
        let film_catalog = FilmCatalog { base_url, timeout };

        Ok(Self {
            db,
            webserver,
            film_catalog,
        })
    }
}
