use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{net::IpAddr, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("film-comment-service.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub film_catalog: Option<FilmCatalog>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilmCatalog {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for FilmCatalog {
    fn default() -> Self {
        Config::default()
            .film_catalog
            .expect("Film catalog configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.film_catalog.is_some());
    }

    #[test]
    fn default_film_catalog_config() {
        let cfg = FilmCatalog::default();
        assert_eq!(cfg.base_url, "http://localhost:8086");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str("[webserver]\naddress = \"0.0.0.0\"\nport = 80\ncors = true").unwrap();
        assert!(cfg.db.is_none());
        assert!(cfg.film_catalog.is_none());
        let webserver = cfg.webserver.unwrap();
        assert_eq!(webserver.port, 80);
        assert!(webserver.cors);
    }

    #[test]
    fn parse_timeout_with_units() {
        let cfg: Config =
            toml::from_str("[film-catalog]\nbase-url = \"http://films\"\ntimeout = \"250ms\"")
                .unwrap();
        assert_eq!(
            cfg.film_catalog.unwrap().timeout,
            Duration::from_millis(250)
        );
    }
}
