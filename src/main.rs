use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;

use fcs_core::gateways::film_catalog::FilmCatalogGateway;
use fcs_db_sqlite::Connections;
use fcs_gateways::film_catalog::HttpFilmCatalog;

mod config;

/// REST service for comments on films of an external film catalog.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,
    /// Allow cross-origin requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file)?;
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, u32::from(cfg.db.conn_pool_size))?;
    fcs_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    log::info!("Using film catalog at {}", cfg.film_catalog.base_url);
    let film_catalog: Arc<dyn FilmCatalogGateway + Send + Sync> = Arc::new(
        HttpFilmCatalog::try_new(&cfg.film_catalog.base_url, cfg.film_catalog.timeout)?,
    );

    let web_cfg = fcs_webserver::Cfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
        enable_cors: cfg.webserver.enable_cors,
    };
    // The blocking HTTP client must be dropped outside of the async runtime.
    rocket::execute(fcs_webserver::run(
        connections,
        web_cfg,
        Arc::clone(&film_catalog),
        env!("CARGO_PKG_VERSION"),
    ));
    drop(film_catalog);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_cli_flags() {
        let args =
            Args::try_parse_from(["film-comment-service", "--config-file", "cfg.toml", "--enable-cors"])
                .unwrap();
        assert_eq!(args.config_file, Some(PathBuf::from("cfg.toml")));
        assert!(args.enable_cors);
    }
}
