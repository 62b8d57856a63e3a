use std::{net::IpAddr, sync::Arc};

use fcs_core::gateways::film_catalog::FilmCatalogGateway;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Gateways {
    film_catalog: Arc<dyn FilmCatalogGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Gateways { film_catalog } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let film_catalog = guards::FilmCatalog(film_catalog);
    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(film_catalog).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn rocket_cfg(cfg: &Cfg) -> RocketCfg {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = cfg.address;
    rocket_cfg.port = cfg.port;
    rocket_cfg
}

pub async fn run(
    db: sqlite::Connections,
    cfg: Cfg,
    film_catalog: Arc<dyn FilmCatalogGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg(&cfg)),
        version,
    };
    let gateways = Gateways { film_catalog };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if cfg.enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        info!("CORS is enabled");
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
