#![allow(proc_macro_derive_resolution_fallback)]

#[macro_use]
extern crate log;

use std::sync::Arc;

use fcs_core::gateways::film_catalog::FilmCatalogGateway;
use fcs_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    film_catalog: Arc<dyn FilmCatalogGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections.into(), cfg, film_catalog, version).await;
}
