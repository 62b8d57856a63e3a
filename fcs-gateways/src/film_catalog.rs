use std::time::Duration;

use anyhow::Result as Fallible;
use fcs_core::{
    entities::FilmId,
    gateways::film_catalog::{FilmCatalogGateway, FilmExistence},
};
use reqwest::{blocking::Client, header, StatusCode};

const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// Asks the film catalog service whether a film exists.
#[derive(Debug, Clone)]
pub struct HttpFilmCatalog {
    client: Client,
    base_url: String,
}

impl HttpFilmCatalog {
    pub fn try_new(base_url: &str, timeout: Duration) -> Fallible<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn film_url(&self, film_id: FilmId) -> String {
        format!("{}/api/v1/films/{film_id}", self.base_url)
    }
}

fn existence_from_status(status: StatusCode) -> FilmExistence {
    if status.is_success() {
        FilmExistence::Exists
    } else {
        FilmExistence::NotExists
    }
}

impl FilmCatalogGateway for HttpFilmCatalog {
    fn film_existence(&self, film_id: FilmId) -> FilmExistence {
        let url = self.film_url(film_id);
        log::debug!("Requesting film {film_id} from {url}");
        match self
            .client
            .get(&url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .send()
        {
            Ok(response) => {
                let status = response.status();
                let existence = existence_from_status(status);
                if existence != FilmExistence::Exists {
                    log::info!("Film {film_id} not found in catalog: {status}");
                }
                existence
            }
            Err(err) => {
                log::warn!("Failed to request film {film_id} from catalog: {err}");
                FilmExistence::Unknown
            }
        }
    }
}
