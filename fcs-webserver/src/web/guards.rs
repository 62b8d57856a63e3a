use core::ops::Deref;
use std::sync::Arc;

use fcs_core::gateways::film_catalog::FilmCatalogGateway;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

pub struct Version(pub &'static str);

#[derive(Clone)]
pub struct FilmCatalog(pub Arc<dyn FilmCatalogGateway + Send + Sync>);

impl Deref for FilmCatalog {
    type Target = dyn FilmCatalogGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for FilmCatalog {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let film_catalog = try_outcome!(request.guard::<&State<FilmCatalog>>().await);
        Outcome::Success(film_catalog.inner().clone())
    }
}
