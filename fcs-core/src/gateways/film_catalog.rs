use fcs_entities::film::FilmId;

/// The answer of the film catalog about a single film.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmExistence {
    Exists,
    NotExists,
    /// The catalog could not be asked, e.g. it is unreachable
    /// or did not respond in time.
    Unknown,
}

pub trait FilmCatalogGateway {
    fn film_existence(&self, film_id: FilmId) -> FilmExistence;
}
