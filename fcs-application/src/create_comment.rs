use super::*;

pub fn create_comment<G>(
    connections: &sqlite::Connections,
    film_catalog: &G,
    new_comment: usecases::NewComment,
) -> Result<Id>
where
    G: FilmCatalogGateway + ?Sized,
{
    // The film catalog is queried before a connection
    // with write access is acquired.
    usecases::prepare_new_comment(film_catalog, new_comment)
        .and_then(|storable| {
            let film_id = storable.film_id();
            let connection = connections.exclusive().map_err(RepoError::Other)?;
            let id = usecases::store_new_comment(&connection, storable)?;
            debug!("Created comment {id} of film {film_id}");
            Ok(id)
        })
        .map_err(|err| {
            let err = usecases::Error::creation_failed(err);
            warn!("{err}");
            err.into()
        })
}
