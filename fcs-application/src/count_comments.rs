use super::*;

/// Count the comments of all given films.
///
/// Every film is counted on a separate thread
/// with its own read-only database connection.
pub fn count_comments_by_films(
    connections: &sqlite::Connections,
    film_ids: &[Option<f64>],
) -> Result<usecases::CommentCounts> {
    let counts = usecases::count_comments_by_films(film_ids, |film_id| {
        let db = connections.shared().map_err(RepoError::Other)?;
        Ok(db.count_comments_of_film(film_id)?)
    })
    .map_err(|err| {
        let err = usecases::Error::counting_failed(err);
        warn!("{err}");
        err
    })?;
    debug!("Counted comments of {} film(s)", counts.len());
    Ok(counts)
}
