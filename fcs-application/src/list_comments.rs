use super::*;

pub fn list_comments(
    connections: &sqlite::Connections,
    film_id: &str,
    offset: &str,
    limit: &str,
) -> Result<Vec<Comment>> {
    let db = connections.shared()?;
    Ok(usecases::list_comments(&db, film_id, offset, limit)?)
}
