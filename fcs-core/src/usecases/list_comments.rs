use super::prelude::*;

pub const DEFAULT_OFFSET: &str = "0";
pub const DEFAULT_LIMIT: &str = "10";

/// Parse the raw `offset` and `limit` query values.
///
/// Both must be non-negative integers and the limit must not be zero.
pub fn parse_pagination(offset: &str, limit: &str) -> Result<Pagination> {
    let offset = offset
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidPagination)?;
    let limit = limit
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidPagination)?;
    if limit == 0 {
        return Err(Error::InvalidPagination);
    }
    Ok(Pagination {
        offset: Some(offset),
        limit: Some(limit),
    })
}

/// Load the comments of a film, newest first.
///
/// Films without comments and unknown films both
/// result in an empty list.
pub fn list_comments<R: CommentRepo>(
    repo: &R,
    film_id: &str,
    offset: &str,
    limit: &str,
) -> Result<Vec<Comment>> {
    let pagination = parse_pagination(offset, limit)?;
    let film_id = film_id
        .parse::<FilmId>()
        .map_err(|_| Error::InvalidFilmId)?;
    Ok(repo.load_comments_of_film(film_id, &pagination)?)
}
