use anyhow::anyhow;
use rocket::response::status;

use super::*;

const MISSING_FILM_ID: &str = r#"Query parameter "id" is required"#;
const FILM_IDS_NOT_AN_ARRAY: &str = "Film IDs must be provided as an array";

#[post("/comments", data = "<new_comment>")]
pub async fn post_comment(
    connections: sqlite::Connections,
    film_catalog: FilmCatalog,
    new_comment: JsonResult<'_, json::NewComment>,
) -> result::Result<status::Custom<Json<json::CommentCreated>>, ApiError> {
    let new_comment = from_json::new_comment(new_comment?.into_inner());
    // Asking the film catalog blocks the current thread
    let id = rocket::tokio::task::spawn_blocking(move || {
        flows::create_comment(&connections, &*film_catalog, new_comment)
    })
    .await
    .map_err(|err| anyhow!("Comment creation task failed: {err}"))??;
    Ok(status::Custom(Status::Created, Json(id.into())))
}

#[get("/comments?<id>&<from>&<size>")]
pub fn get_comments(
    connections: sqlite::Connections,
    id: Option<String>,
    from: Option<String>,
    size: Option<String>,
) -> Result<Vec<json::Comment>> {
    // Empty values are treated like missing values
    let Some(film_id) = id.filter(|id| !id.is_empty()) else {
        log::warn!("{MISSING_FILM_ID}");
        return Err(ApiError::OtherWithStatus(
            anyhow!(MISSING_FILM_ID),
            Status::BadRequest,
        ));
    };
    let from = from.filter(|from| !from.is_empty());
    let size = size.filter(|size| !size.is_empty());
    let comments = flows::list_comments(
        &connections,
        &film_id,
        from.as_deref().unwrap_or(usecases::DEFAULT_OFFSET),
        size.as_deref().unwrap_or(usecases::DEFAULT_LIMIT),
    )?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

#[post("/comments/_counts", data = "<counts_request>")]
pub fn post_comment_counts(
    connections: sqlite::Connections,
    counts_request: JsonResult<json::CommentCountsRequest>,
) -> Result<json::CommentCounts> {
    let json::CommentCountsRequest { film_ids } = counts_request?.into_inner();
    let Some(film_ids) = from_json::film_id_numbers(&film_ids) else {
        log::warn!("{FILM_IDS_NOT_AN_ARRAY}");
        return Err(ApiError::OtherWithStatus(
            anyhow!(FILM_IDS_NOT_AN_ARRAY),
            Status::BadRequest,
        ));
    };
    let counts = flows::count_comments_by_films(&connections, &film_ids)?;
    Ok(Json(to_json::comment_counts(counts)))
}
