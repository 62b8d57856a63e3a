// Low-level database access traits.
// Comments are append-only: there is no update or delete.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// A validated comment that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentRecord {
    pub film_id    : FilmId,
    pub nik        : String,
    pub text       : String,
    pub created_at : Timestamp,
}

pub trait CommentRepo {
    /// Store a new comment and return the identifier
    /// that has been assigned by the store.
    fn create_comment(&self, comment: NewCommentRecord) -> Result<Id>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Newest first
    fn load_comments_of_film(
        &self,
        film_id: FilmId,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>>;

    fn count_comments_of_film(&self, film_id: FilmId) -> Result<u64>;
}
