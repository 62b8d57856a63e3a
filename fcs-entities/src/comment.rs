use crate::{film::*, id::*, time::*};

/// A comment about a film.
///
/// Comments are immutable after they have been stored.
/// The `id` is assigned by the store and the `created_at`
/// time stamp by the service, never by the author.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub film_id    : FilmId,
    pub nik        : String,
    pub text       : String,
    pub created_at : Timestamp,
}
