#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use fcs_core::entities::*;

use super::schema::*;

#[rustfmt::skip]
#[derive(Insertable)]
#[diesel(table_name = film_comment)]
pub struct NewFilmComment<'a> {
    pub id         : &'a str,
    pub film_id    : i64,
    pub nik        : &'a str,
    pub text       : &'a str,
    pub created_at : i64,
}

#[rustfmt::skip]
#[derive(Queryable)]
pub struct FilmComment {
    pub rowid      : i64,
    pub id         : String,
    pub film_id    : i64,
    pub nik        : String,
    pub text       : String,
    pub created_at : i64,
}

impl From<FilmComment> for Comment {
    fn from(from: FilmComment) -> Self {
        let FilmComment {
            rowid: _,
            id,
            film_id,
            nik,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            film_id: film_id.into(),
            nik,
            text,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}
