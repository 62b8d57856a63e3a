use super::prelude::*;
use crate::{
    gateways::film_catalog::{FilmCatalogGateway, FilmExistence},
    util::validate,
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    // `None` if missing or not a number
    pub film_id : Option<f64>,
    pub nik     : String,
    pub text    : String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub film_id: FilmId,
    pub nik: String,
    pub text: String,
}

/// Check a new comment before it is stored.
///
/// The rules are applied in a fixed order and the
/// first violated rule is reported:
///
/// 1. The film id must be an integer.
/// 2. The film catalog must confirm that the film exists.
/// 3. The nik must not be blank.
/// 4. The text must not be blank.
pub fn validate_new_comment<G>(film_catalog: &G, new_comment: NewComment) -> Result<ValidComment>
where
    G: FilmCatalogGateway + ?Sized,
{
    let NewComment { film_id, nik, text } = new_comment;
    let film_id = validate::film_id_from_number(film_id).ok_or(Error::InvalidFilmId)?;
    match film_catalog.film_existence(film_id) {
        FilmExistence::Exists => {}
        FilmExistence::NotExists => {
            return Err(Error::FilmNotFound(film_id));
        }
        FilmExistence::Unknown => {
            // An unreachable catalog is treated like a missing film.
            log::warn!("Unable to verify that film {film_id} exists");
            return Err(Error::FilmNotFound(film_id));
        }
    }
    let nik = validate::non_blank(&nik).ok_or(Error::EmptyNik)?.to_owned();
    let text = validate::non_blank(&text).ok_or(Error::EmptyText)?.to_owned();
    Ok(ValidComment { film_id, nik, text })
}

#[derive(Debug, Clone)]
pub struct Storable(NewCommentRecord);

impl Storable {
    pub fn film_id(&self) -> FilmId {
        self.0.film_id
    }
}

pub fn prepare_new_comment<G>(film_catalog: &G, new_comment: NewComment) -> Result<Storable>
where
    G: FilmCatalogGateway + ?Sized,
{
    let ValidComment { film_id, nik, text } = validate_new_comment(film_catalog, new_comment)?;
    let created_at = Timestamp::now();
    Ok(Storable(NewCommentRecord {
        film_id,
        nik,
        text,
        created_at,
    }))
}

pub fn store_new_comment<R: CommentRepo>(repo: &R, storable: Storable) -> Result<Id> {
    let Storable(record) = storable;
    let id = repo.create_comment(record)?;
    debug_assert!(id.is_valid());
    Ok(id)
}
