use std::cell::{Cell, RefCell};

use super::prelude::*;
use crate::{
    gateways::film_catalog::{FilmCatalogGateway, FilmExistence},
    repositories::Error as RepoError,
};

pub mod builders;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
}

impl CommentRepo for MockDb {
    fn create_comment(&self, record: NewCommentRecord) -> RepoResult<Id> {
        let NewCommentRecord {
            film_id,
            nik,
            text,
            created_at,
        } = record;
        let id = Id::new();
        self.comments.borrow_mut().push(Comment {
            id: id.clone(),
            film_id,
            nik,
            text,
            created_at,
        });
        Ok(id)
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_film(
        &self,
        film_id: FilmId,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Comment>> {
        // Insertion order is kept for equal timestamps, newest first.
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.film_id == film_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(comments.into_iter().skip(offset).take(limit).collect())
    }

    fn count_comments_of_film(&self, film_id: FilmId) -> RepoResult<u64> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.film_id == film_id)
            .count() as u64)
    }
}

pub struct FilmCatalogStub {
    films: Option<Vec<FilmId>>,
    requests: Cell<usize>,
}

impl FilmCatalogStub {
    pub fn with_films(films: &[i64]) -> Self {
        Self {
            films: Some(films.iter().copied().map(FilmId::new).collect()),
            requests: Cell::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            films: None,
            requests: Cell::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl FilmCatalogGateway for FilmCatalogStub {
    fn film_existence(&self, film_id: FilmId) -> FilmExistence {
        self.requests.set(self.requests.get() + 1);
        match &self.films {
            Some(films) if films.contains(&film_id) => FilmExistence::Exists,
            Some(_) => FilmExistence::NotExists,
            None => FilmExistence::Unknown,
        }
    }
}
