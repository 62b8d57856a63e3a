
pub mod prelude {

    use std::collections::HashSet;

    pub use fcs_core::{
        entities::*,
        gateways::film_catalog::{FilmCatalogGateway, FilmExistence},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct FilmCatalogStub {
        films: HashSet<FilmId>,
    }

    impl FilmCatalogGateway for FilmCatalogStub {
        fn film_existence(&self, film_id: FilmId) -> FilmExistence {
            if self.films.contains(&film_id) {
                FilmExistence::Exists
            } else {
                FilmExistence::NotExists
            }
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub film_catalog: FilmCatalogStub,
    }

    impl BackendFixture {
        pub fn new(films: &[i64]) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            fcs_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                film_catalog: FilmCatalogStub {
                    films: films.iter().copied().map(FilmId::new).collect(),
                },
            }
        }

        pub fn try_create_comment(
            &self,
            film_id: f64,
            nik: &str,
            text: &str,
        ) -> Result<Id, AppError> {
            let new_comment = usecases::NewComment {
                film_id: Some(film_id),
                nik: nik.into(),
                text: text.into(),
            };
            flows::create_comment(&self.db_connections, &self.film_catalog, new_comment)
        }

        pub fn create_comment(&self, film_id: f64, nik: &str, text: &str) -> Id {
            self.try_create_comment(film_id, nik, text).unwrap()
        }

        pub fn try_get_comment(&self, id: &str) -> Option<Comment> {
            match self.db_connections.shared().unwrap().load_comment(id) {
                Ok(comment) => Some(comment),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn count_stored_comments(&self, film_id: i64) -> u64 {
            self.db_connections
                .shared()
                .unwrap()
                .count_comments_of_film(FilmId::new(film_id))
                .unwrap()
        }
    }
}
