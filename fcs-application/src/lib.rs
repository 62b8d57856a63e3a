#[macro_use]
extern crate log;

mod count_comments;
mod create_comment;
mod list_comments;

pub mod prelude {
    pub use super::{count_comments::*, create_comment::*, list_comments::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use fcs_core::{
    entities::*,
    gateways::film_catalog::FilmCatalogGateway,
    repositories::{Error as RepoError, *},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use fcs_db_sqlite::Connections;
}
