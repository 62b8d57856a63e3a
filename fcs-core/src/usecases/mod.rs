mod count_comments;
mod create_comment;
mod error;
mod list_comments;

#[cfg(test)]
pub mod tests;

pub use self::{count_comments::*, create_comment::*, error::Error, list_comments::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
