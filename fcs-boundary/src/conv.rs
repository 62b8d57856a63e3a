use super::*;
use fcs_entities as e;

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
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
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::id::Id> for CommentCreated {
    fn from(id: e::id::Id) -> Self {
        Self { id: id.into() }
    }
}
