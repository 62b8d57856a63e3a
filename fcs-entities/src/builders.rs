pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, film::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn film_id(mut self, film_id: i64) -> Self {
            self.comment.film_id = FilmId::new(film_id);
            self
        }
        pub fn nik(mut self, nik: &str) -> Self {
            self.comment.nik = nik.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> Self::Build {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    film_id: FilmId::new(1),
                    nik: "nik".into(),
                    text: "text".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
