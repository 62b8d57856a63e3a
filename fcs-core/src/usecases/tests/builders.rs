pub use self::new_comment_builder::*;
pub use fcs_entities::builders::Builder;

pub mod new_comment_builder {

    use super::*;
    use crate::usecases::NewComment;

    #[derive(Debug)]
    pub struct NewCommentBuild {
        new_comment: NewComment,
    }

    impl NewCommentBuild {
        pub fn film_id(mut self, film_id: f64) -> Self {
            self.new_comment.film_id = Some(film_id);
            self
        }
        pub fn no_film_id(mut self) -> Self {
            self.new_comment.film_id = None;
            self
        }
        pub fn nik(mut self, nik: &str) -> Self {
            self.new_comment.nik = nik.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.new_comment.text = text.into();
            self
        }
        pub fn finish(self) -> NewComment {
            self.new_comment
        }
    }

    impl Builder for NewComment {
        type Build = NewCommentBuild;
        fn build() -> NewCommentBuild {
            NewCommentBuild {
                new_comment: NewComment {
                    film_id: Some(1.0),
                    nik: "nik".into(),
                    text: "text".into(),
                },
            }
        }
    }
}
