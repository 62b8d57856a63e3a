pub use fcs_boundary::*;

use fcs_core::usecases;
use serde_json::Value;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment { film_id, nik, text } = from;
        usecases::NewComment {
            film_id: film_id_number(&film_id),
            nik: string_or_empty(nik),
            text: string_or_empty(text),
        }
    }

    // Anything but a JSON string counts as empty text.
    fn string_or_empty(value: Value) -> String {
        match value {
            Value::String(s) => s,
            _ => String::new(),
        }
    }

    /// Only JSON numbers are accepted as film ids.
    pub fn film_id_number(value: &Value) -> Option<f64> {
        value.as_f64()
    }

    /// Returns `None` if the value is not an array.
    pub fn film_id_numbers(value: &Value) -> Option<Vec<Option<f64>>> {
        value
            .as_array()
            .map(|ids| ids.iter().map(film_id_number).collect())
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn comment_counts(from: usecases::CommentCounts) -> CommentCounts {
        from.into_iter()
            .map(|(film_id, count)| (film_id.into(), count))
            .collect()
    }
}
