use std::{collections::BTreeMap, panic, thread};

use super::prelude::*;
use crate::util::validate;

pub type CommentCounts = BTreeMap<FilmId, u64>;

// Upper bound for the number of count queries that run at the same time.
const MAX_CONCURRENT_COUNTS: usize = 16;

/// Count the comments of multiple films concurrently.
///
/// Every film id is validated and counted in its own task.
/// If any task fails the whole operation fails with the error
/// of the first failing film id in input order. Duplicate ids
/// are counted more than once but collapse into a single entry.
///
/// The counting function is shared between all tasks and
/// must therefore be `Sync`. Each invocation should obtain
/// its own database connection.
pub fn count_comments_by_films<F>(
    film_ids: &[Option<f64>],
    count_comments_of_film: F,
) -> Result<CommentCounts>
where
    F: Fn(FilmId) -> Result<u64> + Sync,
{
    let count_comments_of_film = &count_comments_of_film;
    let mut counts = CommentCounts::new();
    for chunk in film_ids.chunks(MAX_CONCURRENT_COUNTS) {
        let results: Vec<Result<(FilmId, u64)>> = thread::scope(|scope| {
            let tasks: Vec<_> = chunk
                .iter()
                .map(|&film_id| {
                    scope.spawn(move || -> Result<(FilmId, u64)> {
                        let film_id = validate::film_id_from_number(film_id)
                            .ok_or(Error::InvalidFilmId)?;
                        let count = count_comments_of_film(film_id)?;
                        Ok((film_id, count))
                    })
                })
                .collect();
            tasks
                .into_iter()
                .map(|task| task.join().unwrap_or_else(|err| panic::resume_unwind(err)))
                .collect()
        });
        for result in results {
            let (film_id, count) = result?;
            counts.insert(film_id, count);
        }
    }
    Ok(counts)
}
