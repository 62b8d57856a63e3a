use super::*;

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewCommentRecord) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_film(
        &self,
        film_id: FilmId,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>> {
        load_comments_of_film(&mut self.conn.borrow_mut(), film_id, pagination)
    }
    fn count_comments_of_film(&self, film_id: FilmId) -> Result<u64> {
        count_comments_of_film(&mut self.conn.borrow_mut(), film_id)
    }
}

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewCommentRecord) -> Result<Id> {
        unreachable!();
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_film(
        &self,
        film_id: FilmId,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>> {
        load_comments_of_film(&mut self.conn.borrow_mut(), film_id, pagination)
    }
    fn count_comments_of_film(&self, film_id: FilmId) -> Result<u64> {
        count_comments_of_film(&mut self.conn.borrow_mut(), film_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: NewCommentRecord) -> Result<Id> {
    let NewCommentRecord {
        film_id,
        nik,
        text,
        created_at,
    } = comment;
    let id = Id::new();
    let new_film_comment = models::NewFilmComment {
        id: id.as_str(),
        film_id: film_id.into(),
        nik: &nik,
        text: &text,
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::film_comment::table)
        .values(&new_film_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(id)
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::film_comment::dsl;
    Ok(schema::film_comment::table
        .filter(dsl::id.eq(id))
        .first::<models::FilmComment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_of_film(
    conn: &mut SqliteConnection,
    film_id: FilmId,
    pagination: &Pagination,
) -> Result<Vec<Comment>> {
    use schema::film_comment::dsl;
    let mut query = schema::film_comment::table
        .filter(dsl::film_id.eq(i64::from(film_id)))
        // Equal timestamps are ordered by insertion, newest first
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    // SQLite requires a LIMIT if an OFFSET is given
    let limit = pagination.limit.map(saturating_i64).unwrap_or(i64::MAX);
    query = query.limit(limit);
    if let Some(offset) = pagination.offset {
        query = query.offset(saturating_i64(offset));
    }
    Ok(query
        .load::<models::FilmComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_comments_of_film(conn: &mut SqliteConnection, film_id: FilmId) -> Result<u64> {
    use schema::film_comment::dsl;
    let count = schema::film_comment::table
        .filter(dsl::film_id.eq(i64::from(film_id)))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count >= 0);
    Ok(count as u64)
}
