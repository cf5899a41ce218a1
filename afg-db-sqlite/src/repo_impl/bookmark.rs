use super::*;

impl<'a> CollectionRepo for DbReadOnly<'a> {
    fn create_bookmark(&self, _user: &EmailAddress, _question_id: &Id) -> Result<()> {
        unreachable!();
    }
    fn delete_bookmark(&self, _user: &EmailAddress, _question_id: &Id) -> Result<()> {
        unreachable!();
    }

    fn is_question_saved(&self, user: &EmailAddress, question_id: &Id) -> Result<bool> {
        is_question_saved(&mut self.conn.borrow_mut(), user, question_id)
    }
    fn saved_questions(
        &self,
        user: &EmailAddress,
        text: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Question>> {
        saved_questions(&mut self.conn.borrow_mut(), user, text, pagination)
    }

    fn delete_bookmarks_of_question(&self, _question_id: &Id) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> CollectionRepo for DbReadWrite<'a> {
    fn create_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        create_bookmark(&mut self.conn.borrow_mut(), user, question_id)
    }
    fn delete_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        delete_bookmark(&mut self.conn.borrow_mut(), user, question_id)
    }

    fn is_question_saved(&self, user: &EmailAddress, question_id: &Id) -> Result<bool> {
        is_question_saved(&mut self.conn.borrow_mut(), user, question_id)
    }
    fn saved_questions(
        &self,
        user: &EmailAddress,
        text: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Question>> {
        saved_questions(&mut self.conn.borrow_mut(), user, text, pagination)
    }

    fn delete_bookmarks_of_question(&self, question_id: &Id) -> Result<usize> {
        delete_bookmarks_of_question(&mut self.conn.borrow_mut(), question_id)
    }
}

impl<'a> CollectionRepo for DbConnection<'a> {
    fn create_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        create_bookmark(&mut self.conn.borrow_mut(), user, question_id)
    }
    fn delete_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()> {
        delete_bookmark(&mut self.conn.borrow_mut(), user, question_id)
    }

    fn is_question_saved(&self, user: &EmailAddress, question_id: &Id) -> Result<bool> {
        is_question_saved(&mut self.conn.borrow_mut(), user, question_id)
    }
    fn saved_questions(
        &self,
        user: &EmailAddress,
        text: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Question>> {
        saved_questions(&mut self.conn.borrow_mut(), user, text, pagination)
    }

    fn delete_bookmarks_of_question(&self, question_id: &Id) -> Result<usize> {
        delete_bookmarks_of_question(&mut self.conn.borrow_mut(), question_id)
    }
}

fn create_bookmark(conn: &mut SqliteConnection, user: &EmailAddress, question_id: &Id) -> Result<()> {
    let user_id = resolve_user_id_by_email(conn, user)?;
    let question_rowid = resolve_question_rowid(conn, question_id)?;
    let new_bookmark = models::NewBookmark {
        user_id,
        question_rowid,
        created_at: Timestamp::now().into_millis(),
    };
    diesel::insert_into(schema::bookmarks::table)
        .values(&new_bookmark)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_bookmark(conn: &mut SqliteConnection, user: &EmailAddress, question_id: &Id) -> Result<()> {
    use schema::bookmarks::dsl;
    let user_id = resolve_user_id_by_email(conn, user)?;
    let question_rowid = resolve_question_rowid(conn, question_id)?;
    let count = diesel::delete(
        dsl::bookmarks
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::question_rowid.eq(question_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn is_question_saved(
    conn: &mut SqliteConnection,
    user: &EmailAddress,
    question_id: &Id,
) -> Result<bool> {
    use schema::{bookmarks, questions, users};
    let count = bookmarks::table
        .inner_join(users::table)
        .inner_join(questions::table)
        .filter(users::email.eq(user.as_str()))
        .filter(questions::id.eq(question_id.as_str()))
        .count()
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn saved_questions(
    conn: &mut SqliteConnection,
    user: &EmailAddress,
    text: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Question>> {
    use schema::{bookmarks, questions, users};
    let user_id = resolve_user_id_by_email(conn, user)?;
    let mut stmt = bookmarks::table
        .inner_join(questions::table.inner_join(users::table))
        .select(joined_question_columns!())
        .filter(bookmarks::user_id.eq(user_id))
        .order(bookmarks::created_at.desc())
        .into_boxed();
    if let Some(text) = text {
        let pattern = format!("%{text}%");
        stmt = stmt.filter(
            questions::title
                .like(pattern.clone())
                .or(questions::content.like(pattern)),
        );
    }
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    let joined = stmt
        .load::<models::JoinedQuestion>(conn)
        .map_err(from_diesel_err)?;
    load_joined_questions(conn, joined)
}

fn delete_bookmarks_of_question(conn: &mut SqliteConnection, question_id: &Id) -> Result<usize> {
    use schema::bookmarks::dsl;
    let question_rowid = resolve_question_rowid(conn, question_id)?;
    diesel::delete(dsl::bookmarks.filter(dsl::question_rowid.eq(question_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)
}
