use super::*;

// The select clause that feeds `models::JoinedAnswer`.
macro_rules! joined_answer_columns {
    () => {
        (
            schema::answers::id,
            schema::answers::created_at,
            schema::answers::content,
            schema::answers::up_votes,
            schema::answers::down_votes,
            schema::questions::id,
            schema::users::username,
        )
    };
}

impl<'a> AnswerRepo for DbReadOnly<'a> {
    fn create_answer(&self, _answer: &Answer) -> Result<()> {
        unreachable!();
    }
    fn delete_answer(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_answer(&self, id: &Id) -> Result<Answer> {
        get_answer(&mut self.conn.borrow_mut(), id)
    }
    fn answers_of_question(
        &self,
        question_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Answer>> {
        answers_of_question(&mut self.conn.borrow_mut(), question_id, pagination)
    }
    fn answers_of_user(&self, username: &str, pagination: &Pagination) -> Result<Vec<Answer>> {
        answers_of_user(&mut self.conn.borrow_mut(), username, pagination)
    }

    fn search_answers(&self, text: &str, limit: u64) -> Result<Vec<Answer>> {
        search_answers(&mut self.conn.borrow_mut(), text, limit)
    }

    fn adjust_vote_count(&self, _id: &Id, _direction: VoteDirection, _delta: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> AnswerRepo for DbReadWrite<'a> {
    fn create_answer(&self, answer: &Answer) -> Result<()> {
        create_answer(&mut self.conn.borrow_mut(), answer)
    }
    fn delete_answer(&self, id: &Id) -> Result<()> {
        delete_answer(&mut self.conn.borrow_mut(), id)
    }

    fn get_answer(&self, id: &Id) -> Result<Answer> {
        get_answer(&mut self.conn.borrow_mut(), id)
    }
    fn answers_of_question(
        &self,
        question_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Answer>> {
        answers_of_question(&mut self.conn.borrow_mut(), question_id, pagination)
    }
    fn answers_of_user(&self, username: &str, pagination: &Pagination) -> Result<Vec<Answer>> {
        answers_of_user(&mut self.conn.borrow_mut(), username, pagination)
    }

    fn search_answers(&self, text: &str, limit: u64) -> Result<Vec<Answer>> {
        search_answers(&mut self.conn.borrow_mut(), text, limit)
    }

    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        adjust_vote_count(&mut self.conn.borrow_mut(), id, direction, delta)
    }
}

impl<'a> AnswerRepo for DbConnection<'a> {
    fn create_answer(&self, answer: &Answer) -> Result<()> {
        create_answer(&mut self.conn.borrow_mut(), answer)
    }
    fn delete_answer(&self, id: &Id) -> Result<()> {
        delete_answer(&mut self.conn.borrow_mut(), id)
    }

    fn get_answer(&self, id: &Id) -> Result<Answer> {
        get_answer(&mut self.conn.borrow_mut(), id)
    }
    fn answers_of_question(
        &self,
        question_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Answer>> {
        answers_of_question(&mut self.conn.borrow_mut(), question_id, pagination)
    }
    fn answers_of_user(&self, username: &str, pagination: &Pagination) -> Result<Vec<Answer>> {
        answers_of_user(&mut self.conn.borrow_mut(), username, pagination)
    }

    fn search_answers(&self, text: &str, limit: u64) -> Result<Vec<Answer>> {
        search_answers(&mut self.conn.borrow_mut(), text, limit)
    }

    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        adjust_vote_count(&mut self.conn.borrow_mut(), id, direction, delta)
    }
}

fn create_answer(conn: &mut SqliteConnection, a: &Answer) -> Result<()> {
    let question_rowid = resolve_question_rowid(conn, &a.question_id)?;
    let created_by = resolve_user_id_by_username(conn, &a.author)?;
    let new_answer = models::NewAnswer {
        id: a.id.as_str(),
        question_rowid,
        created_at: a.created_at.into_millis(),
        created_by,
        content: &a.content,
        up_votes: a.up_votes as i64,
        down_votes: a.down_votes as i64,
    };
    diesel::insert_into(schema::answers::table)
        .values(&new_answer)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_answer(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::answers::dsl;
    let count = diesel::delete(dsl::answers.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_answer(conn: &mut SqliteConnection, id: &Id) -> Result<Answer> {
    use schema::{answers, questions, users};
    Ok(answers::table
        .inner_join(questions::table)
        .inner_join(users::table)
        .select(joined_answer_columns!())
        .filter(answers::id.eq(id.as_str()))
        .first::<models::JoinedAnswer>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn answers_of_question(
    conn: &mut SqliteConnection,
    question_id: &Id,
    pagination: &Pagination,
) -> Result<Vec<Answer>> {
    use schema::{answers, questions, users};
    let mut stmt = answers::table
        .inner_join(questions::table)
        .inner_join(users::table)
        .select(joined_answer_columns!())
        .filter(questions::id.eq(question_id.as_str()))
        // Answers are listed chronologically.
        .order(answers::created_at.asc())
        .then_order_by(answers::rowid.asc())
        .into_boxed();
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    Ok(stmt
        .load::<models::JoinedAnswer>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn answers_of_user(
    conn: &mut SqliteConnection,
    username: &str,
    pagination: &Pagination,
) -> Result<Vec<Answer>> {
    use schema::{answers, questions, users};
    let mut stmt = answers::table
        .inner_join(questions::table)
        .inner_join(users::table)
        .select(joined_answer_columns!())
        .filter(users::username.eq(username.to_string()))
        .order(answers::created_at.desc())
        .then_order_by(answers::rowid.desc())
        .into_boxed();
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    Ok(stmt
        .load::<models::JoinedAnswer>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn search_answers(conn: &mut SqliteConnection, text: &str, limit: u64) -> Result<Vec<Answer>> {
    use schema::{answers, questions, users};
    let pattern = format!("%{text}%");
    Ok(answers::table
        .inner_join(questions::table)
        .inner_join(users::table)
        .select(joined_answer_columns!())
        .filter(answers::content.like(pattern))
        .order(answers::created_at.desc())
        .limit(limit as i64)
        .load::<models::JoinedAnswer>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn adjust_vote_count(
    conn: &mut SqliteConnection,
    id: &Id,
    direction: VoteDirection,
    delta: i64,
) -> Result<()> {
    use schema::answers::dsl;
    let count = match direction {
        VoteDirection::Up => diesel::update(dsl::answers.filter(dsl::id.eq(id.as_str())))
            .set(dsl::up_votes.eq(dsl::up_votes + delta))
            .execute(conn),
        VoteDirection::Down => diesel::update(dsl::answers.filter(dsl::id.eq(id.as_str())))
            .set(dsl::down_votes.eq(dsl::down_votes + delta))
            .execute(conn),
    }
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
