use super::*;

impl<'a> QuestionRepo for DbReadOnly<'a> {
    fn create_question(&self, _question: &Question) -> Result<()> {
        unreachable!();
    }
    fn update_question(&self, _question: &Question) -> Result<()> {
        unreachable!();
    }
    fn delete_question(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_question(&self, id: &Id) -> Result<Question> {
        get_question(&mut self.conn.borrow_mut(), id)
    }
    fn query_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
        query_questions(&mut self.conn.borrow_mut(), query)
    }
    fn count_questions(&self) -> Result<usize> {
        count_questions(&mut self.conn.borrow_mut())
    }

    fn add_question_tag(&self, _id: &Id, _label: &str) -> Result<()> {
        unreachable!();
    }
    fn remove_question_tag(&self, _id: &Id, _label: &str) -> Result<()> {
        unreachable!();
    }

    fn increment_view_count(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn adjust_answer_count(&self, _id: &Id, _delta: i64) -> Result<()> {
        unreachable!();
    }
    fn adjust_vote_count(&self, _id: &Id, _direction: VoteDirection, _delta: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> QuestionRepo for DbReadWrite<'a> {
    fn create_question(&self, question: &Question) -> Result<()> {
        create_question(&mut self.conn.borrow_mut(), question)
    }
    fn update_question(&self, question: &Question) -> Result<()> {
        update_question(&mut self.conn.borrow_mut(), question)
    }
    fn delete_question(&self, id: &Id) -> Result<()> {
        delete_question(&mut self.conn.borrow_mut(), id)
    }

    fn get_question(&self, id: &Id) -> Result<Question> {
        get_question(&mut self.conn.borrow_mut(), id)
    }
    fn query_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
        query_questions(&mut self.conn.borrow_mut(), query)
    }
    fn count_questions(&self) -> Result<usize> {
        count_questions(&mut self.conn.borrow_mut())
    }

    fn add_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        add_question_tag(&mut self.conn.borrow_mut(), id, label)
    }
    fn remove_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        remove_question_tag(&mut self.conn.borrow_mut(), id, label)
    }

    fn increment_view_count(&self, id: &Id) -> Result<()> {
        increment_view_count(&mut self.conn.borrow_mut(), id)
    }
    fn adjust_answer_count(&self, id: &Id, delta: i64) -> Result<()> {
        adjust_answer_count(&mut self.conn.borrow_mut(), id, delta)
    }
    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        adjust_vote_count(&mut self.conn.borrow_mut(), id, direction, delta)
    }
}

impl<'a> QuestionRepo for DbConnection<'a> {
    fn create_question(&self, question: &Question) -> Result<()> {
        create_question(&mut self.conn.borrow_mut(), question)
    }
    fn update_question(&self, question: &Question) -> Result<()> {
        update_question(&mut self.conn.borrow_mut(), question)
    }
    fn delete_question(&self, id: &Id) -> Result<()> {
        delete_question(&mut self.conn.borrow_mut(), id)
    }

    fn get_question(&self, id: &Id) -> Result<Question> {
        get_question(&mut self.conn.borrow_mut(), id)
    }
    fn query_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
        query_questions(&mut self.conn.borrow_mut(), query)
    }
    fn count_questions(&self) -> Result<usize> {
        count_questions(&mut self.conn.borrow_mut())
    }

    fn add_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        add_question_tag(&mut self.conn.borrow_mut(), id, label)
    }
    fn remove_question_tag(&self, id: &Id, label: &str) -> Result<()> {
        remove_question_tag(&mut self.conn.borrow_mut(), id, label)
    }

    fn increment_view_count(&self, id: &Id) -> Result<()> {
        increment_view_count(&mut self.conn.borrow_mut(), id)
    }
    fn adjust_answer_count(&self, id: &Id, delta: i64) -> Result<()> {
        adjust_answer_count(&mut self.conn.borrow_mut(), id, delta)
    }
    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()> {
        adjust_vote_count(&mut self.conn.borrow_mut(), id, direction, delta)
    }
}

fn create_question(conn: &mut SqliteConnection, q: &Question) -> Result<()> {
    let created_by = resolve_user_id_by_username(conn, &q.author)?;
    let new_question = models::NewQuestion {
        id: q.id.as_str(),
        created_at: q.created_at.into_millis(),
        created_by,
        title: &q.title,
        content: &q.content,
        view_count: q.view_count as i64,
        up_votes: q.up_votes as i64,
        down_votes: q.down_votes as i64,
        answer_count: q.answer_count as i64,
    };
    diesel::insert_into(schema::questions::table)
        .values(&new_question)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let question_rowid = resolve_question_rowid(conn, &q.id)?;
    for label in &q.tags {
        insert_question_tag(conn, question_rowid, label)?;
    }
    Ok(())
}

fn update_question(conn: &mut SqliteConnection, q: &Question) -> Result<()> {
    use schema::questions::dsl;
    let count = diesel::update(dsl::questions.filter(dsl::id.eq(q.id.as_str())))
        .set((dsl::title.eq(&q.title), dsl::content.eq(&q.content)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_question(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::{question_tag, questions};
    let question_rowid = resolve_question_rowid(conn, id)?;
    diesel::delete(
        question_tag::table.filter(question_tag::question_rowid.eq(question_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(questions::table.filter(questions::rowid.eq(question_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_question(conn: &mut SqliteConnection, id: &Id) -> Result<Question> {
    use schema::{questions, users};
    let joined = questions::table
        .inner_join(users::table)
        .select(joined_question_columns!())
        .filter(questions::id.eq(id.as_str()))
        .first::<models::JoinedQuestion>(conn)
        .map_err(from_diesel_err)?;
    let tags = load_question_tags(conn, joined.rowid)?;
    Ok(joined.into_entity(tags))
}

fn query_questions(conn: &mut SqliteConnection, query: &QuestionQuery) -> Result<Vec<Question>> {
    use diesel::sql_types::BigInt;
    use schema::{question_tag, questions, users};

    let mut stmt = questions::table
        .inner_join(users::table)
        .select(joined_question_columns!())
        .into_boxed();
    if let Some(text) = &query.text {
        let pattern = format!("%{text}%");
        stmt = stmt.filter(
            questions::title
                .like(pattern.clone())
                .or(questions::content.like(pattern)),
        );
    }
    if let Some(label) = &query.tag {
        stmt = stmt.filter(
            questions::rowid.eq_any(
                question_tag::table
                    .select(question_tag::question_rowid)
                    .filter(question_tag::tag_label.eq(label.clone())),
            ),
        );
    }
    if let Some(author) = &query.author {
        stmt = stmt.filter(users::username.eq(author.clone()));
    }
    stmt = match query.sort {
        QuestionSort::Newest => stmt.order(questions::created_at.desc()),
        QuestionSort::MostViewed => stmt.order(questions::view_count.desc()),
        QuestionSort::MostVoted => stmt.order(
            diesel::dsl::sql::<BigInt>("questions.up_votes - questions.down_votes").desc(),
        ),
        QuestionSort::Unanswered => stmt
            .filter(questions::answer_count.eq(0))
            .order(questions::created_at.desc()),
    };
    stmt = stmt
        .then_order_by(questions::rowid.desc())
        .offset(query.pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = query.pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    let joined = stmt
        .load::<models::JoinedQuestion>(conn)
        .map_err(from_diesel_err)?;
    load_joined_questions(conn, joined)
}

fn count_questions(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::questions::dsl;
    Ok(dsl::questions
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn insert_question_tag(
    conn: &mut SqliteConnection,
    question_rowid: i64,
    label: &str,
) -> Result<()> {
    use schema::question_tag::dsl;
    diesel::insert_into(dsl::question_tag)
        .values((
            dsl::question_rowid.eq(question_rowid),
            dsl::tag_label.eq(label),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn add_question_tag(conn: &mut SqliteConnection, id: &Id, label: &str) -> Result<()> {
    let question_rowid = resolve_question_rowid(conn, id)?;
    insert_question_tag(conn, question_rowid, label)
}

fn remove_question_tag(conn: &mut SqliteConnection, id: &Id, label: &str) -> Result<()> {
    use schema::question_tag::dsl;
    let question_rowid = resolve_question_rowid(conn, id)?;
    let count = diesel::delete(
        dsl::question_tag
            .filter(dsl::question_rowid.eq(question_rowid))
            .filter(dsl::tag_label.eq(label)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn increment_view_count(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::questions::dsl;
    let count = diesel::update(dsl::questions.filter(dsl::id.eq(id.as_str())))
        .set(dsl::view_count.eq(dsl::view_count + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn adjust_answer_count(conn: &mut SqliteConnection, id: &Id, delta: i64) -> Result<()> {
    use schema::questions::dsl;
    let count = diesel::update(dsl::questions.filter(dsl::id.eq(id.as_str())))
        .set(dsl::answer_count.eq(dsl::answer_count + delta))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn adjust_vote_count(
    conn: &mut SqliteConnection,
    id: &Id,
    direction: VoteDirection,
    delta: i64,
) -> Result<()> {
    use schema::questions::dsl;
    let count = match direction {
        VoteDirection::Up => diesel::update(dsl::questions.filter(dsl::id.eq(id.as_str())))
            .set(dsl::up_votes.eq(dsl::up_votes + delta))
            .execute(conn),
        VoteDirection::Down => diesel::update(dsl::questions.filter(dsl::id.eq(id.as_str())))
            .set(dsl::down_votes.eq(dsl::down_votes + delta))
            .execute(conn),
    }
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
