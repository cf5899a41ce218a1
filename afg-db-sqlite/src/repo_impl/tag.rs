use super::*;

impl<'a> TagRepo for DbReadOnly<'a> {
    fn add_tag_usage(&self, _label: &str) -> Result<Tag> {
        unreachable!();
    }
    fn release_tag_usage(&self, _label: &str) -> Result<()> {
        unreachable!();
    }

    fn get_tag(&self, label: &str) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), label)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }

    fn query_tags(
        &self,
        text: Option<&str>,
        sort: TagSort,
        pagination: &Pagination,
    ) -> Result<Vec<Tag>> {
        query_tags(&mut self.conn.borrow_mut(), text, sort, pagination)
    }

    fn most_popular_tags(
        &self,
        params: &MostPopularTagsParams,
        pagination: &Pagination,
    ) -> Result<Vec<TagFrequency>> {
        most_popular_tags(&mut self.conn.borrow_mut(), params, pagination)
    }
}

impl<'a> TagRepo for DbReadWrite<'a> {
    fn add_tag_usage(&self, label: &str) -> Result<Tag> {
        add_tag_usage(&mut self.conn.borrow_mut(), label)
    }
    fn release_tag_usage(&self, label: &str) -> Result<()> {
        release_tag_usage(&mut self.conn.borrow_mut(), label)
    }

    fn get_tag(&self, label: &str) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), label)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }

    fn query_tags(
        &self,
        text: Option<&str>,
        sort: TagSort,
        pagination: &Pagination,
    ) -> Result<Vec<Tag>> {
        query_tags(&mut self.conn.borrow_mut(), text, sort, pagination)
    }

    fn most_popular_tags(
        &self,
        params: &MostPopularTagsParams,
        pagination: &Pagination,
    ) -> Result<Vec<TagFrequency>> {
        most_popular_tags(&mut self.conn.borrow_mut(), params, pagination)
    }
}

impl<'a> TagRepo for DbConnection<'a> {
    fn add_tag_usage(&self, label: &str) -> Result<Tag> {
        add_tag_usage(&mut self.conn.borrow_mut(), label)
    }
    fn release_tag_usage(&self, label: &str) -> Result<()> {
        release_tag_usage(&mut self.conn.borrow_mut(), label)
    }

    fn get_tag(&self, label: &str) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), label)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }

    fn query_tags(
        &self,
        text: Option<&str>,
        sort: TagSort,
        pagination: &Pagination,
    ) -> Result<Vec<Tag>> {
        query_tags(&mut self.conn.borrow_mut(), text, sort, pagination)
    }

    fn most_popular_tags(
        &self,
        params: &MostPopularTagsParams,
        pagination: &Pagination,
    ) -> Result<Vec<TagFrequency>> {
        most_popular_tags(&mut self.conn.borrow_mut(), params, pagination)
    }
}

fn add_tag_usage(conn: &mut SqliteConnection, tag_label: &str) -> Result<Tag> {
    use schema::tags::dsl;
    let new_tag = models::NewTag {
        label: tag_label,
        question_count: 1,
        created_at: Timestamp::now().into_millis(),
    };
    let res = diesel::insert_into(dsl::tags).values(&new_tag).execute(conn);
    if let Err(err) = res {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                // The tag is already in use.
                diesel::update(dsl::tags.filter(dsl::label.eq(tag_label)))
                    .set(dsl::question_count.eq(dsl::question_count + 1))
                    .execute(conn)
                    .map_err(from_diesel_err)?;
            }
            _ => {
                return Err(from_diesel_err(err));
            }
        }
    }
    get_tag(conn, tag_label)
}

fn release_tag_usage(conn: &mut SqliteConnection, tag_label: &str) -> Result<()> {
    use schema::tags::dsl;
    let count = diesel::update(
        dsl::tags
            .filter(dsl::label.eq(tag_label))
            .filter(dsl::question_count.gt(0)),
    )
    .set(dsl::question_count.eq(dsl::question_count - 1))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_tag(conn: &mut SqliteConnection, tag_label: &str) -> Result<Tag> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .filter(dsl::label.eq(tag_label))
        .first::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_tags(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .select(diesel::dsl::count(dsl::label))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn query_tags(
    conn: &mut SqliteConnection,
    text: Option<&str>,
    sort: TagSort,
    pagination: &Pagination,
) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    let mut stmt = dsl::tags
        // Released records stay in the table but are not listed.
        .filter(dsl::question_count.gt(0))
        .into_boxed();
    if let Some(text) = text {
        let pattern = format!("%{text}%");
        stmt = stmt.filter(dsl::label.like(pattern));
    }
    stmt = match sort {
        TagSort::Popular => stmt.order((dsl::question_count.desc(), dsl::label.asc())),
        TagSort::Name => stmt.order(dsl::label.asc()),
        TagSort::Recent => stmt.order((dsl::created_at.desc(), dsl::label.asc())),
    };
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    Ok(stmt
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn most_popular_tags(
    conn: &mut SqliteConnection,
    params: &MostPopularTagsParams,
    pagination: &Pagination,
) -> Result<Vec<TagFrequency>> {
    use schema::tags::dsl;
    let min_count = params.min_count.unwrap_or(1) as i64;
    let mut stmt = dsl::tags
        .select((dsl::label, dsl::question_count))
        .filter(dsl::question_count.ge(min_count))
        .order((dsl::question_count.desc(), dsl::label.asc()))
        .into_boxed();
    if let Some(max_count) = params.max_count {
        stmt = stmt.filter(dsl::question_count.le(max_count as i64));
    }
    stmt = stmt.offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        stmt = stmt.limit(limit as i64);
    }
    Ok(stmt
        .load::<(String, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(label, count)| TagFrequency(label, count.max(0) as u64))
        .collect())
}
