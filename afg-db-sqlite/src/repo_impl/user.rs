use num_traits::ToPrimitive as _;

use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn delete_user_by_email(&self, _email: &EmailAddress) -> Result<()> {
        unreachable!();
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(&self, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), text, pagination)
    }

    fn adjust_reputation(&self, _username: &str, _delta: i64) -> Result<()> {
        unreachable!();
    }

    fn user_stats(&self, username: &str) -> Result<UserStats> {
        user_stats(&mut self.conn.borrow_mut(), username)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()> {
        delete_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(&self, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), text, pagination)
    }

    fn adjust_reputation(&self, username: &str, delta: i64) -> Result<()> {
        adjust_reputation(&mut self.conn.borrow_mut(), username, delta)
    }

    fn user_stats(&self, username: &str) -> Result<UserStats> {
        user_stats(&mut self.conn.borrow_mut(), username)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()> {
        delete_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(&self, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), text, pagination)
    }

    fn adjust_reputation(&self, username: &str, delta: i64) -> Result<()> {
        adjust_reputation(&mut self.conn.borrow_mut(), username, delta)
    }

    fn user_stats(&self, username: &str) -> Result<UserStats> {
        user_stats(&mut self.conn.borrow_mut(), username)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = models::NewUser::from(u);
    let count = diesel::update(dsl::users.filter(dsl::email.eq(u.email.as_str())))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(dsl::users.filter(dsl::email.eq(email.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn query_users(
    conn: &mut SqliteConnection,
    text: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<User>> {
    use schema::users::dsl;
    let mut query = dsl::users.into_boxed();
    if let Some(text) = text {
        let pattern = format!("%{text}%");
        query = query.filter(
            dsl::username
                .like(pattern.clone())
                .or(dsl::name.like(pattern)),
        );
    }
    query = query
        .order((dsl::reputation.desc(), dsl::username.asc()))
        .offset(pagination.offset.unwrap_or(0) as i64);
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn adjust_reputation(conn: &mut SqliteConnection, username: &str, delta: i64) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::username.eq(username)))
        .set(dsl::reputation.eq(dsl::reputation + delta))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn user_stats(conn: &mut SqliteConnection, username: &str) -> Result<UserStats> {
    use diesel::dsl::sql;
    use diesel::sql_types::{BigInt, Nullable};
    let user_id = resolve_user_id_by_username(conn, username)?;

    let question_count = schema::questions::table
        .filter(schema::questions::created_by.eq(user_id))
        .count()
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    let (question_up_votes, total_views) = schema::questions::table
        .filter(schema::questions::created_by.eq(user_id))
        .select((
            sql::<Nullable<BigInt>>("SUM(up_votes)"),
            sql::<Nullable<BigInt>>("SUM(view_count)"),
        ))
        .first::<(Option<i64>, Option<i64>)>(conn)
        .map_err(from_diesel_err)?;

    let answer_count = schema::answers::table
        .filter(schema::answers::created_by.eq(user_id))
        .count()
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    let answer_up_votes = schema::answers::table
        .filter(schema::answers::created_by.eq(user_id))
        .select(sql::<Nullable<BigInt>>("SUM(up_votes)"))
        .first::<Option<i64>>(conn)
        .map_err(from_diesel_err)?;

    Ok(UserStats {
        question_count: question_count.to_u64().unwrap_or_default(),
        answer_count: answer_count.to_u64().unwrap_or_default(),
        question_up_votes: question_up_votes.unwrap_or_default().to_u64().unwrap_or_default(),
        answer_up_votes: answer_up_votes.unwrap_or_default().to_u64().unwrap_or_default(),
        total_views: total_views.unwrap_or_default().to_u64().unwrap_or_default(),
    })
}
