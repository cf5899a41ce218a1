use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use afg_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

mod activity;
mod answer;
mod bookmark;
mod question;
mod tag;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_id_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::id)
        .filter(dsl::email.eq(email.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_user_id_by_username(conn: &mut SqliteConnection, username: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::id)
        .filter(dsl::username.eq(username))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_question_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::questions::dsl;
    dsl::questions
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_question_tags(conn: &mut SqliteConnection, question_rowid: i64) -> Result<Vec<String>> {
    use schema::question_tag::dsl;
    dsl::question_tag
        .select(dsl::tag_label)
        .filter(dsl::question_rowid.eq(question_rowid))
        .order(dsl::tag_label.asc())
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

// The select clause that feeds `models::JoinedQuestion`.
macro_rules! joined_question_columns {
    () => {
        (
            schema::questions::rowid,
            schema::questions::id,
            schema::questions::created_at,
            schema::questions::title,
            schema::questions::content,
            schema::questions::view_count,
            schema::questions::up_votes,
            schema::questions::down_votes,
            schema::questions::answer_count,
            schema::users::username,
        )
    };
}

pub(crate) use joined_question_columns;

fn load_joined_questions(
    conn: &mut SqliteConnection,
    joined: Vec<models::JoinedQuestion>,
) -> Result<Vec<Question>> {
    let mut questions = Vec::with_capacity(joined.len());
    for row in joined {
        let tags = load_question_tags(conn, row.rowid)?;
        questions.push(row.into_entity(tags));
    }
    Ok(questions)
}
