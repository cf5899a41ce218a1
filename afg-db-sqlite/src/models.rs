// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use num_traits::{FromPrimitive as _, ToPrimitive as _};

use afg_core::entities as e;

use super::{schema::*, util::load_url};

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: &'a str,
    pub role: i16,
    pub name: &'a str,
    pub username: &'a str,
    pub image_url: Option<String>,
    pub bio: Option<&'a str>,
    pub location: Option<&'a str>,
    pub website_url: Option<String>,
    pub reputation: i64,
    pub created_at: i64,
}

impl<'a> From<&'a e::User> for NewUser<'a> {
    fn from(from: &'a e::User) -> Self {
        Self {
            email: from.email.as_str(),
            email_confirmed: from.email_confirmed,
            password: from.password.as_ref(),
            role: from.role.to_i16().unwrap_or_default(),
            name: &from.name,
            username: &from.username,
            image_url: from.image.as_ref().map(ToString::to_string),
            bio: from.bio.as_deref(),
            location: from.location.as_deref(),
            website_url: from.website.as_ref().map(ToString::to_string),
            reputation: from.reputation,
            created_at: from.created_at.into_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub role: i16,
    pub name: String,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    pub reputation: i64,
    pub created_at: i64,
}

impl From<UserEntity> for e::User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            email,
            email_confirmed,
            password,
            role,
            name,
            username,
            image_url,
            bio,
            location,
            website_url,
            reputation,
            created_at,
            ..
        } = from;
        Self {
            email: e::EmailAddress::new_unchecked(email),
            email_confirmed,
            password: e::Password::from_hash(password),
            role: e::Role::from_i16(role).unwrap_or_default(),
            name,
            username,
            image: load_url(image_url),
            bio,
            location,
            website: load_url(website_url),
            reputation,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub view_count: i64,
    pub up_votes: i64,
    pub down_votes: i64,
    pub answer_count: i64,
}

// Question columns joined with the author's username.
#[derive(Queryable)]
pub struct JoinedQuestion {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub title: String,
    pub content: String,
    pub view_count: i64,
    pub up_votes: i64,
    pub down_votes: i64,
    pub answer_count: i64,
    pub author_username: String,
}

impl JoinedQuestion {
    // The tag labels are loaded separately.
    pub fn into_entity(self, tags: Vec<String>) -> e::Question {
        let Self {
            id,
            created_at,
            title,
            content,
            view_count,
            up_votes,
            down_votes,
            answer_count,
            author_username,
            ..
        } = self;
        e::Question {
            id: id.into(),
            created_at: e::Timestamp::from_millis(created_at),
            author: author_username,
            title,
            content,
            tags,
            view_count: view_count.max(0) as u64,
            up_votes: up_votes.max(0) as u64,
            down_votes: down_votes.max(0) as u64,
            answer_count: answer_count.max(0) as u64,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = answers)]
pub struct NewAnswer<'a> {
    pub id: &'a str,
    pub question_rowid: i64,
    pub created_at: i64,
    pub created_by: i64,
    pub content: &'a str,
    pub up_votes: i64,
    pub down_votes: i64,
}

// Answer columns joined with the public question id
// and the author's username.
#[derive(Queryable)]
pub struct JoinedAnswer {
    pub id: String,
    pub created_at: i64,
    pub content: String,
    pub up_votes: i64,
    pub down_votes: i64,
    pub question_id: String,
    pub author_username: String,
}

impl From<JoinedAnswer> for e::Answer {
    fn from(from: JoinedAnswer) -> Self {
        let JoinedAnswer {
            id,
            created_at,
            content,
            up_votes,
            down_votes,
            question_id,
            author_username,
        } = from;
        Self {
            id: id.into(),
            question_id: question_id.into(),
            created_at: e::Timestamp::from_millis(created_at),
            author: author_username,
            content,
            up_votes: up_votes.max(0) as u64,
            down_votes: down_votes.max(0) as u64,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub label: &'a str,
    pub question_count: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct TagEntity {
    pub label: String,
    pub question_count: i64,
    pub created_at: i64,
}

impl From<TagEntity> for e::Tag {
    fn from(from: TagEntity) -> Self {
        let TagEntity {
            label,
            question_count,
            created_at,
        } = from;
        Self {
            label,
            question_count: question_count.max(0) as u64,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub user_id: i64,
    pub content_kind: i16,
    pub content_id: &'a str,
    pub direction: i16,
    pub created_at: i64,
}

// Vote columns joined with the voter's e-mail address.
#[derive(Queryable)]
pub struct JoinedVote {
    pub content_kind: i16,
    pub content_id: String,
    pub direction: i16,
    pub created_at: i64,
    pub voter_email: String,
}

impl JoinedVote {
    pub fn try_into_entity(self) -> Option<e::Vote> {
        let Self {
            content_kind,
            content_id,
            direction,
            created_at,
            voter_email,
        } = self;
        let kind = e::ContentKind::from_i16(content_kind)?;
        let direction = e::VoteDirection::from_i16(direction)?;
        Some(e::Vote {
            voter: e::EmailAddress::new_unchecked(voter_email),
            content: e::ContentRef {
                kind,
                id: content_id.into(),
            },
            direction,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmark {
    pub user_id: i64,
    pub question_rowid: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = activity_log)]
pub struct NewActivityLogEntry<'a> {
    pub user_id: Option<i64>,
    pub action: i16,
    pub content_kind: i16,
    pub content_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ActivityLogRow {
    pub action: i16,
    pub content_kind: i16,
    pub content_id: String,
    pub created_at: i64,
}

impl ActivityLogRow {
    pub fn try_into_entity(self, by: Option<e::EmailAddress>) -> Option<e::ActivityLogEntry> {
        let Self {
            action,
            content_kind,
            content_id,
            created_at,
        } = self;
        Some(e::ActivityLogEntry {
            activity: e::Activity {
                at: e::Timestamp::from_millis(created_at),
                by,
            },
            action: e::UserAction::from_i16(action)?,
            content: e::ContentRef {
                kind: e::ContentKind::from_i16(content_kind)?,
                id: content_id.into(),
            },
        })
    }
}
