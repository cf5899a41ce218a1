// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuestionSort {
    #[default]
    Newest,
    MostViewed,
    MostVoted,
    /// Questions without answers, newest first.
    Unanswered,
}

#[derive(Clone, Debug, Default)]
pub struct QuestionQuery {
    /// Case-insensitive sub-string match on title and content.
    pub text: Option<String>,
    /// Only questions carrying this tag label.
    pub tag: Option<String>,
    /// Only questions asked by this user.
    pub author: Option<String>,
    pub sort: QuestionSort,
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagSort {
    #[default]
    Popular,
    Name,
    Recent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MostPopularTagsParams {
    pub min_count: Option<u64>,
    pub max_count: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    // Users are keyed by their e-mail address.
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn query_users(&self, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>>;

    fn adjust_reputation(&self, username: &str, delta: i64) -> Result<()>;

    // Aggregated counters over the user's live content.
    fn user_stats(&self, username: &str) -> Result<UserStats>;
}

pub trait QuestionRepo {
    // Inserts the question together with one tag join row
    // per label in `question.tags`.
    fn create_question(&self, question: &Question) -> Result<()>;

    // Updates title and content only. Tag joins are maintained
    // separately via `add_question_tag`/`remove_question_tag`.
    fn update_question(&self, question: &Question) -> Result<()>;

    // Deletes the question and its tag join rows.
    fn delete_question(&self, id: &Id) -> Result<()>;

    fn get_question(&self, id: &Id) -> Result<Question>;
    fn query_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>>;
    fn count_questions(&self) -> Result<usize>;

    fn add_question_tag(&self, id: &Id, label: &str) -> Result<()>;
    fn remove_question_tag(&self, id: &Id, label: &str) -> Result<()>;

    fn increment_view_count(&self, id: &Id) -> Result<()>;
    fn adjust_answer_count(&self, id: &Id, delta: i64) -> Result<()>;
    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()>;
}

pub trait AnswerRepo {
    fn create_answer(&self, answer: &Answer) -> Result<()>;
    fn delete_answer(&self, id: &Id) -> Result<()>;

    fn get_answer(&self, id: &Id) -> Result<Answer>;
    fn answers_of_question(&self, question_id: &Id, pagination: &Pagination)
        -> Result<Vec<Answer>>;
    fn answers_of_user(&self, username: &str, pagination: &Pagination) -> Result<Vec<Answer>>;

    fn search_answers(&self, text: &str, limit: u64) -> Result<Vec<Answer>>;

    fn adjust_vote_count(&self, id: &Id, direction: VoteDirection, delta: i64) -> Result<()>;
}

pub trait TagRepo {
    // Upserts the tag record: inserts it with a usage count of 1
    // or increments the usage count of the existing record.
    fn add_tag_usage(&self, label: &str) -> Result<Tag>;

    // Decrements the usage count. Records with a count of 0 are
    // kept and filtered out of listings.
    fn release_tag_usage(&self, label: &str) -> Result<()>;

    fn get_tag(&self, label: &str) -> Result<Tag>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
    fn count_tags(&self) -> Result<usize>;

    fn query_tags(
        &self,
        text: Option<&str>,
        sort: TagSort,
        pagination: &Pagination,
    ) -> Result<Vec<Tag>>;

    fn most_popular_tags(
        &self,
        params: &MostPopularTagsParams,
        pagination: &Pagination,
    ) -> Result<Vec<TagFrequency>>;
}

pub trait VoteRepo {
    fn create_vote(&self, vote: &Vote) -> Result<()>;
    fn update_vote(&self, vote: &Vote) -> Result<()>;
    fn delete_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<()>;

    fn get_vote(&self, voter: &EmailAddress, content: &ContentRef) -> Result<Option<Vote>>;
    fn votes_of_content(&self, content: &ContentRef) -> Result<Vec<Vote>>;

    fn delete_votes_of_content(&self, content: &ContentRef) -> Result<usize>;
}

pub trait CollectionRepo {
    fn create_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()>;
    fn delete_bookmark(&self, user: &EmailAddress, question_id: &Id) -> Result<()>;

    fn is_question_saved(&self, user: &EmailAddress, question_id: &Id) -> Result<bool>;
    fn saved_questions(
        &self,
        user: &EmailAddress,
        text: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Question>>;

    fn delete_bookmarks_of_question(&self, question_id: &Id) -> Result<usize>;
}

pub trait ActivityRepo {
    fn log_activity(&self, entry: &ActivityLogEntry) -> Result<()>;
    fn activities_of_user(
        &self,
        user: &EmailAddress,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityLogEntry>>;
}
