//! # afg-boundary
//!
//! Serializable, anemic data structures for accessing the askforge
//! API in a type-safe manner. All timestamps are transmitted as unix
//! timestamps in milliseconds.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Guest,
    User,
    Admin,
}

/// The public view of a user account.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub username    : String,
    pub name        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url : Option<String>,
    pub reputation  : i64,
    pub created_at  : i64,
}

/// The account of the logged-in user.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CurrentUser {
    pub email: String,
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Question {
    pub id           : String,
    pub created_at   : i64,
    pub author       : String,
    pub title        : String,
    pub content      : String,
    pub tags         : Vec<String>,
    pub view_count   : u64,
    pub up_votes     : u64,
    pub down_votes   : u64,
    pub answer_count : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Answer {
    pub id          : String,
    pub question_id : String,
    pub created_at  : i64,
    pub author      : String,
    pub content     : String,
    pub up_votes    : u64,
    pub down_votes  : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewAnswer {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Up,
    Down,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

/// The requesting user's vote state on a single target.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct VoteState {
    pub up_voted: bool,
    pub down_voted: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct SavedState {
    pub saved: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Tag {
    pub label: String,
    pub question_count: u64,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TagFrequency(pub String, pub u64);

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct UserStats {
    pub question_count    : u64,
    pub answer_count      : u64,
    pub question_up_votes : u64,
    pub answer_up_votes   : u64,
    pub total_views       : u64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct BadgeCounts {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserProfile {
    pub user: User,
    pub stats: UserStats,
    pub badges: BadgeCounts,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AnswerVote {
    pub answer_id: String,
    pub direction: VoteDirection,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct QuestionDetails {
    pub question: Question,
    pub answers: Vec<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_vote: Option<VoteDirection>,
    pub answer_votes: Vec<AnswerVote>,
    pub saved: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
    pub tags: Vec<Tag>,
    pub users: Vec<User>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    AskQuestion,
    EditQuestion,
    DeleteQuestion,
    PostAnswer,
    DeleteAnswer,
    CastUpVote,
    CastDownVote,
    RevokeVote,
    ViewQuestion,
    SaveQuestion,
    UnsaveQuestion,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Question,
    Answer,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ActivityEntry {
    pub at: i64,
    pub action: UserAction,
    pub content_kind: ContentKind,
    pub content_id: String,
}

/// The JSON body of an error response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
