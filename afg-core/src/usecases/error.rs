use thiserror::Error;

use crate::{
    repositories,
    util::validate::{AnswerInvalidation, QuestionInvalidation, UserInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The content is invalid")]
    Content,
    #[error("Invalid tag label")]
    TagLabel,
    #[error("Invalid number of tags")]
    TagCount,
    #[error("Invalid display name")]
    Name,
    #[error("Invalid username")]
    Username,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("The username is already taken")]
    UsernameTaken,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<afg_entities::password::ParseError> for Error {
    fn from(_: afg_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<afg_entities::email::EmailAddressParseError> for Error {
    fn from(_: afg_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<QuestionInvalidation> for Error {
    fn from(err: QuestionInvalidation) -> Self {
        match err {
            QuestionInvalidation::Title => Self::Title,
            QuestionInvalidation::Content => Self::Content,
            QuestionInvalidation::TagLabel => Self::TagLabel,
            QuestionInvalidation::TagCount => Self::TagCount,
        }
    }
}

impl From<AnswerInvalidation> for Error {
    fn from(err: AnswerInvalidation) -> Self {
        match err {
            AnswerInvalidation::Content => Self::Content,
        }
    }
}

impl From<UserInvalidation> for Error {
    fn from(err: UserInvalidation) -> Self {
        match err {
            UserInvalidation::Name => Self::Name,
            UserInvalidation::Username => Self::Username,
        }
    }
}
