use num_derive::{FromPrimitive, ToPrimitive};

use crate::{content::ContentRef, email::EmailAddress, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: Timestamp,
    pub by: Option<EmailAddress>,
}

impl Activity {
    pub fn now(by: Option<EmailAddress>) -> Self {
        Self {
            at: Timestamp::now(),
            by,
        }
    }

    pub fn anonymize(self) -> Self {
        Self { by: None, ..self }
    }
}

/// What a user did, for the activity journal.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum UserAction {
    AskQuestion     = 0,
    EditQuestion    = 1,
    DeleteQuestion  = 2,
    PostAnswer      = 3,
    DeleteAnswer    = 4,
    CastUpVote      = 5,
    CastDownVote    = 6,
    RevokeVote      = 7,
    ViewQuestion    = 8,
    SaveQuestion    = 9,
    UnsaveQuestion  = 10,
}

/// One record of the activity journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLogEntry {
    pub activity: Activity,
    pub action: UserAction,
    pub content: ContentRef,
}
