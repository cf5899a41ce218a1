use crate::{id::Id, time::Timestamp};

/// A user-submitted answer to a question.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id          : Id,
    pub question_id : Id,
    pub created_at  : Timestamp,
    pub author      : String,
    pub content     : String,
    pub up_votes    : u64,
    pub down_votes  : u64,
}

impl Answer {
    pub fn score(&self) -> i64 {
        self.up_votes as i64 - self.down_votes as i64
    }
}
