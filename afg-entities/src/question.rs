use crate::{id::Id, time::Timestamp};

/// A user-submitted question with its denormalized counters.
///
/// `tags` carries the normalized labels of the associated tags.
/// The counters (`view_count`, `up_votes`, `down_votes`,
/// `answer_count`) mirror the associated records and are kept
/// consistent by the mutation use cases.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id           : Id,
    pub created_at   : Timestamp,
    pub author       : String,
    pub title        : String,
    pub content      : String,
    pub tags         : Vec<String>,
    pub view_count   : u64,
    pub up_votes     : u64,
    pub down_votes   : u64,
    pub answer_count : u64,
}

impl Question {
    pub fn score(&self) -> i64 {
        self.up_votes as i64 - self.down_votes as i64
    }
}
