use crate::time::Timestamp;

/// A labeled category with its denormalized usage counter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub label: String,
    pub question_count: u64,
    pub created_at: Timestamp,
}

pub type TagCount = u64;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TagFrequency(pub String, pub TagCount);
