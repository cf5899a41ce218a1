use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{content::ContentRef, email::EmailAddress, time::Timestamp};

/// An up or down signal on a question or answer.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VoteDirection {
    Up   =  1,
    Down = -1,
}

impl VoteDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A single user's vote on a single piece of content.
///
/// There is at most one vote per `(voter, content)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter: EmailAddress,
    pub content: ContentRef,
    pub direction: VoteDirection,
    pub created_at: Timestamp,
}
