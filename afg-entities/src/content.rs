use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::id::Id;

/// The kind of user-submitted content that can be voted on,
/// viewed and logged in the activity journal.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Question = 0,
    Answer   = 1,
}

/// A reference to a single piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub id: Id,
}

impl ContentRef {
    pub fn question(id: Id) -> Self {
        Self {
            kind: ContentKind::Question,
            id,
        }
    }

    pub fn answer(id: Id) -> Self {
        Self {
            kind: ContentKind::Answer,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_content_kind() {
        assert_eq!(Ok(ContentKind::Question), "question".parse());
        assert_eq!(Ok(ContentKind::Answer), "answer".parse());
        assert!("comment".parse::<ContentKind>().is_err());
    }

    #[test]
    fn display_content_kind() {
        assert_eq!("question", ContentKind::Question.to_string());
        assert_eq!("answer", ContentKind::Answer.to_string());
    }
}
