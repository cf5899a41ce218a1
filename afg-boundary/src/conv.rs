use afg_entities as e;

use super::*;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role;
        match from {
            UserRole::Guest => Role::Guest,
            UserRole::User => Role::User,
            UserRole::Admin => Role::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            username,
            name,
            image,
            bio,
            location,
            website,
            reputation,
            created_at,
            ..
        } = from;
        Self {
            username,
            name,
            image_url: image.map(|url| url.to_string()),
            bio,
            location,
            website_url: website.map(|url| url.to_string()),
            reputation,
            created_at: created_at.into_millis(),
        }
    }
}

impl From<e::user::User> for CurrentUser {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            email,
            username,
            name,
            role,
            ..
        } = from;
        Self {
            email: email.into_string(),
            username,
            name,
            role: role.into(),
        }
    }
}

impl From<e::question::Question> for Question {
    fn from(from: e::question::Question) -> Self {
        let e::question::Question {
            id,
            created_at,
            author,
            title,
            content,
            tags,
            view_count,
            up_votes,
            down_votes,
            answer_count,
        } = from;
        Self {
            id: id.into(),
            created_at: created_at.into_millis(),
            author,
            title,
            content,
            tags,
            view_count,
            up_votes,
            down_votes,
            answer_count,
        }
    }
}

impl From<e::answer::Answer> for Answer {
    fn from(from: e::answer::Answer) -> Self {
        let e::answer::Answer {
            id,
            question_id,
            created_at,
            author,
            content,
            up_votes,
            down_votes,
        } = from;
        Self {
            id: id.into(),
            question_id: question_id.into(),
            created_at: created_at.into_millis(),
            author,
            content,
            up_votes,
            down_votes,
        }
    }
}

impl From<e::vote::VoteDirection> for VoteDirection {
    fn from(from: e::vote::VoteDirection) -> Self {
        use e::vote::VoteDirection::*;
        match from {
            Up => VoteDirection::Up,
            Down => VoteDirection::Down,
        }
    }
}

impl From<VoteDirection> for e::vote::VoteDirection {
    fn from(from: VoteDirection) -> Self {
        use e::vote::VoteDirection as Direction;
        match from {
            VoteDirection::Up => Direction::Up,
            VoteDirection::Down => Direction::Down,
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag {
            label,
            question_count,
            created_at,
        } = from;
        Self {
            label,
            question_count,
            created_at: created_at.into_millis(),
        }
    }
}

impl From<e::tag::TagFrequency> for TagFrequency {
    fn from(from: e::tag::TagFrequency) -> Self {
        Self(from.0, from.1)
    }
}

impl From<e::reputation::UserStats> for UserStats {
    fn from(from: e::reputation::UserStats) -> Self {
        let e::reputation::UserStats {
            question_count,
            answer_count,
            question_up_votes,
            answer_up_votes,
            total_views,
        } = from;
        Self {
            question_count,
            answer_count,
            question_up_votes,
            answer_up_votes,
            total_views,
        }
    }
}

impl From<e::reputation::BadgeCounts> for BadgeCounts {
    fn from(from: e::reputation::BadgeCounts) -> Self {
        let e::reputation::BadgeCounts {
            gold,
            silver,
            bronze,
        } = from;
        Self {
            gold,
            silver,
            bronze,
        }
    }
}

impl From<e::activity::UserAction> for UserAction {
    fn from(from: e::activity::UserAction) -> Self {
        use e::activity::UserAction::*;
        match from {
            AskQuestion => UserAction::AskQuestion,
            EditQuestion => UserAction::EditQuestion,
            DeleteQuestion => UserAction::DeleteQuestion,
            PostAnswer => UserAction::PostAnswer,
            DeleteAnswer => UserAction::DeleteAnswer,
            CastUpVote => UserAction::CastUpVote,
            CastDownVote => UserAction::CastDownVote,
            RevokeVote => UserAction::RevokeVote,
            ViewQuestion => UserAction::ViewQuestion,
            SaveQuestion => UserAction::SaveQuestion,
            UnsaveQuestion => UserAction::UnsaveQuestion,
        }
    }
}

impl From<e::content::ContentKind> for ContentKind {
    fn from(from: e::content::ContentKind) -> Self {
        use e::content::ContentKind::*;
        match from {
            Question => ContentKind::Question,
            Answer => ContentKind::Answer,
        }
    }
}

impl From<e::activity::ActivityLogEntry> for ActivityEntry {
    fn from(from: e::activity::ActivityLogEntry) -> Self {
        let e::activity::ActivityLogEntry {
            activity,
            action,
            content,
        } = from;
        Self {
            at: activity.at.into_millis(),
            action: action.into(),
            content_kind: content.kind.into(),
            content_id: content.id.into(),
        }
    }
}
