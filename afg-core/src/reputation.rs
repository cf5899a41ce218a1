// Reputation scoring and badge levels.
//
// Reputation must always equal the sum of the deltas contributed by
// the user's *live* content and votes: every mutation that removes a
// vote or a piece of content reverses the deltas it once applied.

use crate::entities::{BadgeCounts, UserStats, VoteDirection};

pub const ASK_QUESTION: i64 = 5;
pub const POST_ANSWER: i64 = 10;

pub const RECEIVE_UP_VOTE: i64 = 10;
pub const RECEIVE_DOWN_VOTE: i64 = -2;
pub const CAST_UP_VOTE: i64 = 2;
pub const CAST_DOWN_VOTE: i64 = -1;

/// The reputation deltas `(author, voter)` applied when a
/// vote is cast, and reversed when it is revoked.
pub const fn vote_deltas(direction: VoteDirection) -> (i64, i64) {
    match direction {
        VoteDirection::Up => (RECEIVE_UP_VOTE, CAST_UP_VOTE),
        VoteDirection::Down => (RECEIVE_DOWN_VOTE, CAST_DOWN_VOTE),
    }
}

#[derive(Debug, Clone, Copy)]
struct BadgeLevels {
    bronze: u64,
    silver: u64,
    gold: u64,
}

const QUESTION_COUNT_LEVELS: BadgeLevels = BadgeLevels {
    bronze: 10,
    silver: 50,
    gold: 100,
};

const ANSWER_COUNT_LEVELS: BadgeLevels = BadgeLevels {
    bronze: 10,
    silver: 50,
    gold: 100,
};

const QUESTION_UP_VOTE_LEVELS: BadgeLevels = BadgeLevels {
    bronze: 10,
    silver: 50,
    gold: 100,
};

const ANSWER_UP_VOTE_LEVELS: BadgeLevels = BadgeLevels {
    bronze: 10,
    silver: 50,
    gold: 100,
};

const TOTAL_VIEW_LEVELS: BadgeLevels = BadgeLevels {
    bronze: 1_000,
    silver: 10_000,
    gold: 100_000,
};

/// Counts the badges a user has earned from the aggregated
/// counters over their live content.
pub fn badge_counts(stats: &UserStats) -> BadgeCounts {
    let metrics = [
        (stats.question_count, QUESTION_COUNT_LEVELS),
        (stats.answer_count, ANSWER_COUNT_LEVELS),
        (stats.question_up_votes, QUESTION_UP_VOTE_LEVELS),
        (stats.answer_up_votes, ANSWER_UP_VOTE_LEVELS),
        (stats.total_views, TOTAL_VIEW_LEVELS),
    ];
    let mut badges = BadgeCounts::default();
    for (value, levels) in metrics {
        if value >= levels.gold {
            badges.gold += 1;
        }
        if value >= levels.silver {
            badges.silver += 1;
        }
        if value >= levels.bronze {
            badges.bronze += 1;
        }
    }
    badges
}
