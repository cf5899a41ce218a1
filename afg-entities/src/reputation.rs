/// Aggregated counters over a user's live content.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub question_count    : u64,
    pub answer_count      : u64,
    pub question_up_votes : u64,
    pub answer_up_votes   : u64,
    pub total_views       : u64,
}

/// The number of badges a user has earned, by level.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BadgeCounts {
    pub gold   : u64,
    pub silver : u64,
    pub bronze : u64,
}
