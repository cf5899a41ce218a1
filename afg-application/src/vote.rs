use super::*;

/// Casts, revokes or flips a vote and keeps the denormalized vote
/// counters and the reputation of both parties consistent inside a
/// single database transaction.
pub fn cast_vote(
    connections: &sqlite::Connections,
    voter: &EmailAddress,
    content: ContentRef,
    direction: VoteDirection,
) -> Result<usecases::VoteOutcome> {
    let outcome = connections.exclusive()?.transaction(|conn| {
        usecases::cast_vote(conn, voter, content, direction).map_err(|err| {
            warn!("Failed to cast vote: {err}");
            err
        })
    })?;
    Ok(outcome)
}
