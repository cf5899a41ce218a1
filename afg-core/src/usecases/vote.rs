use super::prelude::*;
use crate::reputation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Added(VoteDirection),
    Removed,
    Switched(VoteDirection),
}

/// Casts a vote with toggling semantics.
///
/// Voting in the direction of an existing vote revokes it, voting in
/// the opposite direction flips it. The denormalized vote counters of
/// the target and the reputation of both parties are adjusted in the
/// same step. Must run inside a single database transaction.
pub fn cast_vote<R>(
    repo: &R,
    voter: &EmailAddress,
    content: ContentRef,
    direction: VoteDirection,
) -> Result<VoteOutcome>
where
    R: VoteRepo + QuestionRepo + AnswerRepo + UserRepo + ActivityRepo,
{
    let author = content_author(repo, &content)?;
    let outcome = match repo.get_vote(voter, &content)? {
        None => {
            let vote = Vote {
                voter: voter.clone(),
                content: content.clone(),
                direction,
                created_at: Timestamp::now(),
            };
            repo.create_vote(&vote)?;
            adjust_vote_count(repo, &content, direction, 1)?;
            apply_vote_reputation(repo, &vote, &author, false)?;
            VoteOutcome::Added(direction)
        }
        Some(vote) if vote.direction == direction => {
            repo.delete_vote(voter, &content)?;
            adjust_vote_count(repo, &content, direction, -1)?;
            apply_vote_reputation(repo, &vote, &author, true)?;
            VoteOutcome::Removed
        }
        Some(old_vote) => {
            let new_vote = Vote {
                direction,
                created_at: Timestamp::now(),
                ..old_vote.clone()
            };
            repo.update_vote(&new_vote)?;
            adjust_vote_count(repo, &content, old_vote.direction, -1)?;
            adjust_vote_count(repo, &content, direction, 1)?;
            apply_vote_reputation(repo, &old_vote, &author, true)?;
            apply_vote_reputation(repo, &new_vote, &author, false)?;
            VoteOutcome::Switched(direction)
        }
    };
    let action = match outcome {
        VoteOutcome::Removed => UserAction::RevokeVote,
        VoteOutcome::Added(VoteDirection::Up) | VoteOutcome::Switched(VoteDirection::Up) => {
            UserAction::CastUpVote
        }
        VoteOutcome::Added(VoteDirection::Down) | VoteOutcome::Switched(VoteDirection::Down) => {
            UserAction::CastDownVote
        }
    };
    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(voter.clone())),
        action,
        content,
    })?;
    Ok(outcome)
}

fn content_author<R>(repo: &R, content: &ContentRef) -> Result<String>
where
    R: QuestionRepo + AnswerRepo,
{
    Ok(match content.kind {
        ContentKind::Question => repo.get_question(&content.id)?.author,
        ContentKind::Answer => repo.get_answer(&content.id)?.author,
    })
}

fn adjust_vote_count<R>(
    repo: &R,
    content: &ContentRef,
    direction: VoteDirection,
    delta: i64,
) -> Result<()>
where
    R: QuestionRepo + AnswerRepo,
{
    match content.kind {
        ContentKind::Question => QuestionRepo::adjust_vote_count(repo, &content.id, direction, delta)?,
        ContentKind::Answer => AnswerRepo::adjust_vote_count(repo, &content.id, direction, delta)?,
    }
    Ok(())
}

/// Applies (or reverses) the reputation effect of a single vote.
///
/// Votes on one's own content never change reputation.
pub(crate) fn apply_vote_reputation<R>(
    repo: &R,
    vote: &Vote,
    author_username: &str,
    reverse: bool,
) -> Result<()>
where
    R: UserRepo,
{
    let voter = repo.get_user_by_email(&vote.voter)?;
    if voter.username == author_username {
        return Ok(());
    }
    let (author_delta, voter_delta) = reputation::vote_deltas(vote.direction);
    let sign = if reverse { -1 } else { 1 };
    repo.adjust_reputation(author_username, sign * author_delta)?;
    repo.adjust_reputation(&voter.username, sign * voter_delta)?;
    Ok(())
}
