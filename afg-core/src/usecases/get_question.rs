use super::prelude::*;

#[derive(Debug, Clone)]
pub struct QuestionDetails {
    pub question: Question,
    pub answers: Vec<Answer>,
    /// The requesting user's vote on the question, if any.
    pub question_vote: Option<VoteDirection>,
    /// The requesting user's votes on the answers.
    pub answer_votes: Vec<(Id, VoteDirection)>,
    pub saved: bool,
}

pub fn get_question_details<R>(
    repo: &R,
    viewer: Option<&EmailAddress>,
    id: &Id,
) -> Result<QuestionDetails>
where
    R: QuestionRepo + AnswerRepo + VoteRepo + CollectionRepo,
{
    let question = repo.get_question(id)?;
    let answers = repo.answers_of_question(id, &Pagination::default())?;
    let mut question_vote = None;
    let mut answer_votes = Vec::new();
    let mut saved = false;
    if let Some(viewer) = viewer {
        question_vote = repo
            .get_vote(viewer, &ContentRef::question(question.id.clone()))?
            .map(|vote| vote.direction);
        for answer in &answers {
            if let Some(vote) = repo.get_vote(viewer, &ContentRef::answer(answer.id.clone()))? {
                answer_votes.push((answer.id.clone(), vote.direction));
            }
        }
        saved = repo.is_question_saved(viewer, &question.id)?;
    }
    Ok(QuestionDetails {
        question,
        answers,
        question_vote,
        answer_votes,
        saved,
    })
}

/// Counts a page view. The view is journaled when the viewer is known.
pub fn increment_question_views<R>(repo: &R, viewer: Option<&EmailAddress>, id: &Id) -> Result<()>
where
    R: QuestionRepo + ActivityRepo,
{
    repo.increment_view_count(id)?;
    if let Some(viewer) = viewer {
        repo.log_activity(&ActivityLogEntry {
            activity: Activity::now(Some(viewer.clone())),
            action: UserAction::ViewQuestion,
            content: ContentRef::question(id.clone()),
        })?;
    }
    Ok(())
}
