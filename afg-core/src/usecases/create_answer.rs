use super::prelude::*;
use crate::{reputation, util::validate};

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub content: String,
}

/// Posts an answer and increments the question's answer counter.
/// Must run inside a single database transaction.
pub fn create_answer<R>(
    repo: &R,
    author: &EmailAddress,
    question_id: &Id,
    new_answer: NewAnswer,
) -> Result<Answer>
where
    R: QuestionRepo + AnswerRepo + UserRepo + ActivityRepo,
{
    validate::answer_content(&new_answer.content)?;
    // The question must exist before anything is written.
    let question = repo.get_question(question_id)?;
    let user = repo.get_user_by_email(author)?;
    let answer = Answer {
        id: Id::new(),
        question_id: question.id.clone(),
        created_at: Timestamp::now(),
        author: user.username.clone(),
        content: new_answer.content,
        up_votes: 0,
        down_votes: 0,
    };
    repo.create_answer(&answer)?;
    repo.adjust_answer_count(&question.id, 1)?;
    repo.adjust_reputation(&user.username, reputation::POST_ANSWER)?;
    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(author.clone())),
        action: UserAction::PostAnswer,
        content: ContentRef::answer(answer.id.clone()),
    })?;
    Ok(answer)
}
