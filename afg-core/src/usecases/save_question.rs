use super::prelude::*;

/// Toggles the bookmark of a question for the given user.
///
/// Returns whether the question is saved afterwards.
pub fn toggle_saved_question<R>(repo: &R, user: &EmailAddress, question_id: &Id) -> Result<bool>
where
    R: CollectionRepo + QuestionRepo + ActivityRepo,
{
    // The question must exist before anything is written.
    let question = repo.get_question(question_id)?;
    let content = ContentRef::question(question.id.clone());
    let saved = if repo.is_question_saved(user, &question.id)? {
        repo.delete_bookmark(user, &question.id)?;
        repo.log_activity(&ActivityLogEntry {
            activity: Activity::now(Some(user.clone())),
            action: UserAction::UnsaveQuestion,
            content,
        })?;
        false
    } else {
        repo.create_bookmark(user, &question.id)?;
        repo.log_activity(&ActivityLogEntry {
            activity: Activity::now(Some(user.clone())),
            action: UserAction::SaveQuestion,
            content,
        })?;
        true
    };
    Ok(saved)
}

pub fn saved_questions<R>(
    repo: &R,
    user: &EmailAddress,
    text: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Question>>
where
    R: CollectionRepo,
{
    Ok(repo.saved_questions(user, text, pagination)?)
}
