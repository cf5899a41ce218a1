use super::prelude::*;
use crate::{reputation, util::validate};

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Creates a question together with its tag records.
///
/// Tag labels are normalized first. For every label the tag record is
/// upserted (usage count incremented, record created on first use) and a
/// tag↔question join row is written. The author is awarded the asking
/// reputation. All of this must run inside a single database transaction.
pub fn create_question<R>(repo: &R, author: &EmailAddress, new_question: NewQuestion) -> Result<Question>
where
    R: QuestionRepo + TagRepo + UserRepo + ActivityRepo,
{
    let NewQuestion {
        title,
        content,
        tags,
    } = new_question;
    validate::question_title(&title)?;
    validate::question_content(&content)?;
    let tags = validate::normalize_tags(&tags)?;
    let user = repo.get_user_by_email(author)?;
    let question = Question {
        id: Id::new(),
        created_at: Timestamp::now(),
        author: user.username.clone(),
        title,
        content,
        tags,
        view_count: 0,
        up_votes: 0,
        down_votes: 0,
        answer_count: 0,
    };
    log::debug!(
        "Creating new question {} with tags {:?}",
        question.id,
        question.tags
    );
    repo.create_question(&question)?;
    for label in &question.tags {
        repo.add_tag_usage(label)?;
    }
    repo.adjust_reputation(&user.username, reputation::ASK_QUESTION)?;
    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(author.clone())),
        action: UserAction::AskQuestion,
        content: ContentRef::question(question.id.clone()),
    })?;
    Ok(question)
}
