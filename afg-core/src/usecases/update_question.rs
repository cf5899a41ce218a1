use super::{authorize::authorize_role, prelude::*};
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct UpdateQuestion {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Updates a question and synchronizes its tag records.
///
/// Labels that are new to the question are upserted and joined, labels
/// that were removed release their usage count and lose their join row.
/// Must run inside a single database transaction.
pub fn update_question<R>(
    repo: &R,
    editor: &EmailAddress,
    id: &Id,
    update: UpdateQuestion,
) -> Result<Question>
where
    R: QuestionRepo + TagRepo + UserRepo + ActivityRepo,
{
    let old = repo.get_question(id)?;
    let editor_user = repo.get_user_by_email(editor)?;
    if old.author != editor_user.username {
        authorize_role(&editor_user, Role::Admin)?;
    }
    let UpdateQuestion {
        title,
        content,
        tags,
    } = update;
    validate::question_title(&title)?;
    validate::question_content(&content)?;
    let tags = validate::normalize_tags(&tags)?;

    let updated = Question {
        title,
        content,
        tags: tags.clone(),
        ..old.clone()
    };
    repo.update_question(&updated)?;

    for label in &tags {
        if !old.tags.contains(label) {
            repo.add_question_tag(id, label)?;
            repo.add_tag_usage(label)?;
        }
    }
    for label in &old.tags {
        if !tags.contains(label) {
            repo.remove_question_tag(id, label)?;
            repo.release_tag_usage(label)?;
        }
    }

    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(editor.clone())),
        action: UserAction::EditQuestion,
        content: ContentRef::question(id.clone()),
    })?;
    Ok(updated)
}
