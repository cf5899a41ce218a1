use super::{authorize::authorize_role, prelude::*, vote::apply_vote_reputation};
use crate::reputation;

/// Deletes an answer together with its votes.
///
/// The reputation earned through the answer and its votes is taken
/// back and the question's answer counter is decremented. Must run
/// inside a single database transaction.
pub fn delete_answer<R>(repo: &R, editor: &EmailAddress, id: &Id) -> Result<()>
where
    R: AnswerRepo + QuestionRepo + VoteRepo + UserRepo + ActivityRepo,
{
    let answer = repo.get_answer(id)?;
    let editor_user = repo.get_user_by_email(editor)?;
    if answer.author != editor_user.username {
        authorize_role(&editor_user, Role::Admin)?;
    }

    let content = ContentRef::answer(answer.id.clone());
    for vote in repo.votes_of_content(&content)? {
        apply_vote_reputation(repo, &vote, &answer.author, true)?;
    }
    repo.delete_votes_of_content(&content)?;
    repo.adjust_answer_count(&answer.question_id, -1)?;
    repo.delete_answer(id)?;
    repo.adjust_reputation(&answer.author, -reputation::POST_ANSWER)?;
    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(editor.clone())),
        action: UserAction::DeleteAnswer,
        content,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn delete_answer_reverses_all_effects() {
        let db = MockDb::default();
        let asker = register_user(&db, "jane@askforge.dev", "jane");
        let answerer = register_user(&db, "john@askforge.dev", "john");
        let question =
            create_question(&db, &asker, new_question("How does this work?", &["rust"])).unwrap();
        let answer = create_answer(
            &db,
            &answerer,
            &question.id,
            NewAnswer {
                content: "It works by doing the thing.".to_string(),
            },
        )
        .unwrap();
        cast_vote(
            &db,
            &asker,
            ContentRef::answer(answer.id.clone()),
            VoteDirection::Up,
        )
        .unwrap();

        delete_answer(&db, &answerer, &answer.id).unwrap();

        assert!(db.get_answer(&answer.id).is_err());
        assert_eq!(0, db.get_question(&question.id).unwrap().answer_count);
        assert!(db.votes.borrow().is_empty());
        // Only the asking reputation remains.
        assert_eq!(
            reputation::ASK_QUESTION,
            db.get_user_by_email(&asker).unwrap().reputation
        );
        assert_eq!(0, db.get_user_by_email(&answerer).unwrap().reputation);
    }

    #[test]
    fn only_the_author_or_an_admin_may_delete() {
        let db = MockDb::default();
        let asker = register_user(&db, "jane@askforge.dev", "jane");
        let answerer = register_user(&db, "john@askforge.dev", "john");
        let question =
            create_question(&db, &asker, new_question("How does this work?", &["rust"])).unwrap();
        let answer = create_answer(
            &db,
            &answerer,
            &question.id,
            NewAnswer {
                content: "It works by doing the thing.".to_string(),
            },
        )
        .unwrap();

        assert!(matches!(
            delete_answer(&db, &asker, &answer.id),
            Err(Error::Forbidden)
        ));
        promote_to_admin(&db, &asker);
        assert!(delete_answer(&db, &asker, &answer.id).is_ok());
    }
}
