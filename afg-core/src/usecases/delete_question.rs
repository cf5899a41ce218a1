use super::{authorize::authorize_role, prelude::*, vote::apply_vote_reputation};
use crate::reputation;

/// Deletes a question together with everything that hangs off it:
/// answers, votes, tag joins and bookmarks.
///
/// Every reputation delta that the question, its answers and their
/// votes once applied is reversed, and every tag releases one usage
/// count. Must run inside a single database transaction.
pub fn delete_question<R>(repo: &R, editor: &EmailAddress, id: &Id) -> Result<()>
where
    R: QuestionRepo + AnswerRepo + TagRepo + VoteRepo + CollectionRepo + UserRepo + ActivityRepo,
{
    let question = repo.get_question(id)?;
    let editor_user = repo.get_user_by_email(editor)?;
    if question.author != editor_user.username {
        authorize_role(&editor_user, Role::Admin)?;
    }

    for answer in repo.answers_of_question(id, &Pagination::default())? {
        let content = ContentRef::answer(answer.id.clone());
        for vote in repo.votes_of_content(&content)? {
            apply_vote_reputation(repo, &vote, &answer.author, true)?;
        }
        repo.delete_votes_of_content(&content)?;
        repo.delete_answer(&answer.id)?;
        repo.adjust_reputation(&answer.author, -reputation::POST_ANSWER)?;
    }

    let content = ContentRef::question(question.id.clone());
    for vote in repo.votes_of_content(&content)? {
        apply_vote_reputation(repo, &vote, &question.author, true)?;
    }
    repo.delete_votes_of_content(&content)?;

    for label in &question.tags {
        repo.release_tag_usage(label)?;
    }
    repo.delete_bookmarks_of_question(id)?;
    repo.delete_question(id)?;
    repo.adjust_reputation(&question.author, -reputation::ASK_QUESTION)?;
    repo.log_activity(&ActivityLogEntry {
        activity: Activity::now(Some(editor.clone())),
        action: UserAction::DeleteQuestion,
        content,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn delete_question_reverses_all_effects() {
        let db = MockDb::default();
        let asker = register_user(&db, "jane@askforge.dev", "jane");
        let answerer = register_user(&db, "john@askforge.dev", "john");
        let question = create_question(
            &db,
            &asker,
            new_question("How does this work?", &["rust", "sqlite"]),
        )
        .unwrap();
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
            &answerer,
            ContentRef::question(question.id.clone()),
            VoteDirection::Up,
        )
        .unwrap();
        cast_vote(
            &db,
            &asker,
            ContentRef::answer(answer.id.clone()),
            VoteDirection::Up,
        )
        .unwrap();
        toggle_saved_question(&db, &answerer, &question.id).unwrap();

        delete_question(&db, &asker, &question.id).unwrap();

        assert!(db.get_question(&question.id).is_err());
        assert!(db.get_answer(&answer.id).is_err());
        assert!(db.votes.borrow().is_empty());
        assert!(db.bookmarks.borrow().is_empty());
        assert_eq!(0, db.get_tag("rust").unwrap().question_count);
        assert_eq!(0, db.get_tag("sqlite").unwrap().question_count);
        // All reputation deltas are reversed.
        assert_eq!(0, db.get_user_by_email(&asker).unwrap().reputation);
        assert_eq!(0, db.get_user_by_email(&answerer).unwrap().reputation);
    }

    #[test]
    fn only_the_author_or_an_admin_may_delete() {
        let db = MockDb::default();
        let asker = register_user(&db, "jane@askforge.dev", "jane");
        let other = register_user(&db, "john@askforge.dev", "john");
        let question =
            create_question(&db, &asker, new_question("How does this work?", &["rust"])).unwrap();

        assert!(matches!(
            delete_question(&db, &other, &question.id),
            Err(Error::Forbidden)
        ));
        promote_to_admin(&db, &other);
        assert!(delete_question(&db, &other, &question.id).is_ok());
    }
}
