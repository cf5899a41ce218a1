use super::prelude::*;

pub const DEFAULT_SEARCH_LIMIT: u64 = 10;

#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
    pub tags: Vec<Tag>,
    pub users: Vec<User>,
}

/// One query across all content kinds, bounded per kind.
pub fn global_search<R>(repo: &R, text: &str, limit: u64) -> Result<SearchResults>
where
    R: QuestionRepo + AnswerRepo + TagRepo + UserRepo,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(SearchResults::default());
    }
    let pagination = Pagination {
        offset: None,
        limit: Some(limit),
    };
    let questions = repo.query_questions(&QuestionQuery {
        text: Some(text.to_string()),
        pagination,
        ..Default::default()
    })?;
    let answers = repo.search_answers(text, limit)?;
    let tags = repo.query_tags(Some(text), TagSort::Popular, &pagination)?;
    let users = repo.query_users(Some(text), &pagination)?;
    Ok(SearchResults {
        questions,
        answers,
        tags,
        users,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn search_across_all_kinds() {
        let db = MockDb::default();
        let rustacean = register_user(&db, "rustacean@askforge.dev", "rustacean");
        let question = create_question(
            &db,
            &rustacean,
            new_question("How do I learn Rust?", &["rust"]),
        )
        .unwrap();
        create_answer(
            &db,
            &rustacean,
            &question.id,
            NewAnswer {
                content: "Read the Rust book cover to cover.".to_string(),
            },
        )
        .unwrap();

        let results = global_search(&db, "rust", DEFAULT_SEARCH_LIMIT).unwrap();
        assert_eq!(1, results.questions.len());
        assert_eq!(1, results.answers.len());
        assert_eq!(1, results.tags.len());
        assert_eq!(1, results.users.len());
    }

    #[test]
    fn empty_terms_return_nothing() {
        let db = MockDb::default();
        let results = global_search(&db, "  ", DEFAULT_SEARCH_LIMIT).unwrap();
        assert!(results.questions.is_empty());
        assert!(results.users.is_empty());
    }
}
