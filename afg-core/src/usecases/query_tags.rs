use super::{prelude::*, query_questions::checked_pagination};

pub fn query_tags<R>(
    repo: &R,
    text: Option<&str>,
    sort: TagSort,
    pagination: &Pagination,
) -> Result<Vec<Tag>>
where
    R: TagRepo,
{
    let pagination = checked_pagination(pagination)?;
    Ok(repo.query_tags(text, sort, &pagination)?)
}

pub fn most_popular_tags<R>(
    repo: &R,
    params: &MostPopularTagsParams,
    pagination: &Pagination,
) -> Result<Vec<TagFrequency>>
where
    R: TagRepo,
{
    let pagination = checked_pagination(pagination)?;
    Ok(repo.most_popular_tags(params, &pagination)?)
}

/// The tag record together with the questions carrying it.
pub fn questions_by_tag<R>(
    repo: &R,
    label: &str,
    pagination: &Pagination,
) -> Result<(Tag, Vec<Question>)>
where
    R: TagRepo + QuestionRepo,
{
    let tag = repo.get_tag(label)?;
    let pagination = checked_pagination(pagination)?;
    let questions = repo.query_questions(&QuestionQuery {
        tag: Some(tag.label.clone()),
        pagination,
        ..Default::default()
    })?;
    Ok((tag, questions))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn released_tags_are_hidden_from_listings() {
        let db = MockDb::default();
        let author = register_user(&db, "jane@askforge.dev", "jane");
        let question = create_question(
            &db,
            &author,
            new_question("How does this work?", &["rust", "sqlite"]),
        )
        .unwrap();
        update_question(
            &db,
            &author,
            &question.id,
            UpdateQuestion {
                title: question.title.clone(),
                content: question.content.clone(),
                tags: vec!["rust".into()],
            },
        )
        .unwrap();

        let tags = query_tags(&db, None, TagSort::Popular, &Pagination::default()).unwrap();
        assert_eq!(1, tags.len());
        assert_eq!("rust", tags[0].label);
        // The released record itself is kept.
        assert_eq!(2, db.count_tags().unwrap());
    }

    #[test]
    fn popular_tags_are_sorted_by_usage() {
        let db = MockDb::default();
        let author = register_user(&db, "jane@askforge.dev", "jane");
        create_question(&db, &author, new_question("First question?", &["rust"])).unwrap();
        create_question(
            &db,
            &author,
            new_question("Second question?", &["rust", "diesel"]),
        )
        .unwrap();

        let tags = most_popular_tags(
            &db,
            &MostPopularTagsParams::default(),
            &Pagination::default(),
        )
        .unwrap();
        assert_eq!(
            vec![
                TagFrequency("rust".into(), 2),
                TagFrequency("diesel".into(), 1)
            ],
            tags
        );
    }

    #[test]
    fn questions_by_tag_fails_for_unknown_labels() {
        let db = MockDb::default();
        assert!(matches!(
            questions_by_tag(&db, "unknown", &Pagination::default()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
