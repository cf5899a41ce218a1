use super::{prelude as flows, *};

use afg_core::{
    repositories::{
        CollectionRepo as _, Pagination, QuestionQuery, QuestionRepo as _, TagRepo as _,
        UserRepo as _, VoteRepo as _,
    },
    reputation,
    usecases::Error as ParameterError,
};

fn setup() -> sqlite::Connections {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = sqlite::Connections::init(":memory:", 1).unwrap();
    afg_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn register(connections: &sqlite::Connections, email: &str, username: &str) -> EmailAddress {
    let email: EmailAddress = email.parse().unwrap();
    flows::register_user(
        connections,
        usecases::NewUser {
            name: username.to_string(),
            username: username.to_string(),
            email: email.clone(),
            password: "secret123".to_string(),
        },
    )
    .unwrap();
    email
}

fn new_question(title: &str, tags: &[&str]) -> usecases::NewQuestion {
    usecases::NewQuestion {
        title: title.to_string(),
        content: "Some elaborate description of the problem.".to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn new_answer() -> usecases::NewAnswer {
    usecases::NewAnswer {
        content: "It works by doing the thing.".to_string(),
    }
}

#[test]
fn create_question_with_tags() {
    let connections = setup();
    let author = register(&connections, "jane@askforge.dev", "jane");
    let question = flows::create_question(
        &connections,
        &author,
        new_question("How do I borrow twice?", &["Rust", "borrow-checker"]),
    )
    .unwrap();

    let db = connections.shared().unwrap();
    let loaded = db.get_question(&question.id).unwrap();
    assert_eq!("How do I borrow twice?", loaded.title);
    assert_eq!("jane", loaded.author);
    // Normalized and loaded in label order.
    assert_eq!(vec!["borrow-checker", "rust"], loaded.tags);
    assert_eq!(1, db.get_tag("rust").unwrap().question_count);
    assert_eq!(1, db.get_tag("borrow-checker").unwrap().question_count);
    assert_eq!(
        reputation::ASK_QUESTION,
        db.get_user_by_email(&author).unwrap().reputation
    );
}

#[test]
fn shared_tags_increment_the_usage_count() {
    let connections = setup();
    let author = register(&connections, "jane@askforge.dev", "jane");
    flows::create_question(&connections, &author, new_question("First question?", &["rust"]))
        .unwrap();
    flows::create_question(
        &connections,
        &author,
        new_question("Second question?", &["rust"]),
    )
    .unwrap();

    let db = connections.shared().unwrap();
    assert_eq!(1, db.count_tags().unwrap());
    assert_eq!(2, db.get_tag("rust").unwrap().question_count);
}

#[test]
fn update_question_synchronizes_tag_counters() {
    let connections = setup();
    let author = register(&connections, "jane@askforge.dev", "jane");
    let question = flows::create_question(
        &connections,
        &author,
        new_question("How do I borrow twice?", &["rust", "borrowing"]),
    )
    .unwrap();

    flows::update_question(
        &connections,
        &author,
        &question.id,
        usecases::UpdateQuestion {
            title: "How do I borrow twice?".to_string(),
            content: "Some elaborate description of the problem.".to_string(),
            tags: vec!["rust".to_string(), "lifetimes".to_string()],
        },
    )
    .unwrap();

    let db = connections.shared().unwrap();
    let loaded = db.get_question(&question.id).unwrap();
    assert_eq!(vec!["lifetimes", "rust"], loaded.tags);
    assert_eq!(1, db.get_tag("rust").unwrap().question_count);
    assert_eq!(1, db.get_tag("lifetimes").unwrap().question_count);
    assert_eq!(0, db.get_tag("borrowing").unwrap().question_count);
}

#[test]
fn delete_question_cleans_up_everything() {
    let connections = setup();
    let asker = register(&connections, "jane@askforge.dev", "jane");
    let answerer = register(&connections, "john@askforge.dev", "john");
    let question = flows::create_question(
        &connections,
        &asker,
        new_question("How does this work?", &["rust", "sqlite"]),
    )
    .unwrap();
    let answer =
        flows::create_answer(&connections, &answerer, &question.id, new_answer()).unwrap();
    flows::cast_vote(
        &connections,
        &answerer,
        ContentRef::question(question.id.clone()),
        VoteDirection::Up,
    )
    .unwrap();
    flows::cast_vote(
        &connections,
        &asker,
        ContentRef::answer(answer.id.clone()),
        VoteDirection::Up,
    )
    .unwrap();
    flows::toggle_saved_question(&connections, &answerer, &question.id).unwrap();

    flows::delete_question(&connections, &asker, &question.id).unwrap();

    let db = connections.shared().unwrap();
    assert!(db.get_question(&question.id).is_err());
    assert_eq!(0, db.get_tag("rust").unwrap().question_count);
    assert_eq!(0, db.get_tag("sqlite").unwrap().question_count);
    assert!(db
        .votes_of_content(&ContentRef::question(question.id.clone()))
        .unwrap()
        .is_empty());
    assert!(db
        .votes_of_content(&ContentRef::answer(answer.id.clone()))
        .unwrap()
        .is_empty());
    // All reputation deltas have been reversed.
    assert_eq!(0, db.get_user_by_email(&asker).unwrap().reputation);
    assert_eq!(0, db.get_user_by_email(&answerer).unwrap().reputation);
}

#[test]
fn vote_toggling_keeps_counters_consistent() {
    let connections = setup();
    let asker = register(&connections, "jane@askforge.dev", "jane");
    let voter = register(&connections, "john@askforge.dev", "john");
    let question = flows::create_question(
        &connections,
        &asker,
        new_question("How does this work?", &["rust"]),
    )
    .unwrap();
    let content = ContentRef::question(question.id.clone());

    flows::cast_vote(&connections, &voter, content.clone(), VoteDirection::Up).unwrap();
    flows::cast_vote(&connections, &voter, content.clone(), VoteDirection::Down).unwrap();
    flows::cast_vote(&connections, &voter, content.clone(), VoteDirection::Down).unwrap();

    let db = connections.shared().unwrap();
    let question = db.get_question(&question.id).unwrap();
    assert_eq!(0, question.up_votes);
    assert_eq!(0, question.down_votes);
    assert!(db.get_vote(&voter, &content).unwrap().is_none());
    assert_eq!(
        reputation::ASK_QUESTION,
        db.get_user_by_email(&asker).unwrap().reputation
    );
    assert_eq!(0, db.get_user_by_email(&voter).unwrap().reputation);
}

#[test]
fn saved_questions_listing() {
    let connections = setup();
    let asker = register(&connections, "jane@askforge.dev", "jane");
    let reader = register(&connections, "john@askforge.dev", "john");
    let question = flows::create_question(
        &connections,
        &asker,
        new_question("How does this work?", &["rust"]),
    )
    .unwrap();

    assert!(flows::toggle_saved_question(&connections, &reader, &question.id).unwrap());
    {
        let db = connections.shared().unwrap();
        let saved = db
            .saved_questions(&reader, None, &Pagination::default())
            .unwrap();
        assert_eq!(1, saved.len());
        assert_eq!(question.id, saved[0].id);
    }
    assert!(!flows::toggle_saved_question(&connections, &reader, &question.id).unwrap());
    {
        let db = connections.shared().unwrap();
        assert!(db
            .saved_questions(&reader, None, &Pagination::default())
            .unwrap()
            .is_empty());
    }
}

#[test]
fn duplicate_registration_fails() {
    let connections = setup();
    register(&connections, "jane@askforge.dev", "jane");
    let err = flows::register_user(
        &connections,
        usecases::NewUser {
            name: "Jane Again".to_string(),
            username: "jane2".to_string(),
            email: "jane@askforge.dev".parse().unwrap(),
            password: "secret123".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        error::AppError::Business(error::BError::Parameter(ParameterError::UserExists))
    ));
}

#[test]
fn failed_transactions_roll_back_all_steps() {
    let connections = setup();
    let author = register(&connections, "jane@askforge.dev", "jane");

    let mut db = connections.exclusive().unwrap();
    let result: std::result::Result<(), ParameterError> = db.transaction(|conn| {
        // The question and its tags are written...
        usecases::create_question(
            conn,
            &author,
            new_question("Doomed question?", &["rust", "sqlite"]),
        )?;
        // ...but a later step of the workflow fails.
        Err(ParameterError::Forbidden)
    });
    assert!(matches!(result, Err(ParameterError::Forbidden)));
    drop(db);

    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_questions().unwrap());
    assert_eq!(0, db.count_tags().unwrap());
    assert_eq!(0, db.get_user_by_email(&author).unwrap().reputation);
}

#[test]
fn query_questions_by_text_tag_and_sort() {
    let connections = setup();
    let author = register(&connections, "jane@askforge.dev", "jane");
    let borrow = flows::create_question(
        &connections,
        &author,
        new_question("How do I borrow twice?", &["rust"]),
    )
    .unwrap();
    let join = flows::create_question(
        &connections,
        &author,
        new_question("How do I join tables?", &["sqlite"]),
    )
    .unwrap();
    flows::create_answer(&connections, &author, &join.id, new_answer()).unwrap();

    let db = connections.shared().unwrap();
    let found = db
        .query_questions(&QuestionQuery {
            text: Some("borrow".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(1, found.len());
    assert_eq!(borrow.id, found[0].id);

    let found = db
        .query_questions(&QuestionQuery {
            tag: Some("sqlite".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(1, found.len());
    assert_eq!(join.id, found[0].id);

    let found = db
        .query_questions(&QuestionQuery {
            sort: afg_core::repositories::QuestionSort::Unanswered,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(1, found.len());
    assert_eq!(borrow.id, found[0].id);
}
