use crate::web::{self, tests::prelude::*};

use afg_boundary as json;

fn setup() -> (Client, sqlite::Connections) {
    web::tests::rocket_test_setup(vec![("/api", super::routes())])
}

fn setup_with_login(email: &str, username: &str) -> (Client, sqlite::Connections) {
    let (client, db) = setup();
    register_user(&db, email, username);
    assert_eq!(Status::Ok, try_login(&client, email, "secret123"));
    (client, db)
}

#[test]
fn register_and_login() {
    let (client, _db) = setup();
    let res = client
        .post("/api/users")
        .header(ContentType::JSON)
        .body(r#"{"name":"Jane","username":"jane","email":"jane@askforge.dev","password":"secret123"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let current: json::CurrentUser = res.into_json().unwrap();
    assert_eq!("jane", current.username);

    // Registration signs the user in.
    let res = client.get("/api/users/current").dispatch();
    assert_eq!(Status::Ok, res.status());

    // A fresh client is anonymous until it logs in.
    let (client, db) = setup();
    register_user(&db, "john@askforge.dev", "john");
    let res = client.get("/api/users/current").dispatch();
    assert_eq!(Status::Unauthorized, res.status());
    assert_eq!(
        Status::Unauthorized,
        try_login(&client, "john@askforge.dev", "wrong password")
    );
    assert_eq!(
        Status::Ok,
        try_login(&client, "john@askforge.dev", "secret123")
    );
    let res = client.get("/api/users/current").dispatch();
    assert_eq!(Status::Ok, res.status());
}

#[test]
fn duplicate_registration_conflicts() {
    let (client, db) = setup();
    register_user(&db, "jane@askforge.dev", "jane");
    let res = client
        .post("/api/users")
        .header(ContentType::JSON)
        .body(r#"{"name":"Jane","username":"jane2","email":"jane@askforge.dev","password":"secret123"}"#)
        .dispatch();
    assert_eq!(Status::Conflict, res.status());
}

#[test]
fn create_and_query_questions() {
    let (client, _db) = setup_with_login("jane@askforge.dev", "jane");
    let res = client
        .post("/api/questions")
        .header(ContentType::JSON)
        .body(
            r#"{"title":"How do I borrow twice?","content":"Some elaborate description of the problem.","tags":["Rust","borrow-checker"]}"#,
        )
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let question: json::Question = res.into_json().unwrap();
    assert_eq!("jane", question.author);
    assert_eq!(vec!["rust", "borrow-checker"], question.tags);

    let res = client.get("/api/questions?text=borrow").dispatch();
    assert_eq!(Status::Ok, res.status());
    let found: Vec<json::Question> = res.into_json().unwrap();
    assert_eq!(1, found.len());
    assert_eq!(question.id, found[0].id);

    let res = client.get("/api/questions?tag=rust").dispatch();
    let found: Vec<json::Question> = res.into_json().unwrap();
    assert_eq!(1, found.len());

    let res = client.get("/api/tags?sort=popular").dispatch();
    let tags: Vec<json::Tag> = res.into_json().unwrap();
    assert_eq!(2, tags.len());
}

#[test]
fn posting_questions_requires_login() {
    let (client, _db) = setup();
    let res = client
        .post("/api/questions")
        .header(ContentType::JSON)
        .body(
            r#"{"title":"How do I borrow twice?","content":"Some elaborate description of the problem.","tags":["rust"]}"#,
        )
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn invalid_questions_are_rejected() {
    let (client, _db) = setup_with_login("jane@askforge.dev", "jane");
    let res = client
        .post("/api/questions")
        .header(ContentType::JSON)
        .body(r#"{"title":"Why?","content":"Some elaborate description of the problem.","tags":["rust"]}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
}

#[test]
fn answer_and_vote_workflow() {
    let (client, db) = setup_with_login("john@askforge.dev", "john");
    let asker = register_user(&db, "jane@askforge.dev", "jane");
    let question = flows::create_question(&db, &asker, new_question("How does this work?", &["rust"]))
        .unwrap();

    let res = client
        .post(format!("/api/questions/{}/answers", question.id))
        .header(ContentType::JSON)
        .body(r#"{"content":"It works by doing the thing."}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let answer: json::Answer = res.into_json().unwrap();
    assert_eq!("john", answer.author);

    // Vote on the question: add, then toggle off.
    let res = client
        .post(format!("/api/questions/{}/vote", question.id))
        .header(ContentType::JSON)
        .body(r#"{"direction":"up"}"#)
        .dispatch();
    let state: json::VoteState = res.into_json().unwrap();
    assert!(state.up_voted);
    let res = client
        .post(format!("/api/questions/{}/vote", question.id))
        .header(ContentType::JSON)
        .body(r#"{"direction":"up"}"#)
        .dispatch();
    let state: json::VoteState = res.into_json().unwrap();
    assert!(!state.up_voted && !state.down_voted);

    // Flip a vote on the answer.
    let res = client
        .post(format!("/api/answers/{}/vote", answer.id))
        .header(ContentType::JSON)
        .body(r#"{"direction":"down"}"#)
        .dispatch();
    let state: json::VoteState = res.into_json().unwrap();
    assert!(state.down_voted);
    let res = client
        .post(format!("/api/answers/{}/vote", answer.id))
        .header(ContentType::JSON)
        .body(r#"{"direction":"up"}"#)
        .dispatch();
    let state: json::VoteState = res.into_json().unwrap();
    assert!(state.up_voted);

    let res = client
        .get(format!("/api/questions/{}", question.id))
        .dispatch();
    let details: json::QuestionDetails = res.into_json().unwrap();
    assert_eq!(1, details.question.answer_count);
    assert_eq!(1, details.answers.len());
    assert_eq!(1, details.answers[0].up_votes);
    assert_eq!(0, details.answers[0].down_votes);
}

#[test]
fn save_and_list_collection() {
    let (client, db) = setup_with_login("john@askforge.dev", "john");
    let asker = register_user(&db, "jane@askforge.dev", "jane");
    let question = flows::create_question(&db, &asker, new_question("How does this work?", &["rust"]))
        .unwrap();

    let res = client
        .post(format!("/api/questions/{}/save", question.id))
        .dispatch();
    let state: json::SavedState = res.into_json().unwrap();
    assert!(state.saved);

    let res = client.get("/api/collection").dispatch();
    let saved: Vec<json::Question> = res.into_json().unwrap();
    assert_eq!(1, saved.len());

    let res = client
        .post(format!("/api/questions/{}/save", question.id))
        .dispatch();
    let state: json::SavedState = res.into_json().unwrap();
    assert!(!state.saved);
}

#[test]
fn view_counter_and_profile_stats() {
    let (client, db) = setup();
    let asker = register_user(&db, "jane@askforge.dev", "jane");
    let question = flows::create_question(&db, &asker, new_question("How does this work?", &["rust"]))
        .unwrap();

    let res = client
        .post(format!("/api/questions/{}/views", question.id))
        .dispatch();
    assert_eq!(Status::Ok, res.status());

    let res = client.get("/api/users/jane").dispatch();
    assert_eq!(Status::Ok, res.status());
    let profile: json::UserProfile = res.into_json().unwrap();
    assert_eq!(1, profile.stats.question_count);
    assert_eq!(1, profile.stats.total_views);
    assert!(profile.user.reputation > 0);
}

#[test]
fn global_search() {
    let (client, db) = setup();
    let asker = register_user(&db, "rustacean@askforge.dev", "rustacean");
    flows::create_question(&db, &asker, new_question("How do I learn Rust?", &["rust"])).unwrap();

    let res = client.get("/api/search?q=rust").dispatch();
    assert_eq!(Status::Ok, res.status());
    let results: json::SearchResults = res.into_json().unwrap();
    assert_eq!(1, results.questions.len());
    assert_eq!(1, results.tags.len());
    assert_eq!(1, results.users.len());
}

#[test]
fn unknown_question_is_not_found() {
    let (client, _db) = setup();
    let res = client.get("/api/questions/does-not-exist").dispatch();
    assert_eq!(Status::NotFound, res.status());
}
