use crate::web::{self, guards::COOKIE_EMAIL_KEY, tests::prelude::*};

fn setup() -> (Client, sqlite::Connections) {
    web::tests::rocket_test_setup(vec![("/", super::routes())])
}

fn user_session_cookie(response: &LocalResponse) -> Option<Cookie<'static>> {
    let cookie = response
        .headers()
        .get("Set-Cookie")
        .find(|v| v.starts_with(COOKIE_EMAIL_KEY))
        .and_then(|val| Cookie::parse_encoded(val).ok());
    cookie.map(|c| c.into_owned())
}

#[test]
fn get_index() {
    let (client, db) = setup();
    let author = register_user(&db, "jane@askforge.dev", "jane");
    flows::create_question(&db, &author, new_question("How does this work?", &["rust"])).unwrap();

    let res = client.get("/").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(body.contains("How does this work?"));
    assert!(body.contains("rust"));
}

#[test]
fn get_login_page() {
    let (client, _) = setup();
    let res = client.get("/login").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(body.contains("action=\"/login\""));
}

#[test]
fn login_with_invalid_credentials() {
    let (client, _) = setup();
    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("email=unknown%40askforge.dev&password=whatever")
        .dispatch();
    assert_eq!(Status::SeeOther, res.status());
    assert!(user_session_cookie(&res).is_none());
}

#[test]
fn login_and_logout() {
    let (client, db) = setup();
    register_user(&db, "jane@askforge.dev", "jane");

    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("email=jane%40askforge.dev&password=secret123")
        .dispatch();
    assert_eq!(Status::SeeOther, res.status());
    assert!(user_session_cookie(&res).is_some());

    // The ask page requires a session.
    let res = client.get("/ask").dispatch();
    assert_eq!(Status::Ok, res.status());

    let res = client.post("/logout").dispatch();
    assert_eq!(Status::SeeOther, res.status());
    let res = client.get("/ask").dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn ask_question_via_form() {
    let (client, db) = setup();
    register_user(&db, "jane@askforge.dev", "jane");
    client
        .post("/login")
        .header(ContentType::Form)
        .body("email=jane%40askforge.dev&password=secret123")
        .dispatch();

    let res = client
        .post("/ask")
        .header(ContentType::Form)
        .body(
            "title=How+do+I+borrow+twice%3F\
             &content=Some+elaborate+description+of+the+problem.\
             &tags=Rust+borrow-checker",
        )
        .dispatch();
    assert_eq!(Status::SeeOther, res.status());

    let db = db.shared().unwrap();
    assert_eq!(1, db.count_questions().unwrap());
    assert_eq!(2, db.count_tags().unwrap());
    assert_eq!(1, db.get_tag("rust").unwrap().question_count);
}

#[test]
fn question_page_counts_views() {
    let (client, db) = setup();
    let author = register_user(&db, "jane@askforge.dev", "jane");
    let question =
        flows::create_question(&db, &author, new_question("How does this work?", &["rust"]))
            .unwrap();

    let res = client.get(format!("/questions/{}", question.id)).dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(body.contains("How does this work?"));

    let db = db.shared().unwrap();
    assert_eq!(1, db.get_question(&question.id).unwrap().view_count);
}

#[test]
fn anonymous_users_cannot_vote() {
    let (client, db) = setup();
    let author = register_user(&db, "jane@askforge.dev", "jane");
    let question =
        flows::create_question(&db, &author, new_question("How does this work?", &["rust"]))
            .unwrap();

    let res = client
        .post(format!("/questions/{}/vote", question.id))
        .header(ContentType::Form)
        .body("direction=up")
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn profile_page_shows_stats() {
    let (client, db) = setup();
    let author = register_user(&db, "jane@askforge.dev", "jane");
    flows::create_question(&db, &author, new_question("How does this work?", &["rust"])).unwrap();

    let res = client.get("/users/jane").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(body.contains("@jane"));
    assert!(body.contains("reputation"));
}
