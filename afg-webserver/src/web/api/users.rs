use rocket::http::SameSite;

use super::*;

fn add_session_cookie(cookies: &CookieJar<'_>, email: &EmailAddress) {
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, email.to_string()))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::CurrentUser> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>().map_err(|_| {
        ApiError::from(afg_core::usecases::Error::Credentials)
    })?;
    let credentials = usecases::Credentials {
        email: &email,
        password: &login.password,
    };
    let user = usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login with email '{}' failed: {}", login.email, err);
        err
    })?;
    add_session_cookie(cookies, &user.email);
    Ok(Json(user.into()))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::CurrentUser> {
    let new_user = adapters::json::try_new_user(new_user?.into_inner())?;
    let user = flows::register_user(&db, new_user)?;
    // Registration signs the new user in immediately.
    add_session_cookie(cookies, &user.email);
    Ok(Json(user.into()))
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, auth: Auth) -> Result<json::CurrentUser> {
    let user = auth.user_with_min_role(&db.shared()?, Role::User)?;
    Ok(Json(user.into()))
}

#[get("/users?<text>&<offset>&<limit>")]
pub fn get_users(
    db: sqlite::Connections,
    text: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::User>> {
    let users = usecases::query_users(
        &db.shared()?,
        text.as_deref(),
        &Pagination { offset, limit },
    )?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<username>")]
pub fn get_user(db: sqlite::Connections, username: &str) -> Result<json::UserProfile> {
    let profile = usecases::get_user_profile(&db.shared()?, username)?;
    Ok(Json(adapters::json::user_profile(profile)))
}

#[get("/users/<username>/questions?<offset>&<limit>")]
pub fn get_user_questions(
    db: sqlite::Connections,
    username: &str,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Question>> {
    let questions =
        usecases::questions_of_user(&db.shared()?, username, &Pagination { offset, limit })?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

#[get("/users/<username>/answers?<offset>&<limit>")]
pub fn get_user_answers(
    db: sqlite::Connections,
    username: &str,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Answer>> {
    let answers =
        usecases::answers_of_user(&db.shared()?, username, &Pagination { offset, limit })?;
    Ok(Json(answers.into_iter().map(Into::into).collect()))
}

#[get("/users/<username>/activity?<offset>&<limit>")]
pub fn get_user_activity(
    db: sqlite::Connections,
    username: &str,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::ActivityEntry>> {
    let entries =
        usecases::activity_of_user(&db.shared()?, username, &Pagination { offset, limit })?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
