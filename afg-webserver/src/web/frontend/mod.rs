use std::result;

use maud::Markup;
use num_traits::FromPrimitive as _;
use rocket::{
    self, form::Form, get, post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, FromForm, Route, State,
};

use afg_application::prelude as flows;
use afg_core::{
    entities::*,
    repositories::{Pagination, QuestionQuery, QuestionRepo as _, QuestionSort, TagSort, UserRepo as _},
    usecases,
};

use super::{api::ApiError, guards::*, sqlite, Cfg};

mod login;
mod register;
mod view;

#[cfg(test)]
mod tests;

const MAIN_CSS: &str = include_str!("main.css");

const PAGE_SIZE: u64 = 20;
const SIDEBAR_TAG_COUNT: u64 = 10;
const PROFILE_LIST_LEN: u64 = 5;

type Result<T> = result::Result<T, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        get_question,
        get_ask_question,
        post_ask_question,
        get_edit_question,
        post_edit_question,
        post_delete_question,
        post_answer,
        post_delete_answer,
        post_question_vote,
        post_answer_vote,
        post_save_question,
        get_tags,
        get_tag,
        get_users,
        get_user,
        get_collection,
        get_search,
        post_change_user_role,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
    ]
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

fn page_offset(page: Option<u64>) -> Pagination {
    let page = page.unwrap_or(1).max(1);
    Pagination {
        offset: Some((page - 1) * PAGE_SIZE),
        limit: Some(PAGE_SIZE),
    }
}

fn parse_sort(sort: Option<&str>) -> QuestionSort {
    match sort {
        Some("most_viewed") => QuestionSort::MostViewed,
        Some("most_voted") => QuestionSort::MostVoted,
        Some("unanswered") => QuestionSort::Unanswered,
        _ => QuestionSort::Newest,
    }
}

#[get("/?<text>&<sort>&<page>")]
pub fn get_index(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
    text: Option<String>,
    sort: Option<&str>,
    page: Option<u64>,
) -> Result<Markup> {
    let db = db.shared()?;
    let questions = usecases::query_questions(
        &db,
        QuestionQuery {
            text: text.clone(),
            sort: parse_sort(sort),
            pagination: page_offset(page),
            ..Default::default()
        },
    )?;
    let popular_tags = usecases::most_popular_tags(
        &db,
        &Default::default(),
        &Pagination {
            offset: None,
            limit: Some(SIDEBAR_TAG_COUNT),
        },
    )?;
    Ok(view::index(
        &cfg.instance_name,
        auth.account_email_opt(),
        flash,
        &questions,
        &popular_tags,
        text.as_deref(),
        sort,
        page.unwrap_or(1),
    ))
}

#[get("/questions/<id>")]
pub fn get_question(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
    id: &str,
) -> Result<Markup> {
    let viewer_email = auth.account_email_opt();
    let id: Id = id.into();
    db.exclusive()?
        .transaction(|conn| usecases::increment_question_views(conn, viewer_email, &id))?;
    let db = db.shared()?;
    let details = usecases::get_question_details(&db, viewer_email, &id)?;
    let viewer = viewer_email
        .map(|email| db.get_user_by_email(email))
        .transpose()?;
    Ok(view::question_details(
        &cfg.instance_name,
        viewer.as_ref(),
        flash,
        &details,
    ))
}

#[derive(FromForm)]
pub struct QuestionForm {
    title: String,
    content: String,
    /// Whitespace-separated tag labels.
    tags: String,
}

impl QuestionForm {
    fn tags(&self) -> Vec<String> {
        self.tags.split_whitespace().map(ToOwned::to_owned).collect()
    }
}

#[get("/ask")]
pub fn get_ask_question(
    account: Account,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
) -> Markup {
    view::ask_question_form(&cfg.instance_name, Some(account.email()), flash)
}

#[allow(clippy::result_large_err)]
#[post("/ask", data = "<data>")]
pub fn post_ask_question(
    db: sqlite::Connections,
    account: Account,
    data: Form<QuestionForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let new_question = usecases::NewQuestion {
        title: data.title.clone(),
        content: data.content.clone(),
        tags: data.tags(),
    };
    match flows::create_question(&db, account.email(), new_question) {
        Ok(question) => Ok(Redirect::to(uri!(get_question(question.id.as_str())))),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_ask_question)),
            format!("Your question could not be posted: {err}"),
        )),
    }
}

#[get("/questions/<id>/edit")]
pub fn get_edit_question(
    db: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
    id: &str,
) -> Result<Markup> {
    let question = db.shared()?.get_question(&id.into())?;
    Ok(view::edit_question_form(
        &cfg.instance_name,
        Some(account.email()),
        flash,
        &question,
    ))
}

#[allow(clippy::result_large_err)]
#[post("/questions/<id>/edit", data = "<data>")]
pub fn post_edit_question(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: Form<QuestionForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let update = usecases::UpdateQuestion {
        title: data.title.clone(),
        content: data.content.clone(),
        tags: data.tags(),
    };
    match flows::update_question(&db, account.email(), &id.into(), update) {
        Ok(question) => Ok(Redirect::to(uri!(get_question(question.id.as_str())))),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_edit_question(id))),
            format!("Your changes could not be saved: {err}"),
        )),
    }
}

#[allow(clippy::result_large_err)]
#[post("/questions/<id>/delete")]
pub fn post_delete_question(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> result::Result<Flash<Redirect>, Flash<Redirect>> {
    match flows::delete_question(&db, account.email(), &id.into()) {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(get_index(_, _, _))),
            "The question has been deleted.",
        )),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_question(id))),
            format!("The question could not be deleted: {err}"),
        )),
    }
}

#[derive(FromForm)]
pub struct AnswerForm {
    content: String,
}

#[allow(clippy::result_large_err)]
#[post("/questions/<id>/answers", data = "<data>")]
pub fn post_answer(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: Form<AnswerForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let new_answer = usecases::NewAnswer {
        content: data.content.clone(),
    };
    match flows::create_answer(&db, account.email(), &id.into(), new_answer) {
        Ok(_) => Ok(Redirect::to(uri!(get_question(id)))),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_question(id))),
            format!("Your answer could not be posted: {err}"),
        )),
    }
}

#[allow(clippy::result_large_err)]
#[post("/answers/<id>/delete")]
pub fn post_delete_answer(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> result::Result<Redirect, Flash<Redirect>> {
    let id: Id = id.into();
    let question_id = match db.shared() {
        Ok(db) => match afg_core::repositories::AnswerRepo::get_answer(&db, &id) {
            Ok(answer) => answer.question_id,
            Err(err) => {
                return Err(Flash::error(
                    Redirect::to(uri!(get_index(_, _, _))),
                    format!("The answer could not be deleted: {err}"),
                ))
            }
        },
        Err(_) => {
            return Err(Flash::error(
                Redirect::to(uri!(get_index(_, _, _))),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ))
        }
    };
    match flows::delete_answer(&db, account.email(), &id) {
        Ok(()) => Ok(Redirect::to(uri!(get_question(question_id.as_str())))),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_question(question_id.as_str()))),
            format!("The answer could not be deleted: {err}"),
        )),
    }
}

#[derive(FromForm)]
pub struct VoteForm {
    direction: String,
}

#[allow(clippy::result_large_err)]
#[post("/questions/<id>/vote", data = "<data>")]
pub fn post_question_vote(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: Form<VoteForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let redirect = Redirect::to(uri!(get_question(id)));
    let Ok(direction) = data.direction.parse::<VoteDirection>() else {
        return Err(Flash::error(redirect, "Invalid vote."));
    };
    match flows::cast_vote(
        &db,
        account.email(),
        ContentRef::question(id.into()),
        direction,
    ) {
        Ok(_) => Ok(redirect),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_question(id))),
            format!("Your vote was not registered: {err}"),
        )),
    }
}

#[allow(clippy::result_large_err)]
#[post("/answers/<id>/vote", data = "<data>")]
pub fn post_answer_vote(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: Form<VoteForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let id: Id = id.into();
    let question_id = db
        .shared()
        .ok()
        .and_then(|db| afg_core::repositories::AnswerRepo::get_answer(&db, &id).ok())
        .map(|answer| answer.question_id);
    let redirect = match &question_id {
        Some(question_id) => Redirect::to(uri!(get_question(question_id.as_str()))),
        None => Redirect::to(uri!(get_index(_, _, _))),
    };
    let Ok(direction) = data.direction.parse::<VoteDirection>() else {
        return Err(Flash::error(redirect, "Invalid vote."));
    };
    match flows::cast_vote(&db, account.email(), ContentRef::answer(id), direction) {
        Ok(_) => Ok(redirect),
        Err(err) => Err(Flash::error(
            redirect,
            format!("Your vote was not registered: {err}"),
        )),
    }
}

#[allow(clippy::result_large_err)]
#[post("/questions/<id>/save")]
pub fn post_save_question(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> result::Result<Redirect, Flash<Redirect>> {
    match flows::toggle_saved_question(&db, account.email(), &id.into()) {
        Ok(_) => Ok(Redirect::to(uri!(get_question(id)))),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_question(id))),
            format!("The question could not be saved: {err}"),
        )),
    }
}

#[get("/tags?<text>&<sort>&<page>")]
pub fn get_tags(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    text: Option<&str>,
    sort: Option<&str>,
    page: Option<u64>,
) -> Result<Markup> {
    let sort = match sort {
        Some("name") => TagSort::Name,
        Some("recent") => TagSort::Recent,
        _ => TagSort::Popular,
    };
    let tags = usecases::query_tags(&db.shared()?, text, sort, &page_offset(page))?;
    Ok(view::tags(
        &cfg.instance_name,
        auth.account_email_opt(),
        &tags,
        text,
    ))
}

#[get("/tags/<label>?<page>")]
pub fn get_tag(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    label: &str,
    page: Option<u64>,
) -> Result<Markup> {
    let (tag, questions) = usecases::questions_by_tag(&db.shared()?, label, &page_offset(page))?;
    Ok(view::tag_questions(
        &cfg.instance_name,
        auth.account_email_opt(),
        &tag,
        &questions,
    ))
}

#[get("/users?<text>&<page>")]
pub fn get_users(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    text: Option<&str>,
    page: Option<u64>,
) -> Result<Markup> {
    let users = usecases::query_users(&db.shared()?, text, &page_offset(page))?;
    Ok(view::users(
        &cfg.instance_name,
        auth.account_email_opt(),
        &users,
        text,
    ))
}

#[get("/users/<username>")]
pub fn get_user(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
    username: &str,
) -> Result<Markup> {
    let db = db.shared()?;
    let profile = usecases::get_user_profile(&db, username)?;
    let list = Pagination {
        offset: None,
        limit: Some(PROFILE_LIST_LEN),
    };
    let questions = usecases::questions_of_user(&db, username, &list)?;
    let answers = usecases::answers_of_user(&db, username, &list)?;
    let viewer_is_admin = auth
        .user_with_min_role(&db, Role::Admin)
        .is_ok();
    Ok(view::user_profile(
        &cfg.instance_name,
        auth.account_email_opt(),
        flash,
        &profile,
        &questions,
        &answers,
        viewer_is_admin,
    ))
}

#[get("/collection?<text>&<page>")]
pub fn get_collection(
    db: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    text: Option<&str>,
    page: Option<u64>,
) -> Result<Markup> {
    let questions = usecases::saved_questions(
        &db.shared()?,
        account.email(),
        text,
        &page_offset(page),
    )?;
    Ok(view::collection(
        &cfg.instance_name,
        Some(account.email()),
        &questions,
        text,
    ))
}

#[get("/search?<q>")]
pub fn get_search(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    q: &str,
) -> Result<Markup> {
    let results = usecases::global_search(&db.shared()?, q, usecases::DEFAULT_SEARCH_LIMIT)?;
    Ok(view::search_results(
        &cfg.instance_name,
        auth.account_email_opt(),
        q,
        &results,
    ))
}

#[derive(FromForm)]
pub struct ChangeUserRoleForm {
    username: String,
    role: u8,
}

#[allow(clippy::result_large_err)]
#[post("/change-user-role", data = "<data>")]
pub fn post_change_user_role(
    db: sqlite::Connections,
    account: Account,
    data: Form<ChangeUserRoleForm>,
) -> result::Result<Redirect, Flash<Redirect>> {
    let d = data.into_inner();
    let redirect = Redirect::to(uri!(get_user(&d.username)));
    let Some(role) = Role::from_u8(d.role) else {
        return Err(Flash::error(redirect, "Invalid role."));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            redirect,
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match usecases::change_user_role(&db, account.email(), &d.username, role) {
        Ok(()) => Ok(redirect),
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_user(&d.username))),
            format!("The role could not be changed: {err}"),
        )),
    }
}
