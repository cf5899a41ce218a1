use super::*;

#[get("/questions?<text>&<tag>&<author>&<sort>&<offset>&<limit>")]
pub fn get_questions(
    db: sqlite::Connections,
    text: Option<String>,
    tag: Option<String>,
    author: Option<String>,
    sort: Option<&str>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Question>> {
    let sort = sort.map(parse_question_sort).transpose()?.unwrap_or_default();
    let query = QuestionQuery {
        text,
        tag,
        author,
        sort,
        pagination: Pagination { offset, limit },
    };
    let questions = usecases::query_questions(&db.shared()?, query)?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

#[get("/questions/<id>")]
pub fn get_question(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::QuestionDetails> {
    let details =
        usecases::get_question_details(&db.shared()?, auth.account_email_opt(), &id.into())?;
    Ok(Json(adapters::json::question_details(details)))
}

#[post("/questions", format = "application/json", data = "<new_question>")]
pub fn post_question(
    db: sqlite::Connections,
    auth: Auth,
    new_question: JsonResult<json::NewQuestion>,
) -> Result<json::Question> {
    let author = auth.account_email()?;
    let json::NewQuestion {
        title,
        content,
        tags,
    } = new_question?.into_inner();
    let question = flows::create_question(
        &db,
        author,
        usecases::NewQuestion {
            title,
            content,
            tags,
        },
    )?;
    Ok(Json(question.into()))
}

#[put("/questions/<id>", format = "application/json", data = "<update>")]
pub fn put_question(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::NewQuestion>,
) -> Result<json::Question> {
    let editor = auth.account_email()?;
    let json::NewQuestion {
        title,
        content,
        tags,
    } = update?.into_inner();
    let question = flows::update_question(
        &db,
        editor,
        &id.into(),
        usecases::UpdateQuestion {
            title,
            content,
            tags,
        },
    )?;
    Ok(Json(question.into()))
}

#[delete("/questions/<id>")]
pub fn delete_question(db: sqlite::Connections, auth: Auth, id: &str) -> StatusResult {
    let editor = auth.account_email()?;
    flows::delete_question(&db, editor, &id.into())?;
    Ok(Status::NoContent)
}

#[post("/questions/<id>/views")]
pub fn post_question_view(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    let viewer = auth.account_email_opt();
    db.exclusive()?
        .transaction(|conn| usecases::increment_question_views(conn, viewer, &id.into()))?;
    Ok(Json(()))
}

#[post("/questions/<id>/vote", format = "application/json", data = "<vote>")]
pub fn post_question_vote(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    vote: JsonResult<json::VoteRequest>,
) -> Result<json::VoteState> {
    let voter = auth.account_email()?;
    let direction = vote?.into_inner().direction.into();
    let outcome = flows::cast_vote(&db, voter, ContentRef::question(id.into()), direction)?;
    Ok(Json(vote_state(outcome)))
}

#[post("/questions/<id>/save")]
pub fn post_question_save(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::SavedState> {
    let user = auth.account_email()?;
    let saved = flows::toggle_saved_question(&db, user, &id.into())?;
    Ok(Json(json::SavedState { saved }))
}

#[get("/collection?<text>&<offset>&<limit>")]
pub fn get_saved_questions(
    db: sqlite::Connections,
    auth: Auth,
    text: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Question>> {
    let user = auth.account_email()?;
    let questions = usecases::saved_questions(
        &db.shared()?,
        user,
        text.as_deref(),
        &Pagination { offset, limit },
    )?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}
