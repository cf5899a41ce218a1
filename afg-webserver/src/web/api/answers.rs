use super::*;

#[get("/questions/<id>/answers?<offset>&<limit>")]
pub fn get_answers(
    db: sqlite::Connections,
    id: &str,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Answer>> {
    let db = db.shared()?;
    let answers = usecases::get_question_details(&db, None, &id.into())?
        .answers
        .into_iter()
        .skip(offset.unwrap_or(0) as usize)
        .take(limit.map(|l| l as usize).unwrap_or(usize::MAX))
        .map(Into::into)
        .collect();
    Ok(Json(answers))
}

#[post("/questions/<id>/answers", format = "application/json", data = "<new_answer>")]
pub fn post_answer(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    new_answer: JsonResult<json::NewAnswer>,
) -> Result<json::Answer> {
    let author = auth.account_email()?;
    let json::NewAnswer { content } = new_answer?.into_inner();
    let answer = flows::create_answer(&db, author, &id.into(), usecases::NewAnswer { content })?;
    Ok(Json(answer.into()))
}

#[delete("/answers/<id>")]
pub fn delete_answer(db: sqlite::Connections, auth: Auth, id: &str) -> StatusResult {
    let editor = auth.account_email()?;
    flows::delete_answer(&db, editor, &id.into())?;
    Ok(Status::NoContent)
}

#[post("/answers/<id>/vote", format = "application/json", data = "<vote>")]
pub fn post_answer_vote(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    vote: JsonResult<json::VoteRequest>,
) -> Result<json::VoteState> {
    let voter = auth.account_email()?;
    let direction = vote?.into_inner().direction.into();
    let outcome = flows::cast_vote(&db, voter, ContentRef::answer(id.into()), direction)?;
    Ok(Json(vote_state(outcome)))
}
