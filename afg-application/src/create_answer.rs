use super::*;
use afg_core::entities::Id;

/// Posts the answer and increments the question's answer counter
/// inside a single database transaction.
pub fn create_answer(
    connections: &sqlite::Connections,
    author: &EmailAddress,
    question_id: &Id,
    new_answer: usecases::NewAnswer,
) -> Result<Answer> {
    let answer = connections.exclusive()?.transaction(|conn| {
        usecases::create_answer(conn, author, question_id, new_answer).map_err(|err| {
            warn!("Failed to create answer for question {question_id}: {err}");
            err
        })
    })?;
    Ok(answer)
}
