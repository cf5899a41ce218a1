use super::*;
use afg_core::entities::Id;

/// Updates the question and synchronizes the tag records inside
/// a single database transaction.
pub fn update_question(
    connections: &sqlite::Connections,
    editor: &EmailAddress,
    id: &Id,
    update: usecases::UpdateQuestion,
) -> Result<Question> {
    let question = connections.exclusive()?.transaction(|conn| {
        usecases::update_question(conn, editor, id, update).map_err(|err| {
            warn!("Failed to update question {id}: {err}");
            err
        })
    })?;
    Ok(question)
}
