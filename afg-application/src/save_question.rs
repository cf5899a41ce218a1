use super::*;
use afg_core::entities::Id;

/// Toggles the bookmark of a question. Returns whether the question
/// is saved afterwards.
pub fn toggle_saved_question(
    connections: &sqlite::Connections,
    user: &EmailAddress,
    question_id: &Id,
) -> Result<bool> {
    let saved = connections.exclusive()?.transaction(|conn| {
        usecases::toggle_saved_question(conn, user, question_id).map_err(|err| {
            warn!("Failed to toggle bookmark of question {question_id}: {err}");
            err
        })
    })?;
    Ok(saved)
}
