use super::*;
use afg_core::entities::Id;

/// Deletes the answer with its votes and decrements the question's
/// answer counter inside a single database transaction.
pub fn delete_answer(
    connections: &sqlite::Connections,
    editor: &EmailAddress,
    id: &Id,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_answer(conn, editor, id).map_err(|err| {
            warn!("Failed to delete answer {id}: {err}");
            err
        })
    })?;
    Ok(())
}
