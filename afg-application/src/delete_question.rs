use super::*;
use afg_core::entities::Id;

/// Deletes the question with its answers, votes, tag joins and
/// bookmarks inside a single database transaction.
pub fn delete_question(
    connections: &sqlite::Connections,
    editor: &EmailAddress,
    id: &Id,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_question(conn, editor, id).map_err(|err| {
            warn!("Failed to delete question {id}: {err}");
            err
        })
    })?;
    Ok(())
}
