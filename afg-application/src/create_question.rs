use super::*;

/// Creates the question, upserts its tags and adjusts the
/// denormalized counters inside a single database transaction.
pub fn create_question(
    connections: &sqlite::Connections,
    author: &EmailAddress,
    new_question: usecases::NewQuestion,
) -> Result<Question> {
    let question = connections.exclusive()?.transaction(|conn| {
        usecases::create_question(conn, author, new_question).map_err(|err| {
            warn!("Failed to create question: {err}");
            err
        })
    })?;
    Ok(question)
}
