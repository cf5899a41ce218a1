use super::*;

/// Registers a new user account inside a single database transaction.
pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            info!("Failed to register user: {err}");
            err
        })
    })?;
    Ok(user)
}
