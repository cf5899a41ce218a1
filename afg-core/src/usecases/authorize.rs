use super::prelude::*;

pub fn authorize_user_by_email<R>(repo: &R, email: &EmailAddress, min_required_role: Role) -> Result<User>
where
    R: UserRepo,
{
    let user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::UserDoesNotExist)?;
    authorize_role(&user, min_required_role)?;
    Ok(user)
}

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}
