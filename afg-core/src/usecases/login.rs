use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let Some(user) = repo.try_get_user_by_email(login.email)? else {
        return Err(Error::Credentials);
    };
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    if !user.email_confirmed {
        return Err(Error::EmailNotConfirmed);
    }
    Ok(user)
}
