use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use afg_application::error::AppError;
use afg_core::{
    entities::{EmailAddress, Role, User},
    repositories::UserRepo,
    usecases,
    usecases::Error as ParameterError,
};

pub const COOKIE_EMAIL_KEY: &str = "askforge-user-email";

type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn account_email_opt(&self) -> Option<&EmailAddress> {
        self.account_email.as_ref()
    }

    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        Ok(usecases::authorize_user_by_email(
            repo,
            self.account_email()?,
            min_required_role,
        )?)
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
