use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use afg_core::{entities::EmailAddress, usecases, usecases::Error as ParameterError};

use super::{super::guards::*, sqlite, view, Cfg};

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) email: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    cfg: &State<Cfg>,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if auth.account_email_opt().is_some() {
        Err(Redirect::to(uri!(super::get_index(_, _, _))))
    } else {
        Ok(view::login(&cfg.instance_name, flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.shared() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let Ok(email) = credentials.email.parse::<EmailAddress>() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "Invalid email or password.",
        ));
    };
    let login = usecases::Credentials {
        email: &email,
        password: credentials.password,
    };
    match usecases::login_with_email(&db, &login) {
        Err(err) => {
            let msg = match err {
                ParameterError::EmailNotConfirmed => {
                    "You have to confirm your email address first."
                }
                _ => "Invalid email or password.",
            };
            Err(Flash::error(Redirect::to(uri!(get_login)), msg))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_EMAIL_KEY, user.email.to_string()))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Redirect::to(uri!(super::get_index(_, _, _))))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index(_, _, _))),
        "You have successfully logged out.",
    )
}
