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

use afg_application::prelude as flows;
use afg_core::usecases;

use super::{super::guards::*, sqlite, view, Cfg};

#[derive(FromForm)]
pub struct RegisterCredentials<'r> {
    pub(crate) name: &'r str,
    pub(crate) username: &'r str,
    pub(crate) email: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/register")]
pub fn get_register(
    cfg: &State<Cfg>,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if auth.account_email_opt().is_some() {
        Err(Redirect::to(uri!(super::get_index(_, _, _))))
    } else {
        Ok(view::register(&cfg.instance_name, flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/register", data = "<credentials>")]
pub fn post_register(
    db: sqlite::Connections,
    credentials: Form<RegisterCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let Ok(email) = credentials.email.parse() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_register)),
            "Invalid email address.",
        ));
    };
    let new_user = usecases::NewUser {
        name: credentials.name.to_string(),
        username: credentials.username.to_string(),
        email,
        password: credentials.password.to_string(),
    };
    match flows::register_user(&db, new_user) {
        Ok(user) => {
            // Registration signs the new user in immediately.
            cookies.add_private(
                Cookie::build((COOKIE_EMAIL_KEY, user.email.to_string()))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Flash::success(
                Redirect::to(uri!(super::get_index(_, _, _))),
                format!("Welcome, {}!", user.name),
            ))
        }
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_register)),
            format!("The account could not be created: {err}"),
        )),
    }
}
