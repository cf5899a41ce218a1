use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;

pub fn login(site: &str, flash: Option<FlashMessage>) -> Markup {
    page(
        site,
        "Sign in",
        None,
        flash,
        html! {
            h1 { "Sign in" }
            form class="auth-form" action="/login" method="POST" {
                label for="email" { "Email" }
                input id="email" type="email" name="email" placeholder="you@example.com";
                label for="password" { "Password" }
                input id="password" type="password" name="password";
                br;
                input class="btn" type="submit" value="Sign in";
            }
            p {
                "No account yet? "
                a href="/register" { "Sign up" }
            }
        },
    )
}
