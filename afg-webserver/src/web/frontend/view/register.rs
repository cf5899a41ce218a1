use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;

pub fn register(site: &str, flash: Option<FlashMessage>) -> Markup {
    page(
        site,
        "Sign up",
        None,
        flash,
        html! {
            h1 { "Sign up" }
            form class="auth-form" action="/register" method="POST" {
                label for="name" { "Name" }
                input id="name" type="text" name="name" maxlength="60";
                label for="username" { "Username" }
                input id="username" type="text" name="username" maxlength="30"
                    placeholder="lowercase letters, digits, - and _";
                label for="email" { "Email" }
                input id="email" type="email" name="email" placeholder="you@example.com";
                label for="password" { "Password" }
                input id="password" type="password" name="password";
                br;
                input class="btn" type="submit" value="Sign up";
            }
            p {
                "Already have an account? "
                a href="/login" { "Sign in" }
            }
        },
    )
}
