use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

use afg_core::entities::EmailAddress;

pub fn page(
    site: &str,
    title: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (site) }
                link rel="stylesheet" href="/main.css";
            }
            body {
                (header(site, email))
                @if let Some(flash) = flash {
                    div class=(format!("flash flash-{}", flash.kind())) {
                        (flash.message())
                    }
                }
                main { (content) }
            }
        }
    }
}

fn header(site: &str, email: Option<&EmailAddress>) -> Markup {
    html! {
        header {
            nav {
                a class="brand" href="/" { (site) }
                a href="/tags" { "Tags" }
                a href="/users" { "Users" }
                @if let Some(email) = email {
                    a href="/collection" { "Collection" }
                    a class="btn" href="/ask" { "Ask a question" }
                    form class="inline" action="/logout" method="POST" {
                        span class="account" { (email) }
                        input class="btn" type="submit" value="Sign out";
                    }
                } @else {
                    a href="/login" { "Sign in" }
                    a href="/register" { "Sign up" }
                }
            }
        }
    }
}
