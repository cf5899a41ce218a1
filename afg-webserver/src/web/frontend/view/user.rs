use maud::{html, Markup};
use num_traits::ToPrimitive as _;
use rocket::request::FlashMessage;

use afg_core::{entities::*, usecases::UserProfile};

use super::{page::page, question_list, search_form, user_link};

pub fn users(
    site: &str,
    email: Option<&EmailAddress>,
    users: &[User],
    text: Option<&str>,
) -> Markup {
    page(
        site,
        "Users",
        email,
        None,
        html! {
            h1 { "Users" }
            (search_form("/users", text, "search users"))
            @if users.is_empty() {
                p class="empty" { "No users found." }
            }
            ul class="user-list" {
                @for user in users {
                    li {
                        (user_link(&user.username))
                        span class="count" { (user.reputation) " reputation" }
                    }
                }
            }
        },
    )
}

#[allow(clippy::too_many_arguments)]
pub fn user_profile(
    site: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    profile: &UserProfile,
    questions: &[Question],
    answers: &[Answer],
    viewer_is_admin: bool,
) -> Markup {
    let UserProfile {
        user,
        stats,
        badges,
    } = profile;
    page(
        site,
        &user.username,
        email,
        flash,
        html! {
            article class="profile" {
                h1 { (user.name) " " span class="username" { "@" (user.username) } }
                p class="meta" { "member since " (user.created_at) }
                @if let Some(bio) = &user.bio { p { (bio) } }
                @if let Some(location) = &user.location { p class="meta" { (location) } }
                @if let Some(website) = &user.website {
                    p { a href=(website) rel="nofollow" { (website) } }
                }
                h2 {
                    "Stats "
                    span class="reputation" { (user.reputation) " reputation" }
                }
                table class="stats-table" {
                    tr {
                        th { "Questions" }
                        th { "Answers" }
                        th { "Question votes" }
                        th { "Answer votes" }
                        th { "Views" }
                    }
                    tr {
                        td { (stats.question_count) }
                        td { (stats.answer_count) }
                        td { (stats.question_up_votes) }
                        td { (stats.answer_up_votes) }
                        td { (stats.total_views) }
                    }
                }
                p class="badges" {
                    span class="badge gold" { "● " (badges.gold) " gold" }
                    span class="badge silver" { "● " (badges.silver) " silver" }
                    span class="badge bronze" { "● " (badges.bronze) " bronze" }
                }
                @if viewer_is_admin {
                    (change_role_form(user))
                }
                h2 { "Recent questions" }
                (question_list(questions))
                h2 { "Recent answers" }
                @if answers.is_empty() {
                    p class="empty" { "No answers yet." }
                }
                ul class="answer-list" {
                    @for answer in answers {
                        li {
                            a href=(format!("/questions/{}", answer.question_id)) {
                                (answer.content)
                            }
                            p class="meta" { "answered " (answer.created_at) }
                        }
                    }
                }
            }
        },
    )
}

fn change_role_form(user: &User) -> Markup {
    let current = user.role.to_u8().unwrap_or_default();
    let roles = [
        (Role::Guest, "Guest"),
        (Role::User, "User"),
        (Role::Admin, "Admin"),
    ];
    html! {
        form class="role-form" action="/change-user-role" method="POST" {
            input type="hidden" name="username" value=(user.username);
            label for="role" { "Role" }
            select id="role" name="role" {
                @for (role, title) in roles {
                    @let value = role.to_u8().unwrap_or_default();
                    option value=(value) selected[value == current] { (title) }
                }
            }
            input class="btn" type="submit" value="Change role";
        }
    }
}
