use maud::{html, Markup};
use rocket::request::FlashMessage;

use afg_core::{entities::*, usecases::SearchResults};

mod login;
mod page;
mod question;
mod register;
mod tag;
mod user;

pub use self::{login::*, question::*, register::*, tag::*, user::*};
use page::*;

use super::PAGE_SIZE;

pub fn index(
    site: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    questions: &[Question],
    popular_tags: &[TagFrequency],
    text: Option<&str>,
    sort: Option<&str>,
    page_num: u64,
) -> Markup {
    page(
        site,
        "All Questions",
        email,
        flash,
        html! {
            div class="columns" {
                div class="main-column" {
                    h1 { "All Questions" }
                    (search_form("/", text, "search questions"))
                    (sort_links(text, sort))
                    (question_list(questions))
                    (pagination_links(page_num, questions.len()))
                }
                aside {
                    h2 { "Popular tags" }
                    ul class="tag-cloud" {
                        @for TagFrequency(label, count) in popular_tags {
                            li {
                                a class="tag" href=(format!("/tags/{label}")) { (label) }
                                span class="count" { (count) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn collection(
    site: &str,
    email: Option<&EmailAddress>,
    questions: &[Question],
    text: Option<&str>,
) -> Markup {
    page(
        site,
        "Saved Questions",
        email,
        None,
        html! {
            h1 { "Saved Questions" }
            (search_form("/collection", text, "search saved questions"))
            (question_list(questions))
        },
    )
}

pub fn search_results(
    site: &str,
    email: Option<&EmailAddress>,
    search_term: &str,
    results: &SearchResults,
) -> Markup {
    let is_empty = results.questions.is_empty()
        && results.answers.is_empty()
        && results.tags.is_empty()
        && results.users.is_empty();
    page(
        site,
        "Search",
        email,
        None,
        html! {
            h1 { "Search" }
            form action="/search" method="GET" {
                input type="text" name="q" value=(search_term) maxlength="200"
                    placeholder="search questions, answers, tags and users";
                input class="btn" type="submit" value="Search";
            }
            @if is_empty {
                p class="empty" {
                    "We could not find anything related to "
                    em { (format!("'{search_term}'")) }
                }
            } @else {
                @if !results.questions.is_empty() {
                    h2 { "Questions" }
                    (question_list(&results.questions))
                }
                @if !results.answers.is_empty() {
                    h2 { "Answers" }
                    ul class="answer-list" {
                        @for answer in &results.answers {
                            li {
                                a href=(format!("/questions/{}", answer.question_id)) {
                                    (answer.content)
                                }
                                p class="meta" { "answered by " (user_link(&answer.author)) }
                            }
                        }
                    }
                }
                @if !results.tags.is_empty() {
                    h2 { "Tags" }
                    (tag_links(
                        &results.tags.iter().map(|tag| tag.label.clone()).collect::<Vec<_>>()
                    ))
                }
                @if !results.users.is_empty() {
                    h2 { "Users" }
                    ul class="user-list" {
                        @for user in &results.users {
                            li { (user_link(&user.username)) }
                        }
                    }
                }
            }
        },
    )
}

pub(crate) fn question_list(questions: &[Question]) -> Markup {
    html! {
        @if questions.is_empty() {
            p class="empty" { "No questions found." }
        }
        ul class="question-list" {
            @for question in questions {
                li { (question_summary(question)) }
            }
        }
    }
}

fn question_summary(question: &Question) -> Markup {
    html! {
        div class="question-summary" {
            div class="stats" {
                span { (question.score()) " votes" }
                span { (question.answer_count) " answers" }
                span { (question.view_count) " views" }
            }
            div class="summary" {
                h3 {
                    a href=(format!("/questions/{}", question.id)) { (question.title) }
                }
                (tag_links(&question.tags))
                p class="meta" {
                    "asked " (question.created_at) " by " (user_link(&question.author))
                }
            }
        }
    }
}

pub(crate) fn tag_links(tags: &[String]) -> Markup {
    html! {
        ul class="tags" {
            @for label in tags {
                li {
                    a class="tag" href=(format!("/tags/{label}")) { (label) }
                }
            }
        }
    }
}

pub(crate) fn user_link(username: &str) -> Markup {
    html! {
        a class="user" href=(format!("/users/{username}")) { (username) }
    }
}

pub(crate) fn search_form(action: &str, value: Option<&str>, placeholder: &str) -> Markup {
    html! {
        form action=(action) method="GET" {
            input type="text" name="text" value=(value.unwrap_or(""))
                maxlength="200" placeholder=(placeholder);
            input class="btn" type="submit" value="Search";
        }
    }
}

fn sort_links(text: Option<&str>, active: Option<&str>) -> Markup {
    let sorts = [
        ("newest", "Newest"),
        ("most_viewed", "Most viewed"),
        ("most_voted", "Most voted"),
        ("unanswered", "Unanswered"),
    ];
    let active = active.unwrap_or("newest");
    html! {
        ul class="sort-links" {
            @for (sort, title) in sorts {
                li {
                    @let query = match text {
                        Some(text) => format!("/?text={text}&sort={sort}"),
                        None => format!("/?sort={sort}"),
                    };
                    a class=(if sort == active { "active" } else { "" }) href=(query) {
                        (title)
                    }
                }
            }
        }
    }
}

fn pagination_links(page_num: u64, result_len: usize) -> Markup {
    html! {
        div class="pagination" {
            @if page_num > 1 {
                a href=(format!("/?page={}", page_num - 1)) { "Previous" }
            }
            span { "Page " (page_num) }
            @if result_len as u64 == PAGE_SIZE {
                a href=(format!("/?page={}", page_num + 1)) { "Next" }
            }
        }
    }
}
