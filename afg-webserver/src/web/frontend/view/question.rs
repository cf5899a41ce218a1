use maud::{html, Markup};
use rocket::request::FlashMessage;

use afg_core::{entities::*, usecases::QuestionDetails};

use super::{
    super::super::markdown,
    page::page,
    tag_links, user_link,
};

fn may_moderate(viewer: Option<&User>, author: &str) -> bool {
    viewer
        .map(|user| user.username == author || user.role >= Role::Admin)
        .unwrap_or(false)
}

fn vote_controls(
    action: &str,
    up_votes: u64,
    down_votes: u64,
    own_vote: Option<VoteDirection>,
) -> Markup {
    let up_class = if own_vote == Some(VoteDirection::Up) {
        "btn vote voted"
    } else {
        "btn vote"
    };
    let down_class = if own_vote == Some(VoteDirection::Down) {
        "btn vote voted"
    } else {
        "btn vote"
    };
    html! {
        div class="votes" {
            form class="inline" action=(action) method="POST" {
                input type="hidden" name="direction" value="up";
                input class=(up_class) type="submit" value=(format!("▲ {up_votes}"));
            }
            form class="inline" action=(action) method="POST" {
                input type="hidden" name="direction" value="down";
                input class=(down_class) type="submit" value=(format!("▼ {down_votes}"));
            }
        }
    }
}

pub fn question_details(
    site: &str,
    viewer: Option<&User>,
    flash: Option<FlashMessage>,
    details: &QuestionDetails,
) -> Markup {
    let QuestionDetails {
        question,
        answers,
        question_vote,
        answer_votes,
        saved,
    } = details;
    let email = viewer.map(|user| &user.email);
    page(
        site,
        &question.title,
        email,
        flash,
        html! {
            article class="question" {
                h1 { (question.title) }
                p class="meta" {
                    (question.view_count) " views · asked " (question.created_at)
                    " by " (user_link(&question.author))
                }
                (tag_links(&question.tags))
                div class="content" { (markdown::render(&question.content)) }
                div class="actions" {
                    (vote_controls(
                        &format!("/questions/{}/vote", question.id),
                        question.up_votes,
                        question.down_votes,
                        *question_vote,
                    ))
                    @if viewer.is_some() {
                        form class="inline" action=(format!("/questions/{}/save", question.id)) method="POST" {
                            input class="btn" type="submit" value=(if *saved { "★ Saved" } else { "☆ Save" });
                        }
                    }
                    @if may_moderate(viewer, &question.author) {
                        a class="btn" href=(format!("/questions/{}/edit", question.id)) { "Edit" }
                        form class="inline" action=(format!("/questions/{}/delete", question.id)) method="POST" {
                            input class="btn danger" type="submit" value="Delete";
                        }
                    }
                }
            }
            section class="answers" {
                h2 { (answers.len()) " Answers" }
                @for answer in answers {
                    @let own_vote = answer_votes
                        .iter()
                        .find(|(id, _)| *id == answer.id)
                        .map(|(_, direction)| *direction);
                    article class="answer" {
                        div class="content" { (markdown::render(&answer.content)) }
                        p class="meta" {
                            "answered " (answer.created_at) " by " (user_link(&answer.author))
                        }
                        div class="actions" {
                            (vote_controls(
                                &format!("/answers/{}/vote", answer.id),
                                answer.up_votes,
                                answer.down_votes,
                                own_vote,
                            ))
                            @if may_moderate(viewer, &answer.author) {
                                form class="inline" action=(format!("/answers/{}/delete", answer.id)) method="POST" {
                                    input class="btn danger" type="submit" value="Delete";
                                }
                            }
                        }
                    }
                }
            }
            @if viewer.is_some() {
                section class="answer-form" {
                    h2 { "Your Answer" }
                    form action=(format!("/questions/{}/answers", question.id)) method="POST" {
                        textarea name="content" rows="8"
                            placeholder="Write your answer in markdown" {}
                        br;
                        input class="btn" type="submit" value="Post your answer";
                    }
                }
            } @else {
                p {
                    a href="/login" { "Sign in" }
                    " to answer this question."
                }
            }
        },
    )
}

pub fn ask_question_form(
    site: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
) -> Markup {
    page(
        site,
        "Ask a question",
        email,
        flash,
        html! {
            h1 { "Ask a question" }
            (question_form("/ask", None))
        },
    )
}

pub fn edit_question_form(
    site: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    question: &Question,
) -> Markup {
    page(
        site,
        "Edit question",
        email,
        flash,
        html! {
            h1 { "Edit question" }
            (question_form(
                &format!("/questions/{}/edit", question.id),
                Some(question),
            ))
        },
    )
}

fn question_form(action: &str, question: Option<&Question>) -> Markup {
    let title = question.map(|q| q.title.as_str()).unwrap_or("");
    let content = question.map(|q| q.content.as_str()).unwrap_or("");
    let tags = question.map(|q| q.tags.join(" ")).unwrap_or_default();
    html! {
        form class="question-form" action=(action) method="POST" {
            label for="title" { "Title" }
            input id="title" type="text" name="title" value=(title) maxlength="150"
                placeholder="Be specific and imagine you're asking another person";
            label for="content" { "Body" }
            textarea id="content" name="content" rows="12"
                placeholder="Describe your problem in markdown" { (content) }
            label for="tags" { "Tags" }
            input id="tags" type="text" name="tags" value=(tags)
                placeholder="up to 5 tags separated by spaces";
            br;
            input class="btn" type="submit" value="Save";
        }
    }
}
