use maud::{html, Markup};

use afg_core::entities::*;

use super::{page::page, question_list, search_form};

pub fn tags(
    site: &str,
    email: Option<&EmailAddress>,
    tags: &[Tag],
    text: Option<&str>,
) -> Markup {
    page(
        site,
        "Tags",
        email,
        None,
        html! {
            h1 { "Tags" }
            (search_form("/tags", text, "filter by tag name"))
            @if tags.is_empty() {
                p class="empty" { "No tags found." }
            }
            ul class="tag-list" {
                @for tag in tags {
                    li {
                        a class="tag" href=(format!("/tags/{}", tag.label)) { (tag.label) }
                        span class="count" { (tag.question_count) " questions" }
                    }
                }
            }
        },
    )
}

pub fn tag_questions(
    site: &str,
    email: Option<&EmailAddress>,
    tag: &Tag,
    questions: &[Question],
) -> Markup {
    page(
        site,
        &format!("Questions tagged [{}]", tag.label),
        email,
        None,
        html! {
            h1 { "Questions tagged " span class="tag" { (tag.label) } }
            p class="meta" { (tag.question_count) " questions" }
            (question_list(questions))
        },
    )
}
