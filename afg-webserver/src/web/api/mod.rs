use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::{ContentType, Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route,
};

use afg_application::prelude as flows;
use afg_boundary as json;
use afg_core::{
    entities::*,
    repositories::{Pagination, QuestionQuery, QuestionSort, TagSort},
    usecases,
};

use super::{guards::*, sqlite};
use crate::adapters;

mod answers;
mod error;
mod questions;
mod search;
mod tags;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   questions   --- //
        questions::get_questions,
        questions::get_question,
        questions::post_question,
        questions::put_question,
        questions::delete_question,
        questions::post_question_view,
        questions::post_question_vote,
        questions::post_question_save,
        questions::get_saved_questions,
        // ---   answers   --- //
        answers::get_answers,
        answers::post_answer,
        answers::delete_answer,
        answers::post_answer_vote,
        // ---   tags   --- //
        tags::get_tags,
        tags::get_popular_tags,
        tags::get_tag_questions,
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::get_current_user,
        users::get_users,
        users::get_user,
        users::get_user_questions,
        users::get_user_answers,
        users::get_user_activity,
        // ---   search   --- //
        search::get_search,
    ]
}

pub(crate) fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &dyn Display,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let body = serde_json::to_string(&json::Error {
        http_status: status.code,
        message,
    })
    .map_err(|_| Status::InternalServerError)?;
    let mut res = (ContentType::JSON, body).respond_to(req)?;
    res.set_status(status);
    Ok(res)
}

fn parse_question_sort(sort: &str) -> result::Result<QuestionSort, ApiError> {
    match sort {
        "newest" => Ok(QuestionSort::Newest),
        "most_viewed" => Ok(QuestionSort::MostViewed),
        "most_voted" => Ok(QuestionSort::MostVoted),
        "unanswered" => Ok(QuestionSort::Unanswered),
        _ => Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("Invalid sort order: {sort}"),
            Status::BadRequest,
        )),
    }
}

fn parse_tag_sort(sort: &str) -> result::Result<TagSort, ApiError> {
    match sort {
        "popular" => Ok(TagSort::Popular),
        "name" => Ok(TagSort::Name),
        "recent" => Ok(TagSort::Recent),
        _ => Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("Invalid sort order: {sort}"),
            Status::BadRequest,
        )),
    }
}

fn vote_state(outcome: usecases::VoteOutcome) -> json::VoteState {
    use usecases::VoteOutcome::*;
    let direction = match outcome {
        Added(direction) | Switched(direction) => Some(direction),
        Removed => None,
    };
    json::VoteState {
        up_voted: direction == Some(VoteDirection::Up),
        down_voted: direction == Some(VoteDirection::Down),
    }
}
