// Conversions between use case results and the serializable
// boundary types that are too composite for plain `From` impls
// in afg-boundary.

use afg_boundary as json;
use afg_core::usecases;

pub fn question_details(from: usecases::QuestionDetails) -> json::QuestionDetails {
    let usecases::QuestionDetails {
        question,
        answers,
        question_vote,
        answer_votes,
        saved,
    } = from;
    json::QuestionDetails {
        question: question.into(),
        answers: answers.into_iter().map(Into::into).collect(),
        question_vote: question_vote.map(Into::into),
        answer_votes: answer_votes
            .into_iter()
            .map(|(answer_id, direction)| json::AnswerVote {
                answer_id: answer_id.into(),
                direction: direction.into(),
            })
            .collect(),
        saved,
    }
}

pub fn user_profile(from: usecases::UserProfile) -> json::UserProfile {
    let usecases::UserProfile {
        user,
        stats,
        badges,
    } = from;
    json::UserProfile {
        user: user.into(),
        stats: stats.into(),
        badges: badges.into(),
    }
}

pub fn search_results(from: usecases::SearchResults) -> json::SearchResults {
    let usecases::SearchResults {
        questions,
        answers,
        tags,
        users,
    } = from;
    json::SearchResults {
        questions: questions.into_iter().map(Into::into).collect(),
        answers: answers.into_iter().map(Into::into).collect(),
        tags: tags.into_iter().map(Into::into).collect(),
        users: users.into_iter().map(Into::into).collect(),
    }
}

pub fn try_new_user(from: json::NewUser) -> Result<usecases::NewUser, usecases::Error> {
    let json::NewUser {
        name,
        username,
        email,
        password,
    } = from;
    Ok(usecases::NewUser {
        name,
        username,
        email: email.parse()?,
        password,
    })
}
