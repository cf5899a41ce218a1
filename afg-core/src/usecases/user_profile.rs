use super::{prelude::*, query_questions::checked_pagination};
use crate::reputation;

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub stats: UserStats,
    pub badges: BadgeCounts,
}

pub fn get_user_profile<R>(repo: &R, username: &str) -> Result<UserProfile>
where
    R: UserRepo,
{
    let user = repo.get_user_by_username(username)?;
    let stats = repo.user_stats(username)?;
    let badges = reputation::badge_counts(&stats);
    Ok(UserProfile {
        user,
        stats,
        badges,
    })
}

pub fn query_users<R>(repo: &R, text: Option<&str>, pagination: &Pagination) -> Result<Vec<User>>
where
    R: UserRepo,
{
    let pagination = checked_pagination(pagination)?;
    Ok(repo.query_users(text, &pagination)?)
}

pub fn questions_of_user<R>(
    repo: &R,
    username: &str,
    pagination: &Pagination,
) -> Result<Vec<Question>>
where
    R: QuestionRepo,
{
    let pagination = checked_pagination(pagination)?;
    Ok(repo.query_questions(&QuestionQuery {
        author: Some(username.to_string()),
        pagination,
        ..Default::default()
    })?)
}

pub fn answers_of_user<R>(repo: &R, username: &str, pagination: &Pagination) -> Result<Vec<Answer>>
where
    R: AnswerRepo,
{
    let pagination = checked_pagination(pagination)?;
    Ok(repo.answers_of_user(username, &pagination)?)
}

pub fn activity_of_user<R>(
    repo: &R,
    username: &str,
    pagination: &Pagination,
) -> Result<Vec<ActivityLogEntry>>
where
    R: UserRepo + ActivityRepo,
{
    let user = repo.get_user_by_username(username)?;
    let pagination = checked_pagination(pagination)?;
    Ok(repo.activities_of_user(&user.email, &pagination)?)
}
