use super::prelude::*;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validates the requested page size and fills in the default.
pub fn checked_pagination(pagination: &Pagination) -> Result<Pagination> {
    let limit = match pagination.limit {
        Some(0) => return Err(Error::InvalidLimit),
        Some(limit) if limit > MAX_PAGE_SIZE => return Err(Error::InvalidLimit),
        Some(limit) => limit,
        None => DEFAULT_PAGE_SIZE,
    };
    Ok(Pagination {
        offset: pagination.offset,
        limit: Some(limit),
    })
}

pub fn query_questions<R>(repo: &R, query: QuestionQuery) -> Result<Vec<Question>>
where
    R: QuestionRepo,
{
    let pagination = checked_pagination(&query.pagination)?;
    let query = QuestionQuery { pagination, ..query };
    Ok(repo.query_questions(&query)?)
}
