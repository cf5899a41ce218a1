use afg_core::repositories::MostPopularTagsParams;

use super::*;

#[get("/tags?<text>&<sort>&<offset>&<limit>")]
pub fn get_tags(
    db: sqlite::Connections,
    text: Option<&str>,
    sort: Option<&str>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Tag>> {
    let sort = sort.map(parse_tag_sort).transpose()?.unwrap_or_default();
    let tags = usecases::query_tags(&db.shared()?, text, sort, &Pagination { offset, limit })?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[get("/tags/popular?<min_count>&<max_count>&<offset>&<limit>")]
pub fn get_popular_tags(
    db: sqlite::Connections,
    min_count: Option<u64>,
    max_count: Option<u64>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::TagFrequency>> {
    let params = MostPopularTagsParams {
        min_count,
        max_count,
    };
    let tags = usecases::most_popular_tags(&db.shared()?, &params, &Pagination { offset, limit })?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[get("/tags/<label>/questions?<offset>&<limit>")]
pub fn get_tag_questions(
    db: sqlite::Connections,
    label: &str,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Question>> {
    let (_, questions) =
        usecases::questions_by_tag(&db.shared()?, label, &Pagination { offset, limit })?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}
