use super::*;

#[get("/search?<q>&<limit>")]
pub fn get_search(db: sqlite::Connections, q: &str, limit: Option<u64>) -> Result<json::SearchResults> {
    let limit = limit.unwrap_or(usecases::DEFAULT_SEARCH_LIMIT);
    let results = usecases::global_search(&db.shared()?, q, limit)?;
    Ok(Json(adapters::json::search_results(results)))
}
