use chrono::NaiveDate;
use tr_types::web::Kardex;

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Kardex>> {
    api.get(&["api", "kardexes", ""]).await
}

pub async fn by_tool_name(api: &ApiClient, tool_name: &str) -> ApiResult<Vec<Kardex>> {
    api.get(&["api", "kardexes", "tool", tool_name]).await
}

pub async fn by_date_range(api: &ApiClient, start: NaiveDate, end: NaiveDate) -> ApiResult<Vec<Kardex>> {
    let query = [("start", start.to_string()), ("end", end.to_string())];
    api.get_with_query(&["api", "kardexes", "by-date"], &query).await
}
