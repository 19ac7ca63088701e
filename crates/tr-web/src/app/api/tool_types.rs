use tr_types::web::{ToolType, ToolTypeUpdate};

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<ToolType>> {
    api.get(&["api", "tool-types", ""]).await
}

pub async fn by_id(api: &ApiClient, id: i64) -> ApiResult<ToolType> {
    api.get(&["api", "tool-types", &id.to_string()]).await
}

pub async fn by_name(api: &ApiClient, name: &str) -> ApiResult<ToolType> {
    api.get(&["api", "tool-types", "name", name]).await
}

pub async fn create(api: &ApiClient, tool_type: &ToolType) -> ApiResult<()> {
    tracing::info!(name = %tool_type.name, model = %tool_type.model, "registering tool type");
    api.post_unit(&["api", "tool-types"], &[], tool_type).await
}

pub async fn update(api: &ApiClient, update: &ToolTypeUpdate) -> ApiResult<ToolType> {
    api.put(&["api", "tool-types", "tool-type", &update.id.to_string()], update)
        .await
}

pub async fn update_rental_fee(api: &ApiClient, id: i64, amount: i64) -> ApiResult<ToolType> {
    let update = ToolTypeUpdate {
        id,
        rental_fee: Some(amount),
        ..Default::default()
    };
    self::update(api, &update).await
}

pub async fn update_replacement_value(api: &ApiClient, id: i64, amount: i64) -> ApiResult<ToolType> {
    let update = ToolTypeUpdate {
        id,
        replacement_value: Some(amount),
        ..Default::default()
    };
    self::update(api, &update).await
}
