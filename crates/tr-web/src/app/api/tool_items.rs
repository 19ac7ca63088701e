use tr_types::web::{DamageLevel, DamageUpdate, NewToolItem, ToolItem};

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<ToolItem>> {
    api.get(&["api", "tool-items", ""]).await
}

pub async fn by_id(api: &ApiClient, id: i64) -> ApiResult<ToolItem> {
    api.get(&["api", "tool-items", &id.to_string()]).await
}

pub async fn by_serial(api: &ApiClient, serial_number: &str) -> ApiResult<ToolItem> {
    api.get(&["api", "tool-items", "serial-number", serial_number]).await
}

/// First unit of the type that can be lent out. 404 when there is none.
pub async fn first_available(api: &ApiClient, type_id: i64) -> ApiResult<ToolItem> {
    api.get(&["api", "tool-items", "available", "type", &type_id.to_string()])
        .await
}

pub async fn create(api: &ApiClient, item: &NewToolItem) -> ApiResult<()> {
    tracing::info!(serial = %item.serial_number, "registering tool item");
    api.post_unit(&["api", "tool-items"], &[], item).await
}

pub async fn disable(api: &ApiClient, serial_number: &str, damage_level: DamageLevel) -> ApiResult<ToolItem> {
    tracing::info!(serial = %serial_number, %damage_level, "disabling tool item");
    api.put(&["api", "tool-items", "disable-tool-item", serial_number], &DamageUpdate { damage_level })
        .await
}

pub async fn enable(api: &ApiClient, serial_number: &str) -> ApiResult<ToolItem> {
    tracing::info!(serial = %serial_number, "enabling tool item");
    api.put_empty(&["api", "tool-items", "enable-tool-item", serial_number])
        .await
}

pub async fn evaluate_damage(api: &ApiClient, id: i64, damage_level: DamageLevel) -> ApiResult<ToolItem> {
    tracing::info!(id, %damage_level, "evaluating tool damage");
    api.put(&["api", "tool-items", "evaluate-damage", &id.to_string()], &DamageUpdate { damage_level })
        .await
}
