use tr_types::web::{Client, ClientStatus, NewClient};

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Client>> {
    api.get(&["api", "clients", ""]).await
}

pub async fn by_run(api: &ApiClient, run: &str) -> ApiResult<Client> {
    api.get(&["api", "clients", run]).await
}

pub async fn by_status(api: &ApiClient, status: ClientStatus) -> ApiResult<Vec<Client>> {
    api.get(&["api", "clients", "status", status.as_str()]).await
}

pub async fn create(api: &ApiClient, client: &NewClient) -> ApiResult<()> {
    tracing::info!(run = %client.run, "registering client");
    api.post_unit(&["api", "clients"], &[], client).await
}

pub async fn update(api: &ApiClient, run: &str, client: &Client) -> ApiResult<Client> {
    api.put(&["api", "clients", "client", run], client).await
}
