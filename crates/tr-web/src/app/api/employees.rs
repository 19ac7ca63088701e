use tr_types::web::Employee;

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Employee>> {
    api.get(&["api", "employees", ""]).await
}

pub async fn by_run(api: &ApiClient, run: &str) -> ApiResult<Employee> {
    api.get(&["api", "employees", run]).await
}

/// Administrators only.
pub async fn admins(api: &ApiClient) -> ApiResult<Vec<Employee>> {
    api.get(&["api", "employees", "isAdmin"]).await
}

/// The password travels as a query parameter; the backend creates the
/// identity-provider account with it.
pub async fn create(api: &ApiClient, employee: &Employee, password: &str) -> ApiResult<()> {
    tracing::info!(run = %employee.run, admin = employee.is_admin, "registering employee");
    api.post_unit(&["api", "employees"], &[("password", password.to_string())], employee)
        .await
}

pub async fn update(api: &ApiClient, run: &str, employee: &Employee) -> ApiResult<Employee> {
    api.put(&["api", "employees", "employee", run], employee).await
}
