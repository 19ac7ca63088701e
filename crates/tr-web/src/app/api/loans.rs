use tr_types::web::{Loan, LoanReturn, LoanStatus, NewLoan};

use super::{ApiClient, ApiResult};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Loan>> {
    api.get(&["api", "loans", ""]).await
}

pub async fn by_id(api: &ApiClient, id: i64) -> ApiResult<Loan> {
    api.get(&["api", "loans", &id.to_string()]).await
}

/// Active loans of the client. 404 when the client does not exist.
pub async fn by_client(api: &ApiClient, run: &str) -> ApiResult<Vec<Loan>> {
    api.get_or_default(&["api", "loans", "client", run]).await
}

pub async fn by_status(api: &ApiClient, status: LoanStatus) -> ApiResult<Vec<Loan>> {
    api.get(&["api", "loans", "status", status.as_str()]).await
}

pub async fn late_return_fee(api: &ApiClient) -> ApiResult<i64> {
    api.get(&["api", "loans", "configuration", "late-return-fee"]).await
}

/// The employee is taken from the bearer token by the backend.
pub async fn create(api: &ApiClient, loan: &NewLoan) -> ApiResult<()> {
    tracing::info!(client = %loan.client.run, tools = loan.loan_tools.len(), "registering loan");
    api.post_unit(&["api", "loans"], &[], loan).await
}

pub async fn register_return(api: &ApiClient, loan: &LoanReturn) -> ApiResult<()> {
    tracing::info!(id = loan.id, "registering loan return");
    api.put_unit(&["api", "loans", "return", &loan.id.to_string()], &[], Some(loan))
        .await
}

pub async fn set_late_fee(api: &ApiClient, amount: i64) -> ApiResult<()> {
    tracing::info!(amount, "updating late return fee");
    api.put_unit::<()>(&["api", "loans", "configuration", "late-fee"], &[("amount", amount.to_string())], None)
        .await
}

/// Recompute the validity of every loan on the backend.
pub async fn update_late_statuses(api: &ApiClient) -> ApiResult<()> {
    api.put_unit::<()>(&["api", "loans", "update-late-statuses"], &[], None)
        .await
}
