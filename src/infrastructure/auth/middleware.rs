use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::config::Config;

pub const X_ADMIN_PASSWORD: &str = "x-admin-password";

/// Admin gate: plaintext comparison of the `x-admin-password` header against
/// the configured password. Not a security boundary.
pub async fn admin_middleware(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let password = request
        .headers()
        .get(X_ADMIN_PASSWORD)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing admin password".to_string()))?;

    if password != config.admin_password {
        tracing::warn!(path = %request.uri().path(), "Rejected admin request");
        return Err(AppError::Unauthorized("Wrong admin password".to_string()));
    }

    Ok(next.run(request).await)
}
