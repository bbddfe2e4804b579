use contracts::system::auth::{RefreshRequest, RefreshResponse};
use gloo_net::http::Request;

use super::storage;
use crate::shared::api_utils::api_base;

/// Refresh the session using the stored refresh token.
///
/// Called after destructive operations: a deleted post changes
/// account-level derived state (the posting quota), so the session is
/// re-synced. Callers treat this as fire-and-forget.
pub async fn refresh_session() -> Result<(), String> {
    let Some(refresh_token) = storage::get_refresh_token() else {
        return Err("no refresh token stored".to_string());
    };

    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/auth/refresh", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    let body: RefreshResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    storage::save_access_token(&body.access_token);

    Ok(())
}
