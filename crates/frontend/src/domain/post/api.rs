use contracts::domain::post::aggregate::{Post, PostDraft};
use contracts::domain::post::envelope::PostListEnvelope;
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch all posts of the authenticated user
pub async fn fetch_my_posts() -> Result<Vec<Post>, ApiError> {
    let auth_header = get_auth_header().ok_or_else(ApiError::unauthenticated)?;

    let response = Request::get(&format!("{}/api/posts/me", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    let envelope = response
        .json::<PostListEnvelope>()
        .await
        .map_err(ApiError::transport)?;

    Ok(envelope.into_posts())
}

/// Create a new post
pub async fn create_post(draft: &PostDraft) -> Result<(), ApiError> {
    let auth_header = get_auth_header().ok_or_else(ApiError::unauthenticated)?;

    let response = Request::post(&format!("{}/api/posts", api_base()))
        .header("Authorization", &auth_header)
        .json(draft)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    Ok(())
}

/// Update an existing post
pub async fn update_post(id: &str, draft: &PostDraft) -> Result<(), ApiError> {
    let auth_header = get_auth_header().ok_or_else(ApiError::unauthenticated)?;

    let response = Request::put(&format!("{}/api/posts/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .json(draft)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    Ok(())
}

/// Delete a post by id
pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    let auth_header = get_auth_header().ok_or_else(ApiError::unauthenticated)?;

    let response = Request::delete(&format!("{}/api/posts/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    Ok(())
}
