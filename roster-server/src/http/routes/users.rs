//! User endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserId};
use crate::models::{NewUser, User};
use crate::state::AppState;

/// GET /user - list every user in insertion order
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users().list_all().await?;
    Ok(Json(users))
}

/// GET /user/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.users().get_by_id(id).await?;
    Ok(Json(user))
}

/// POST /user - create a user; the store assigns the id
async fn create_user(
    State(state): State<AppState>,
    JsonBody(new_user): JsonBody<NewUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.users().create(new_user).await?;
    tracing::info!(id = user.id, "created user");
    Ok(Json(user))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/{id}", get(get_user))
}
