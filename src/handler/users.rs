use std::sync::Arc;

use axum::{extract::Path, response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{
    error::{ErrorMessage, HttpError},
    handler::parse_id,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route("/:id/wallets", get(get_user_wallets))
}

pub async fn get_user_wallets(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = parse_id(&id, ErrorMessage::InvalidUserId)?;

    let wallets = app_state.db_client
        .get_user_wallets(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Error listing wallets for user {}: {}", user_id, e);
            HttpError::from(e)
        })?;

    Ok(Json(wallets))
}
