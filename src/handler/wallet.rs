use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::{
    dtos::{WalletQueryDto, WalletRequestDto},
    error::{ErrorMessage, HttpError},
    handler::parse_id,
    AppState,
};

pub fn wallet_handler() -> Router {
    Router::new()
        .route("/", get(get_wallets).post(create_wallet))
        .route("/:id", put(update_wallet).delete(delete_wallet))
}

pub async fn get_wallets(
    Extension(app_state): Extension<Arc<AppState>>,
    query: Result<Query<WalletQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(query) = query.map_err(|e| HttpError::bad_request(e.body_text()))?;

    let wallet_type = query.wallet_type().map_err(|raw| {
        tracing::debug!("rejected wallet_type filter {:?}", raw);
        HttpError::bad_request(ErrorMessage::InvalidWalletType.to_string())
    })?;

    let wallets = app_state.db_client
        .get_wallets(wallet_type)
        .await
        .map_err(|e| {
            tracing::error!("Error listing wallets: {}", e);
            HttpError::from(e)
        })?;

    Ok(Json(wallets))
}

pub async fn create_wallet(
    Extension(app_state): Extension<Arc<AppState>>,
    body: Result<Json<WalletRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(body) = body.map_err(|e| HttpError::bad_request(e.body_text()))?;

    let wallet = app_state.db_client
        .create_wallet(body)
        .await
        .map_err(|e| {
            tracing::error!("Error creating wallet: {}", e);
            HttpError::from(e)
        })?;

    tracing::info!(wallet_id = wallet.id, user_id = wallet.user_id, "wallet created");

    Ok((StatusCode::CREATED, Json(wallet)))
}

pub async fn update_wallet(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<WalletRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let wallet_id = parse_id(&id, ErrorMessage::InvalidWalletId)?;
    let Json(body) = body.map_err(|e| HttpError::bad_request(e.body_text()))?;

    let wallet = app_state.db_client
        .update_wallet(wallet_id, body)
        .await
        .map_err(|e| {
            tracing::error!("Error updating wallet {}: {}", wallet_id, e);
            HttpError::from(e)
        })?;

    Ok(Json(wallet))
}

pub async fn delete_wallet(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let wallet_id = parse_id(&id, ErrorMessage::InvalidWalletId)?;

    app_state.db_client
        .delete_wallet(wallet_id)
        .await
        .map_err(|e| {
            tracing::error!("Error deleting wallet {}: {}", wallet_id, e);
            HttpError::from(e)
        })?;

    tracing::info!(wallet_id, "wallet deleted");

    Ok(StatusCode::NO_CONTENT)
}
