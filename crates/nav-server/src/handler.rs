use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::de::DeserializeOwned;

use nav_types::{Category, CategoryDraft, Dataset, DatasetView, EntityId, Item, ItemDraft};

use crate::api::{ChangePasswordRequest, HealthResponse, LoginRequest, OkResponse};
use crate::auth::{presented_token, removal_cookie, session_cookie, AdminSession};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

fn decode<T: DeserializeOwned>(body: &[u8]) -> ServerResult<T> {
    serde_json::from_slice(body).map_err(|e| ServerError::InvalidBody(e.to_string()))
}

/// Decimal digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_id(raw: &str) -> ServerResult<EntityId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServerError::InvalidId(raw.to_string()));
    }
    raw.parse().map_err(|_| ServerError::InvalidId(raw.to_string()))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// The whole catalog. Public; the password digest is never included.
pub async fn get_data(State(state): State<AppState>) -> ServerResult<Json<DatasetView>> {
    let view = state.blocking(|store| Ok(store.list_all())).await?;
    Ok(Json(view))
}

/// Replace the whole dataset with an uploaded backup.
pub async fn restore_data(
    State(state): State<AppState>,
    _admin: AdminSession,
    body: Bytes,
) -> ServerResult<Json<OkResponse>> {
    let dataset: Dataset = decode(&body)?;
    state.blocking(move |store| store.restore(dataset)).await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn create_category(
    State(state): State<AppState>,
    _admin: AdminSession,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<Category>)> {
    let draft: CategoryDraft = decode(&body)?;
    let category = state.blocking(move |store| store.create_category(draft)).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ServerResult<Json<Category>> {
    let id = parse_id(&raw_id)?;
    let draft: CategoryDraft = decode(&body)?;
    let category = state
        .blocking(move |store| store.update_category(id, draft))
        .await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<OkResponse>> {
    let id = parse_id(&raw_id)?;
    state.blocking(move |store| store.delete_category(id)).await?;
    Ok(Json(OkResponse::ok()))
}

pub async fn create_item(
    State(state): State<AppState>,
    _admin: AdminSession,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<Item>)> {
    let draft: ItemDraft = decode(&body)?;
    let item = state.blocking(move |store| store.create_item(draft)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ServerResult<Json<Item>> {
    let id = parse_id(&raw_id)?;
    let draft: ItemDraft = decode(&body)?;
    let item = state.blocking(move |store| store.update_item(id, draft)).await?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<OkResponse>> {
    let id = parse_id(&raw_id)?;
    state.blocking(move |store| store.delete_item(id)).await?;
    Ok(Json(OkResponse::ok()))
}

/// Check credentials and hand out a session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> ServerResult<(CookieJar, Json<OkResponse>)> {
    let req: LoginRequest = decode(&body)?;
    let token = state
        .blocking(move |store| store.login(&req.username, &req.password))
        .await?;
    let jar = jar.add(session_cookie(token.into_string(), state.cookie_secure));
    Ok((jar, Json(OkResponse::ok())))
}

/// End the presented session, if any, and clear the cookie either way.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ServerResult<(CookieJar, Json<OkResponse>)> {
    if let Some(token) = presented_token(&jar).map(str::to_owned) {
        state.blocking(move |store| Ok(store.logout(&token))).await?;
    }
    let jar = jar.add(removal_cookie(state.cookie_secure));
    Ok((jar, Json(OkResponse::ok())))
}

pub async fn change_password(
    State(state): State<AppState>,
    admin: AdminSession,
    body: Bytes,
) -> ServerResult<Json<OkResponse>> {
    let req: ChangePasswordRequest = decode(&body)?;
    state
        .blocking(move |store| store.change_password(&req.old_password, &req.new_password))
        .await?;
    tracing::debug!(user = %admin.username, "password rotated via API");
    Ok(Json(OkResponse::ok()))
}
