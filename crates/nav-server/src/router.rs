use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::{endpoints, limits};
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all dashboard endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::DATA,
            get(handler::get_data)
                .post(handler::restore_data)
                .layer(DefaultBodyLimit::max(limits::RESTORE)),
        )
        .route(
            endpoints::LOGIN,
            post(handler::login).layer(DefaultBodyLimit::max(limits::AUTH)),
        )
        .route(endpoints::LOGOUT, post(handler::logout))
        .route(
            endpoints::PASSWORD,
            put(handler::change_password).layer(DefaultBodyLimit::max(limits::AUTH)),
        )
        .route(
            endpoints::CATEGORY,
            post(handler::create_category).layer(DefaultBodyLimit::max(limits::CATEGORY)),
        )
        .route(
            endpoints::CATEGORY_BY_ID,
            put(handler::update_category)
                .delete(handler::delete_category)
                .layer(DefaultBodyLimit::max(limits::CATEGORY)),
        )
        .route(
            endpoints::ITEM,
            post(handler::create_item).layer(DefaultBodyLimit::max(limits::ITEM)),
        )
        .route(
            endpoints::ITEM_BY_ID,
            put(handler::update_item)
                .delete(handler::delete_item)
                .layer(DefaultBodyLimit::max(limits::ITEM)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
