use axum::{
    http::{header::InvalidHeaderValue, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{self, middleware::AppState};
use crate::config::Config;

pub fn build_router(state: AppState, config: &Config) -> Result<Router, InvalidHeaderValue> {
    let origin: HeaderValue = config.cors_allowed_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/holidays", get(api::holidays::list_holidays))
        .route("/holidays", post(api::holidays::create_holiday))
        // Static segment must be registered alongside the :id route
        .route("/holidays/autocomplete", get(api::holidays::autocomplete))
        .route("/holidays/:id", delete(api::holidays::delete_holiday))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
