use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::handlers;
use crate::state::AppState;

/// Full route table with CORS and request tracing applied.
pub fn router(state: Arc<AppState>) -> Result<Router, AppError> {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    if let Some(origin) = &state.config.allowed_origin {
        let origin: HeaderValue = origin
            .parse()
            .map_err(|_| AppError::Config(format!("invalid ALLOWED_ORIGIN: {origin}")))?;
        cors = cors.allow_origin(origin);
    }

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/contact",
            get(handlers::contact::contact_probe).post(handlers::contact::submit_contact),
        )
        .route("/api/site", get(handlers::site::site_info))
        .route("/api/content", get(handlers::content::list_sections))
        .route("/api/content/:section", get(handlers::content::get_section))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
