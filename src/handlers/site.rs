use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::Theme;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    practice_name: String,
    phone: String,
    response_time: String,
    theme: Theme,
    themes: [Theme; 2],
}

// GET /api/site
pub async fn site_info(State(state): State<Arc<AppState>>) -> Json<SiteInfo> {
    let config = &state.config;
    Json(SiteInfo {
        practice_name: config.practice_name.clone(),
        phone: config.practice_phone.clone(),
        response_time: config.response_time.clone(),
        theme: config.theme,
        themes: Theme::ALL,
    })
}
