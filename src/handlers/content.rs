use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::LabeledList;
use crate::services::content;

#[derive(Serialize)]
pub struct SectionIndex {
    sections: Vec<&'static str>,
}

// GET /api/content
pub async fn list_sections() -> Json<SectionIndex> {
    Json(SectionIndex {
        sections: content::section_keys(),
    })
}

// GET /api/content/:section
pub async fn get_section(Path(key): Path<String>) -> Result<Json<&'static LabeledList>, AppError> {
    content::section(&key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("content section '{key}'")))
}
