use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::customization::columns::{config_for_render, needs_legacy};
use crate::customization::legacy_store::load_blocking;
use crate::errors::AppError;
use crate::gallery::{gallery, preview_html, GalleryQuery, TemplateDetail, TemplateSummary};
use crate::models::resume::ResumeData;
use crate::models::template_config::TemplateConfig;
use crate::render::helpers::Replacements;
use crate::state::AppState;
use crate::templates::{get_template, TemplateEntry};

#[derive(Deserialize)]
pub struct RenderRequest {
    pub template: String,
    pub resume: ResumeData,
    /// Any JSON; resolved leniently against the template's default config.
    pub config: Option<Value>,
    #[serde(default)]
    pub replacements: Replacements,
}

#[derive(Serialize)]
pub struct RenderResponse {
    /// Template actually used, after the unknown-id fallback.
    pub template: &'static str,
    pub config: TemplateConfig,
    pub html: String,
}

fn find_template(id: &str) -> Result<&'static TemplateEntry, AppError> {
    get_template(id).ok_or_else(|| AppError::NotFound(format!("Template '{id}' does not exist")))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(Query(query): Query<GalleryQuery>) -> Json<Vec<TemplateSummary>> {
    Json(gallery(&query))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(Path(id): Path<String>) -> Result<Json<TemplateDetail>, AppError> {
    Ok(Json(find_template(&id)?.into()))
}

/// GET /api/v1/templates/:id/preview
pub async fn handle_template_preview(Path(id): Path<String>) -> Result<Html<String>, AppError> {
    Ok(Html(preview_html(find_template(&id)?)))
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Json<RenderResponse> {
    let template = state.template(Some(&req.template));
    let config = template.resolve_config(req.config.as_ref());
    debug!(
        "Rendering {} with {} sections",
        template.id,
        req.resume.sections.len()
    );
    let legacy = if needs_legacy(&config.layout) {
        load_blocking(state.layouts.clone(), template.id).await
    } else {
        None
    };
    let render_config = config_for_render(&req.resume, &config, legacy.as_ref());
    let html = template.render_html(&req.resume, &render_config, &req.replacements);
    Json(RenderResponse {
        template: template.id,
        config,
        html,
    })
}
