use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::customization::columns::needs_legacy;
use crate::customization::controls::ControlAction;
use crate::customization::legacy_store::{load_blocking, save_blocking, LegacyColumnLayout};
use crate::editor::session::{EditorSession, SessionSnapshot};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::template_config::{ColumnItem, PartialTemplateConfig};
use crate::render::helpers::Replacements;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub resume: ResumeData,
    pub template: Option<String>,
    /// Any JSON; resolved leniently against the template's default config.
    pub config: Option<Value>,
}

#[derive(Deserialize)]
pub struct ChangeTemplateRequest {
    pub template: String,
}

#[derive(Deserialize)]
pub struct DragStartRequest {
    pub id: ColumnItem,
}

#[derive(Deserialize)]
pub struct DragTargetRequest {
    #[serde(default)]
    pub over: Option<ColumnItem>,
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    /// JSON object of placeholder -> value.
    pub replacements: Option<String>,
}

async fn find_session(state: &AppState, id: Uuid) -> Result<EditorSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::session_not_found(id))
}

/// Legacy layout for the session's template, read only when the config has no
/// column assignment of its own.
async fn legacy_for(state: &AppState, session: &EditorSession) -> Option<LegacyColumnLayout> {
    if !needs_legacy(&session.config.layout) {
        return None;
    }
    load_blocking(state.layouts.clone(), session.template().id).await
}

async fn snapshot(state: &AppState, id: Uuid) -> Result<SessionSnapshot, AppError> {
    let session = find_session(state, id).await?;
    let legacy = legacy_for(state, &session).await;
    Ok(session.snapshot(legacy.as_ref()))
}

/// Runs `f` on the session and returns its result with the snapshot taken
/// under the same write lock.
async fn mutate<F, R>(state: &AppState, id: Uuid, f: F) -> Result<(R, SessionSnapshot), AppError>
where
    F: FnOnce(&mut EditorSession, Option<&LegacyColumnLayout>) -> R,
{
    let key = state
        .sessions
        .template_id(id)
        .await
        .ok_or_else(|| AppError::session_not_found(id))?;
    mutate_keyed(state, id, key, f).await
}

/// Like [`mutate`], with the legacy layout read for template `key` up front,
/// on the blocking pool and outside the lock. The layout is only handed to the
/// session while it is on template `key`.
async fn mutate_keyed<F, R>(
    state: &AppState,
    id: Uuid,
    key: &'static str,
    f: F,
) -> Result<(R, SessionSnapshot), AppError>
where
    F: FnOnce(&mut EditorSession, Option<&LegacyColumnLayout>) -> R,
{
    let legacy = load_blocking(state.layouts.clone(), key).await;
    state
        .sessions
        .update(id, |session| {
            let before = legacy.as_ref().filter(|_| session.template().id == key);
            let result = f(session, before);
            let after = legacy.as_ref().filter(|_| session.template().id == key);
            (result, session.snapshot(after))
        })
        .await
        .ok_or_else(|| AppError::session_not_found(id))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let template = state.template(req.template.as_deref());
    let config = template.resolve_config(req.config.as_ref());
    let session = EditorSession::new(req.resume, template, config);
    let legacy = legacy_for(&state, &session).await;
    let snapshot = session.snapshot(legacy.as_ref());
    let id = state.sessions.insert(session).await;
    info!("Editor session {id} opened with template {}", template.id);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(snapshot(&state, id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::session_not_found(id));
    }
    info!("Editor session {id} closed");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/resume
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(resume): Json<ResumeData>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (_, snapshot) = mutate(&state, id, |s, _| s.update_resume(resume)).await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/template
pub async fn handle_change_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeTemplateRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let template = state.template(Some(&req.template));
    let (_, snapshot) =
        mutate_keyed(&state, id, template.id, |s, _| s.change_template(template)).await?;
    debug!("Session {id} switched to template {}", template.id);
    Ok(Json(snapshot))
}

/// PATCH /api/v1/sessions/:id/config
pub async fn handle_update_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(raw): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let patch = PartialTemplateConfig::from_value_lenient(&raw);
    if patch.is_empty() {
        debug!("Session {id} config patch had no usable values");
        return snapshot(&state, id).await.map(Json);
    }
    let (_, snapshot) = mutate(&state, id, |s, _| s.update_config(&patch)).await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/config/reset
pub async fn handle_reset_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (_, snapshot) = mutate(&state, id, |s, _| s.reset_config()).await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/actions
pub async fn handle_control_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<ControlAction>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (changed, snapshot) =
        mutate(&state, id, |s, legacy| s.apply_action(&action, legacy)).await?;
    if !changed {
        debug!("Session {id}: action left config unchanged");
    } else if action.moves_columns() {
        save_blocking(
            state.layouts.clone(),
            snapshot.template,
            snapshot.columns.to_legacy(),
        )
        .await;
    }
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/drag/start
pub async fn handle_drag_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DragStartRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let item = req.id.clone();
    let (started, snapshot) = mutate(&state, id, |s, _| s.drag_start(req.id)).await?;
    if !started {
        return Err(AppError::UnprocessableEntity(format!(
            "{:?} is not a block of this resume",
            item.as_wire()
        )));
    }
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/drag/over
pub async fn handle_drag_over(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DragTargetRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = find_session(&state, id).await?;
    session.drag_over(req.over.as_ref());
    let legacy = legacy_for(&state, &session).await;
    Ok(Json(session.snapshot(legacy.as_ref())))
}

/// POST /api/v1/sessions/:id/drag/end
pub async fn handle_drag_end(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DragTargetRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (_, snapshot) = mutate(&state, id, |s, _| s.drag_end(req.over.as_ref())).await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_session_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let replacements: Replacements = match query.replacements.as_deref() {
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            AppError::Validation(format!("replacements must be a JSON object of strings: {e}"))
        })?,
        None => Replacements::new(),
    };
    let session = find_session(&state, id).await?;
    let legacy = legacy_for(&state, &session).await;
    Ok(Html(session.preview_html(&replacements, legacy.as_ref())))
}
