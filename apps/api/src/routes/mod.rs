pub mod health;


use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers;
use crate::gallery::handlers as gallery;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Gallery and stateless rendering
        .route("/api/v1/templates", get(gallery::handle_list_templates))
        .route("/api/v1/templates/:id", get(gallery::handle_get_template))
        .route(
            "/api/v1/templates/:id/preview",
            get(gallery::handle_template_preview),
        )
        .route("/api/v1/render", post(gallery::handle_render))
        // Editor sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            put(handlers::handle_update_resume),
        )
        .route(
            "/api/v1/sessions/:id/template",
            put(handlers::handle_change_template),
        )
        .route(
            "/api/v1/sessions/:id/config",
            patch(handlers::handle_update_config),
        )
        .route(
            "/api/v1/sessions/:id/config/reset",
            post(handlers::handle_reset_config),
        )
        .route(
            "/api/v1/sessions/:id/actions",
            post(handlers::handle_control_action),
        )
        .route(
            "/api/v1/sessions/:id/drag/start",
            post(handlers::handle_drag_start),
        )
        .route(
            "/api/v1/sessions/:id/drag/over",
            post(handlers::handle_drag_over),
        )
        .route(
            "/api/v1/sessions/:id/drag/end",
            post(handlers::handle_drag_end),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_session_preview),
        )
        .with_state(state)
}
