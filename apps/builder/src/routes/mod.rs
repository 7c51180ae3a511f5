pub mod assets;
pub mod health;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(session::page_handler))
        .route("/assets/:file", get(assets::asset_handler))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_view).delete(session::handle_close),
        )
        .route("/api/v1/sessions/:id/actions", post(session::handle_action))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::models::{SkillCatalog, Template};
    use crate::page::PageContract;

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            max_sessions: 8,
            skill_catalog: SkillCatalog::parse("Git,Rust,SQL"),
            default_template: Template::Classic,
        }
    }

    fn test_state() -> AppState {
        AppState::new(&test_config()).unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn open_session(state: &AppState) -> Uuid {
        state.sessions.open().await.0
    }

    async fn post_action(state: &AppState, id: Uuid, action: Value) -> axum::response::Response {
        build_router(state.clone())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(format!("/api/v1/sessions/{id}/actions"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(action.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_page_opens_session() {
        let state = test_state();
        let resp = build_router(state.clone())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("data-session=\""));
        assert!(page.contains(r#"class="skill-checkbox" value="Rust""#));
        assert_eq!(state.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_action_updates_view() {
        let state = test_state();
        let id = open_session(&state).await;

        let resp = post_action(
            &state,
            id,
            json!({"type": "commit_custom_skill", "text": "  Rust  "}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let view = body_json(resp).await;
        assert_eq!(view["progress"]["label"], "14% complete");
        assert_eq!(view["progress"]["width"], "14%");
        assert_eq!(view["skill_input"], "");
        assert!(view["chips_html"].as_str().unwrap().contains(">Rust<"));
        let rust = view["checkboxes"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["value"] == "Rust")
            .unwrap()
            .clone();
        assert_eq!(rust["checked"], true);
    }

    #[tokio::test]
    async fn test_print_returns_effect() {
        let state = test_state();
        let id = open_session(&state).await;
        let view = body_json(post_action(&state, id, json!({"type": "print"})).await).await;
        assert_eq!(view["effects"], json!(["print"]));
    }

    #[tokio::test]
    async fn test_malformed_action_is_bad_request() {
        let state = test_state();
        let id = open_session(&state).await;
        let resp = post_action(&state, id, json!({"type": "explode"})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let state = test_state();
        let resp = post_action(&state, Uuid::new_v4(), json!({"type": "clear_all"})).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_action_for_absent_control_is_skipped() {
        // Page without a print button or template selector.
        let mut state = test_state();
        state.contract = Arc::new(PageContract::inspect(
            r#"<input id="name"><div id="resumePreview"></div>"#,
        ));
        let id = open_session(&state).await;

        let view = body_json(post_action(&state, id, json!({"type": "print"})).await).await;
        assert_eq!(view["effects"], json!([]));

        let view = body_json(
            post_action(&state, id, json!({"type": "select_template", "template": "modern"}))
                .await,
        )
        .await;
        assert_eq!(view["template_class"], "classic");

        let view = body_json(
            post_action(
                &state,
                id,
                json!({"type": "edit_profile", "field": "name", "value": "Ada"}),
            )
            .await,
        )
        .await;
        assert!(view["preview_html"].as_str().unwrap().contains(">Ada</h1>"));
    }

    #[tokio::test]
    async fn test_close_session() {
        let state = test_state();
        let id = open_session(&state).await;
        let req = || {
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/sessions/{id}"))
                .body(Body::empty())
                .unwrap()
        };
        let resp = build_router(state.clone()).oneshot(req()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let resp = build_router(state.clone()).oneshot(req()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets_served() {
        let app = build_router(test_state());
        let resp = app
            .clone()
            .oneshot(Request::get("/assets/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.contains("javascript"), "got {content_type}");
        let resp = app
            .oneshot(Request::get("/assets/missing.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
