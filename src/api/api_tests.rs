#[cfg(test)]
mod api_router_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};

    fn app() -> Router {
        create_router(AppState::development())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_session(app: &Router, name: &str) -> String {
        let (status, body) =
            send(app, "POST", "/api/v1/sessions", Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_session_returns_201_with_welcome() {
        let app = app();
        let (status, body) =
            send(&app, "POST", "/api/v1/sessions", Some(json!({ "name": "t" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["welcome"].as_str().unwrap().contains("security mentor"));
    }

    #[tokio::test]
    async fn test_get_missing_session_returns_404() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/v1/sessions/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_turn_roundtrip() {
        let app = app();
        let id = create_session(&app, "turns").await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/turns"),
            Some(json!({ "text": "tell me about phishing" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["reply"].as_str().unwrap().is_empty());
        assert_eq!(body["mode"], "normal");
        assert_eq!(body["turn_number"], 1);
    }

    #[tokio::test]
    async fn test_empty_turn_is_rejected() {
        let app = app();
        let id = create_session(&app, "empty").await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/turns"),
            Some(json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_quiz_mode_is_visible_in_turn_response() {
        let app = app();
        let id = create_session(&app, "quiz").await;

        let (_, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/turns"),
            Some(json!({ "text": "start quiz" })),
        )
        .await;
        assert_eq!(body["mode"], "quiz");
        assert_eq!(body["sentiment"], "suggestion");
    }

    #[tokio::test]
    async fn test_task_endpoints_roundtrip() {
        let app = app();
        let id = create_session(&app, "tasks").await;

        let (status, task) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/tasks"),
            Some(json!({ "title": "enable 2fa", "description": "on email" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let task_id = task["id"].as_str().unwrap().to_string();

        let (status, toggled) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/tasks/{task_id}/toggle"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["completed"], true);

        let (status, list) =
            send(&app, "GET", &format!("/api/v1/sessions/{id}/tasks"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["total"], 1);

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/v1/sessions/{id}/tasks/{task_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_log_endpoint_pages_entries() {
        let app = app();
        let id = create_session(&app, "log").await;

        let (status, body) =
            send(&app, "GET", &format!("/api/v1/sessions/{id}/log?page=0"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page_size"], 5);
        assert!(body["total_entries"].as_u64().unwrap() >= 1);
        let first = &body["entries"][0];
        assert!(first["formatted"].as_str().unwrap().contains("[System]"));
    }

    #[tokio::test]
    async fn test_profile_endpoint_reflects_turns() {
        let app = app();
        let id = create_session(&app, "profile").await;

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/turns"),
            Some(json!({ "text": "my name is Priya and i work as a data engineer" })),
        )
        .await;

        let (status, body) =
            send(&app, "GET", &format!("/api/v1/sessions/{id}/profile"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Priya");
        assert_eq!(body["facts"]["tech_level"], "advanced");
        assert_eq!(body["interaction_count"], 1);
    }

    #[tokio::test]
    async fn test_delete_session_then_turn_is_404() {
        let app = app();
        let id = create_session(&app, "delete-me").await;

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/turns"),
            Some(json!({ "text": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
