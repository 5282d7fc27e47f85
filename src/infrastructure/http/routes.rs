//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/image             POST  提交分镜图像任务
//! - /api/image             GET   查询任务状态 (?id=)
//! - /api/decision-image    POST  提交决策场景图像任务
//! - /api/decision-image    GET   查询任务状态 (?id=)
//! - /api/valentine         POST  提交回忆片段图像任务
//! - /api/valentine         GET   查询任务状态 (?id=)
//! - /api/video             POST  提交视频生成任务
//! - /api/video             GET   查询任务状态 (?id=)
//! - /api/voice             POST  合成旁白语音（二进制 audio/mpeg）
//! - /api/storyboard/generate POST 生成 9 格分镜
//! - /api/reel/generate     POST  生成场景卷
//! - /api/ad/generate       POST  生成完整广告
//! - /api/tiktok/generate   POST  生成 TikTok 反应视频

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/image",
            post(handlers::submit_panel_image).get(handlers::poll_job),
        )
        .route(
            "/decision-image",
            post(handlers::submit_decision_image).get(handlers::poll_job),
        )
        .route(
            "/valentine",
            post(handlers::submit_valentine_image).get(handlers::poll_job),
        )
        .route(
            "/video",
            post(handlers::submit_video).get(handlers::poll_job),
        )
        .route("/voice", post(handlers::synthesize_voice))
        .merge(workflow_routes())
}

/// 组合式流程路由
fn workflow_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/storyboard/generate", post(handlers::generate_storyboard))
        .route("/reel/generate", post(handlers::generate_reel))
        .route("/ad/generate", post(handlers::generate_ad))
        .route("/tiktok/generate", post(handlers::generate_tiktok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::util::ServiceExt;

    use crate::application::{BatchConfig, PollConfig};
    use crate::infrastructure::adapters::{
        FakeOutcome, FakePredictionClient, FakeSpeechClient,
    };

    fn fast_poll() -> PollConfig {
        PollConfig::new(Duration::from_millis(1), 30)
    }

    fn test_app(prediction: Arc<FakePredictionClient>) -> Router {
        let state = AppState::new(
            prediction,
            Arc::new(FakeSpeechClient::with_defaults()),
            BatchConfig::default(),
            fast_poll(),
            fast_poll(),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn test_app_with_speech(
        prediction: Arc<FakePredictionClient>,
        speech: Arc<FakeSpeechClient>,
    ) -> Router {
        let state = AppState::new(
            prediction,
            speech,
            BatchConfig::default(),
            fast_poll(),
            fast_poll(),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app(Arc::new(FakePredictionClient::new(
            FakeOutcome::never_terminal(),
        )));
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_submit_image_missing_scene_returns_400_without_submission() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json("/api/image", json!({"character": "batman"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["error"], "Scene is required");
        assert_eq!(fake.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_image_returns_id_and_status() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            0,
            "https://cdn.example/panel.webp",
        )));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json(
                "/api/image",
                json!({"scene": "hero walks into frame", "character": "batman"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert!(body["id"].as_str().unwrap().starts_with("fake-"));
        assert!(body["status"].is_string());

        let submissions = fake.submissions();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].prompt().contains("hero walks into frame"));
        assert!(submissions[0].prompt().contains("batman"));
    }

    #[tokio::test]
    async fn test_poll_without_id_returns_400() {
        let app = test_app(Arc::new(FakePredictionClient::new(
            FakeOutcome::never_terminal(),
        )));
        let request = Request::builder()
            .uri("/api/image")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["error"], "ID is required");
    }

    #[tokio::test]
    async fn test_submitted_id_polls_through_unchanged() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            0,
            "https://cdn.example/decision.webp",
        )));
        let app = test_app(fake.clone());

        let response = app
            .clone()
            .oneshot(post_json("/api/decision-image", json!({"decision": "porsche"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let submitted = read_json(response).await;
        let id = submitted["id"].as_str().unwrap().to_string();

        let request = Request::builder()
            .uri(format!("/api/decision-image?id={}", id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["status"], "succeeded");
        assert_eq!(body["output"], "https://cdn.example/decision.webp");
    }

    #[tokio::test]
    async fn test_unknown_decision_returns_400_without_submission() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json("/api/decision-image", json!({"decision": "lambo"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["error"], "Valid decision is required");
        assert_eq!(fake.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_video_missing_prompt_returns_400() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json("/api/video", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["error"], "Prompt is required");
        assert_eq!(fake.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_voice_returns_binary_audio_with_selected_preset() {
        let speech = Arc::new(FakeSpeechClient::with_defaults());
        let app = test_app_with_speech(
            Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal())),
            speech.clone(),
        );

        let response = app
            .oneshot(post_json(
                "/api/voice",
                json!({"text": "Buy it now", "character": "the rock"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "audio/mpeg"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!bytes.is_empty());

        // "rock" 命中 deep 关键词规则
        let requests = speech.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].voice_id, "29vD33N1CtxCmqQRPOHJ");
    }

    #[tokio::test]
    async fn test_voice_missing_text_returns_400() {
        let speech = Arc::new(FakeSpeechClient::with_defaults());
        let app = test_app_with_speech(
            Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal())),
            speech.clone(),
        );

        let response = app
            .oneshot(post_json("/api/voice", json!({"character": "yoda"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(speech.requests().is_empty());
    }

    #[tokio::test]
    async fn test_generate_storyboard_returns_nine_slots() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            0,
            "https://cdn.example/panel.webp",
        )));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json(
                "/api/storyboard/generate",
                json!({"character": "yoda", "brand": "sneakers"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let panels = body["panels"].as_array().unwrap();
        assert_eq!(panels.len(), 9);
        assert!(panels.iter().all(|p| p.is_string()));
        assert_eq!(fake.submission_count(), 9);
    }

    #[tokio::test]
    async fn test_generate_ad_missing_selection_returns_400() {
        let fake = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let app = test_app(fake.clone());

        let response = app
            .oneshot(post_json("/api/ad/generate", json!({"brand": "sneakers"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fake.submission_count(), 0);
    }
}
