pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::job_descriptions::handlers as job_descriptions;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + UPLOAD_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes",
            post(resumes::handle_upload_resume)
                .get(resumes::handle_list_resumes)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        // Job Description API
        .route(
            "/api/v1/job-descriptions",
            post(job_descriptions::handle_save_job_description)
                .get(job_descriptions::handle_list_job_descriptions),
        )
        .route(
            "/api/v1/job-descriptions/:id",
            get(job_descriptions::handle_get_job_description)
                .delete(job_descriptions::handle_delete_job_description),
        )
        // Analysis API
        .route(
            "/api/v1/analyses",
            post(analysis::handle_analyze).get(analysis::handle_analysis_history),
        )
        .route("/api/v1/analyses/:id", get(analysis::handle_get_analysis))
        .route(
            "/api/v1/analyses/:id/rerun",
            post(analysis::handle_rerun_analysis),
        )
        .route(
            "/api/v1/analyses/:id/report",
            get(analysis::handle_download_report),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::service::RngSource;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // Lazy pool: none of these requests get far enough to touch the database.
    fn test_router() -> Router {
        let config = Config {
            database_url: "postgres://localhost/resumefit_test".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes: 1024,
            analysis_seed: Some(1),
        };
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        build_router(AppState {
            db,
            config,
            rng_source: RngSource::new(Some(1)),
        })
    }

    fn multipart_request(file_name: &str, content_type: &str, body: &str) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let payload = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {body}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes?user_id=6f1c1f8e-7a0b-4c1e-9c55-2f7d3e0a1b2c")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(payload))
            .unwrap()
    }

    fn json_post(uri: &str, body: String) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_code(resp: axum::response::Response) -> String {
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["error"]["code"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_save_job_description_rejects_blank_content() {
        let body = r#"{
            "user_id": "6f1c1f8e-7a0b-4c1e-9c55-2f7d3e0a1b2c",
            "title": "Backend Engineer",
            "content": "   "
        }"#;
        let resp = test_router()
            .oneshot(
                Request::post("/api/v1/job-descriptions")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_format() {
        let resp = test_router()
            .oneshot(multipart_request("photo.png", "image/png", "not text"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_text_file() {
        let resp = test_router()
            .oneshot(multipart_request("cv.txt", "text/plain", "   "))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let resp = test_router()
            .oneshot(multipart_request("cv.txt", "text/plain", &"a".repeat(2048)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_rejects_overlong_file_name() {
        let name = format!("{}.txt", "n".repeat(300));
        let resp = test_router()
            .oneshot(multipart_request(&name, "text/plain", "Rust engineer"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_save_job_description_rejects_overlong_title() {
        let body = serde_json::json!({
            "user_id": "6f1c1f8e-7a0b-4c1e-9c55-2f7d3e0a1b2c",
            "title": "T".repeat(300),
            "content": "Rust engineer"
        });
        let resp = test_router()
            .oneshot(json_post("/api/v1/job-descriptions", body.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_user_id_is_rejected() {
        let resp = test_router()
            .oneshot(
                Request::get("/api/v1/analyses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_gets_error_body() {
        let resp = test_router()
            .oneshot(json_post("/api/v1/analyses", "{not json".to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_path_id_gets_error_body() {
        let resp = test_router()
            .oneshot(
                Request::get(
                    "/api/v1/resumes/not-a-uuid?user_id=6f1c1f8e-7a0b-4c1e-9c55-2f7d3e0a1b2c",
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_without_multipart_gets_error_body() {
        let resp = test_router()
            .oneshot(json_post(
                "/api/v1/resumes?user_id=6f1c1f8e-7a0b-4c1e-9c55-2f7d3e0a1b2c",
                "{}".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }
}
