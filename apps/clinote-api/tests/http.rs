use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::Map;
use tower::util::ServiceExt;

use clinote_api::{routes, state::AppState};
use clinote_config::{Config, EnhancerProviderConfig, Postgres, Providers, Service, Storage};
use clinote_testkit::TestDatabase;

const FRONTEND_ORIGIN: &str = "http://localhost:3000";

fn test_config(dsn: String) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
			frontend_origin: FRONTEND_ORIGIN.to_string(),
		},
		storage: Storage { postgres: Postgres { dsn, pool_max_conns: 1 } },
		providers: Providers {
			enhancer: EnhancerProviderConfig {
				api_base: "http://127.0.0.1:1".to_string(),
				api_key: "test-key".to_string(),
				path: "/v1/chat/completions".to_string(),
				model: "test".to_string(),
				temperature: 0.0,
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
	}
}

async fn test_env() -> Option<TestDatabase> {
	let base_dsn = match clinote_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping HTTP tests; set CLINOTE_PG_DSN to run this test.");

			return None;
		},
	};

	Some(TestDatabase::new(&base_dsn).await.expect("Failed to create test database."))
}

async fn test_app(test_db: &TestDatabase) -> axum::Router {
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");

	routes::router(state)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Failed to parse response body.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn health_reports_healthy() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let response = app
		.oneshot(Request::builder().uri("/").body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call health endpoint.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["status"], "healthy");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn create_rejects_blank_title() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let payload = serde_json::json!({ "title": " ", "content": "pt seemed ok" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/notes")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create.");

	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "validation_error");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn crud_round_trip() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let payload = serde_json::json!({ "title": "Session 1", "content": "pt seemed ok" });
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/notes")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create.");

	assert_eq!(response.status(), StatusCode::OK);

	let created = json_body(response).await;

	assert_eq!(created["title"], "Session 1");
	assert_eq!(created["content"], "pt seemed ok");
	assert!(created["created_at"].is_string());
	assert!(created["updated_at"].is_null());

	let id = created["id"].as_str().expect("Created note must have an id.").to_string();
	let patch = serde_json::json!({ "content": "Patient presented as stable." });
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("PUT")
				.uri(format!("/api/notes/{id}"))
				.header("content-type", "application/json")
				.body(Body::from(patch.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call update.");

	assert_eq!(response.status(), StatusCode::OK);

	let updated = json_body(response).await;

	assert_eq!(updated["title"], "Session 1");
	assert_eq!(updated["content"], "Patient presented as stable.");
	assert!(updated["updated_at"].is_string());

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.uri("/api/notes")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call list.");

	assert_eq!(response.status(), StatusCode::OK);

	let listed = json_body(response).await;

	assert_eq!(listed.as_array().expect("List must be an array.").len(), 1);

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri(format!("/api/notes/{id}"))
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call delete.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(json_body(response).await["message"], "Note deleted successfully");

	let response = app
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri(format!("/api/notes/{id}"))
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call delete.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn non_uuid_id_maps_to_not_found() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let response = app
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri("/api/notes/not-a-uuid")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call delete.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(json_body(response).await["error_code"], "not_found");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn enhance_falls_back_over_http() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let payload = serde_json::json!({ "title": "Session 1", "content": "pt seemed ok" });
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/notes")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create.");
	let created = json_body(response).await;
	let id = created["id"].as_str().expect("Created note must have an id.").to_string();
	// The configured provider endpoint is a closed port, so enhancement falls back to the
	// original content and the request still succeeds.
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(format!("/api/notes/{id}/enhance"))
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call enhance.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["message"], "Note enhanced successfully");
	assert_eq!(json["enhanced_content"], "pt seemed ok");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CLINOTE_PG_DSN to run."]
async fn cors_allows_configured_origin() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let app = test_app(&test_db).await;
	let response = app
		.oneshot(
			Request::builder()
				.method("OPTIONS")
				.uri("/api/notes")
				.header("origin", FRONTEND_ORIGIN)
				.header("access-control-request-method", "POST")
				.header("access-control-request-headers", "content-type")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call preflight.");
	let headers = response.headers();

	assert_eq!(
		headers.get("access-control-allow-origin").map(|v| v.to_str().unwrap()),
		Some(FRONTEND_ORIGIN)
	);
	assert_eq!(
		headers.get("access-control-allow-credentials").map(|v| v.to_str().unwrap()),
		Some("true")
	);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
