use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post, put},
};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use uuid::Uuid;

use clinote_service::{
	CreateRequest, DeleteResponse, EnhanceResponse, Error as ServiceError, NotePatch, NoteView,
	PopulateResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	let cors = CorsLayer::new()
		.allow_origin(AllowOrigin::exact(state.frontend_origin.clone()))
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
		.allow_credentials(true);

	Router::new()
		.route("/", get(health))
		.route("/api/populate", post(populate))
		.route("/api/notes", get(list_notes).post(create_note))
		.route("/api/notes/{id}", put(update_note).delete(delete_note))
		.route("/api/notes/{id}/enhance", post(enhance_note))
		.layer(cors)
		.with_state(state)
}

async fn health() -> Json<Value> {
	Json(json!({ "status": "healthy" }))
}

async fn populate(State(state): State<AppState>) -> Result<Json<PopulateResponse>, ApiError> {
	let response = state.service.populate().await?;

	Ok(Json(response))
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteView>>, ApiError> {
	let response = state.service.list().await?;

	Ok(Json(response))
}

async fn create_note(
	State(state): State<AppState>,
	Json(payload): Json<CreateRequest>,
) -> Result<Json<NoteView>, ApiError> {
	let response = state.service.create(payload).await?;

	Ok(Json(response))
}

async fn update_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
	Json(payload): Json<NotePatch>,
) -> Result<Json<NoteView>, ApiError> {
	let response = state.service.update(parse_note_id(&id)?, payload).await?;

	Ok(Json(response))
}

async fn delete_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
	let response = state.service.delete(parse_note_id(&id)?).await?;

	Ok(Json(response))
}

async fn enhance_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<EnhanceResponse>, ApiError> {
	let response = state.service.enhance(parse_note_id(&id)?).await?;

	Ok(Json(response))
}

// A path segment that is not a UUID cannot name any note.
fn parse_note_id(raw: &str) -> Result<Uuid, ApiError> {
	Uuid::parse_str(raw).map_err(|_| {
		ApiError::new(StatusCode::NOT_FOUND, "not_found", "Note not found.".to_string())
	})
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::Validation { .. } =>
				(StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
			ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
			ServiceError::Provider { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "provider_error"),
			ServiceError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
		};

		Self::new(status, error_code, err.to_string())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
