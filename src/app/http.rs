// ==========================================
// Opsboard - HTTP Layer
// ==========================================
// Responsibility: multipart extraction and JSON response/error
// envelopes for the two upload endpoints. All ingestion and
// persistence logic lives behind the UploadApi.
// ==========================================

use crate::api::ApiError;
use crate::app::state::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload-inventory", post(upload_inventory))
        .route("/upload-sales", post(upload_sales))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// The uploaded file part of a multipart form.
struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// Pull the `file` part and one named text field out of a multipart
/// form. Unknown parts are ignored.
async fn read_upload_form(
    mut multipart: Multipart,
    text_field: &str,
) -> Result<(Option<UploadedFile>, Option<String>), ApiError> {
    let mut file = None;
    let mut text_value = None;

    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("malformed multipart body: {e}")))?;
        let Some(field) = field else { break };

        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidRequest(format!("could not read file part: {e}")))?
                    .to_vec();
                file = Some(UploadedFile { file_name, bytes });
            }
            Some(name) if name == text_field => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidRequest(format!("could not read {text_field}: {e}")))?;
                if !value.is_empty() {
                    text_value = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok((file, text_value))
}

async fn upload_inventory(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let (file, location) = match read_upload_form(multipart, "location").await {
        Ok(parts) => parts,
        Err(e) => return error_response(&e),
    };
    let Some(file) = file else {
        return error_response(&ApiError::MissingFile);
    };

    match state
        .upload_api
        .upload_inventory(&file.file_name, &file.bytes, location.as_deref())
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn upload_sales(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let (file, period) = match read_upload_form(multipart, "period").await {
        Ok(parts) => parts,
        Err(e) => return error_response(&e),
    };
    let Some(file) = file else {
        return error_response(&ApiError::MissingFile);
    };
    let Some(period) = period else {
        return error_response(&ApiError::MissingRequiredField("period".to_string()));
    };

    match state
        .upload_api
        .upload_sales(&file.file_name, &file.bytes, &period)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Map an ApiError to the `{ "error": msg }` envelope with its status.
fn error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(error = %err, "upload failed");
    } else {
        warn!(error = %err, "upload rejected");
    }

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
