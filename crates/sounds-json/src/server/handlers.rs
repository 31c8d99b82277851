//! Axum request handlers for all service endpoints.

use std::path::{Path, PathBuf};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{
    protocol::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse},
    ServiceError, SoundMap,
};
use tracing::{debug, info, warn};

use super::state::AppState;
use crate::scanner::{self, Scanner};

/// `POST /generate` — build the `sounds.json` snippet for a directory.
///
/// The body is read as raw bytes and parsed leniently: anything that does not
/// carry a non-blank `directory` string, including a body the framework could
/// not buffer (e.g. over the size limit), is answered with 400 rather than a
/// framework-level rejection.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let req = match body {
        Ok(bytes) => GenerateRequest::from_slice_lenient(&bytes),
        Err(e) => {
            debug!(reason = %e, "generate request body unreadable");
            GenerateRequest::default()
        }
    };
    let Some(directory) = req.trimmed_directory().map(PathBuf::from) else {
        debug!("generate request without a directory");
        return error_response(ServiceError::MissingDirectory);
    };

    // Directory listing is synchronous; keep it off the async workers.
    let source = state.scanner.clone();
    let target = directory.clone();
    let outcome =
        tokio::task::spawn_blocking(move || build_sound_map(source.as_ref(), &target)).await;

    let sounds = match outcome {
        Ok(Ok(sounds)) => sounds,
        Ok(Err(e)) => {
            match &e {
                ServiceError::ReadFailure(detail) => {
                    warn!(directory = %directory.display(), error = %detail, "directory scan failed")
                }
                other => {
                    debug!(directory = %directory.display(), reason = %other, "generate rejected")
                }
            }
            return error_response(e);
        }
        Err(e) => {
            warn!(error = %e, "scan task did not complete");
            return error_response(ServiceError::Internal(e.to_string()));
        }
    };

    let json_text = match scanner::render(&sounds) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "failed to serialise sound map");
            return error_response(ServiceError::Internal(e.to_string()));
        }
    };

    info!(directory = %directory.display(), count = sounds.len(), "sound map generated");
    let body = GenerateResponse {
        json_text,
        count: sounds.len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> Response {
    error_response(ServiceError::NotFound)
}

/// Validate `dir` and scan it, mapping every failure to a [`ServiceError`].
fn build_sound_map(scanner: &dyn Scanner, dir: &Path) -> Result<SoundMap, ServiceError> {
    if !dir.is_dir() {
        return Err(ServiceError::InvalidDirectory);
    }

    let sounds = scanner.scan(dir)?;
    if sounds.is_empty() {
        return Err(ServiceError::NoFiles);
    }
    Ok(sounds)
}

/// Render a [`ServiceError`] as its status code and `{"error": ...}` body.
fn error_response(err: ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}
