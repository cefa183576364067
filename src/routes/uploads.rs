//! Two-phase secure upload: an authenticated caller requests a signed
//! URL for a server-generated unique file name, then PUTs the bytes to
//! that URL. Signatures are sha256 over `secret:path:expires`; the
//! public bucket is additionally served read-only under `/files`.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::routing::{post, put};
use axum::{Json, Router};
use chrono::Utc;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::auth::user::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::router::AppState;

/// Fixed allowlist; anything else is rejected before a URL is generated.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

/// Signed URLs stay valid this long.
const SIGNED_URL_TTL_SECS: i64 = 900;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/uploads/sign", post(sign_upload))
        .route("/api/uploads/{*path}", put(receive_upload))
}

pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// A folder is one plain path segment; anything that could traverse is
/// rejected.
fn valid_folder(folder: &str) -> bool {
    !folder.is_empty()
        && folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn sign_path(secret: &str, path: &str, expires: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{secret}:{path}:{expires}").as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignPayload {
    file_name: String,
    content_type: String,
    bucket: Bucket,
    folder: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Bucket {
    Private,
    Public,
}

impl Bucket {
    fn as_str(self) -> &'static str {
        match self {
            Bucket::Private => "private",
            Bucket::Public => "public",
        }
    }
}

async fn sign_upload(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(payload): Json<SignPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    if payload.file_name.trim().is_empty() {
        return Err(ApiError::Validation("File name is required".to_string()));
    }
    if !is_allowed_content_type(&payload.content_type) {
        return Err(ApiError::Validation(format!(
            "Content type not allowed: {}",
            payload.content_type
        )));
    }
    if !valid_folder(&payload.folder) {
        return Err(ApiError::Validation("Invalid folder name".to_string()));
    }

    let extension = payload
        .file_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .ok_or_else(|| ApiError::Validation("File name must have an extension".to_string()))?
        .to_lowercase();

    // Server-generated name: callers never choose the stored file name.
    let unique = format!("{}.{extension}", Uuid::new_v4().simple());
    let path = format!("{}/{}/{unique}", payload.bucket.as_str(), payload.folder);

    let expires = Utc::now().timestamp() + SIGNED_URL_TTL_SECS;
    let sig = sign_path(&state.config.upload_signing_secret, &path, expires);

    let encoded: Vec<String> = path
        .split('/')
        .map(|seg| utf8_percent_encode(seg, NON_ALPHANUMERIC).to_string())
        .collect();
    let signed_url = format!(
        "{}/api/uploads/{}?expires={expires}&sig={sig}",
        state.config.public_base_url,
        encoded.join("/")
    );

    Ok(Json(json!({ "success": true, "signedUrl": signed_url, "path": path })))
}

#[derive(Debug, Deserialize)]
struct VerifyParams {
    expires: i64,
    sig: String,
}

async fn receive_upload(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(params): Query<VerifyParams>,
    body: Bytes,
) -> ApiResult<Json<serde_json::Value>> {
    if params.expires < Utc::now().timestamp() {
        return Err(ApiError::Validation("Upload URL has expired".to_string()));
    }
    let expected = sign_path(&state.config.upload_signing_secret, &path, params.expires);
    if params.sig != expected {
        return Err(ApiError::Unauthenticated);
    }
    // The signature covers the exact path we issued, but never trust a
    // path that could escape the upload root.
    if path.contains("..") || !(path.starts_with("public/") || path.starts_with("private/")) {
        return Err(ApiError::Validation("Invalid upload path".to_string()));
    }

    let target = std::path::Path::new(&state.config.upload_dir).join(&path);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ApiError::Internal(format!("upload dir: {e}")))?;
    }
    tokio::fs::write(&target, &body)
        .await
        .map_err(|e| ApiError::Internal(format!("upload write: {e}")))?;

    tracing::info!(path = %path, bytes = body.len(), "upload stored");
    Ok(Json(json!({ "success": true, "path": path })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist_rejects_archives() {
        assert!(is_allowed_content_type("image/png"));
        assert!(is_allowed_content_type("application/pdf"));
        assert!(!is_allowed_content_type("application/zip"));
        assert!(!is_allowed_content_type("text/html"));
    }

    #[test]
    fn signature_round_trip() {
        let sig = sign_path("secret", "public/photos/a.png", 1_700_000_000);
        assert_eq!(sig, sign_path("secret", "public/photos/a.png", 1_700_000_000));
        assert_ne!(sig, sign_path("secret", "public/photos/b.png", 1_700_000_000));
        assert_ne!(sig, sign_path("other", "public/photos/a.png", 1_700_000_000));
        assert_ne!(sig, sign_path("secret", "public/photos/a.png", 1_700_000_001));
    }

    #[test]
    fn folder_must_be_plain_segment() {
        assert!(valid_folder("board-photos"));
        assert!(valid_folder("docs_2026"));
        assert!(!valid_folder(""));
        assert!(!valid_folder("../etc"));
        assert!(!valid_folder("a/b"));
    }
}
