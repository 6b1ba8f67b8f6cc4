//! Image Host Client
//!
//! Thin client for the external image-hosting service. An avatar upload is a
//! single awaited multipart POST (Cloudinary-style unsigned upload) carrying
//! the file bytes, a caller-chosen public id, and the configured upload
//! preset. The response JSON must contain the hosted `secure_url`. Failures
//! are terminal; nothing is retried.

use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// Image host failure
#[derive(Debug, Error)]
pub enum UploadError {
    /// The HTTP round trip itself failed
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered with a non-success status
    #[error("image host rejected the upload with status {0}")]
    Rejected(StatusCode),

    /// The host answered 2xx but without a usable URL
    #[error("image host response is missing the hosted URL")]
    MalformedResponse,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Client for the configured image host
#[derive(Debug, Clone)]
pub struct ImageHost {
    client: reqwest::Client,
    endpoint: String,
    preset: String,
}

impl ImageHost {
    /// Create a client for the given upload endpoint and preset.
    pub fn new(endpoint: String, preset: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            preset,
        }
    }

    /// Upload one file and return its hosted URL.
    ///
    /// # Arguments
    /// * `public_id` - Freshly generated identifier the file is stored under
    /// * `bytes` - Raw file contents
    pub async fn upload(&self, public_id: Uuid, bytes: Vec<u8>) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name("avatar");
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("public_id", public_id.to_string())
            .text("upload_preset", self.preset.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Image host rejected upload: {status}");
            return Err(UploadError::Rejected(
                StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url.ok_or(UploadError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upload_returns_hosted_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "secure_url": "https://images.example.com/avatar.png"
            })))
            .mount(&server)
            .await;

        let host = ImageHost::new(format!("{}/upload", server.uri()), "preset".to_string());
        let url = host.upload(Uuid::new_v4(), b"fake image".to_vec()).await.unwrap();
        assert_eq!(url, "https://images.example.com/avatar.png");
    }

    #[tokio::test]
    async fn test_upload_rejected_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let host = ImageHost::new(server.uri(), "preset".to_string());
        let result = host.upload(Uuid::new_v4(), vec![0u8; 4]).await;
        assert!(matches!(result, Err(UploadError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_upload_missing_url_in_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let host = ImageHost::new(server.uri(), "preset".to_string());
        let result = host.upload(Uuid::new_v4(), vec![0u8; 4]).await;
        assert!(matches!(result, Err(UploadError::MalformedResponse)));
    }
}
