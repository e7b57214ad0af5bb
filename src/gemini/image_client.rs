use std::sync::Arc;

use crate::{
    config::GeminiConfig,
    error::{Result, SceneError},
    generator::ImageModel,
    models::{GeminiRequest, GeminiResponse, GenerationRequest, ModelResponse},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: Arc<GeminiConfig>,
    api_key: String,
}

impl ImageClient {
    pub fn new(client: Client, config: Arc<GeminiConfig>, api_key: String) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| SceneError::Config(format!("Invalid API key header: {}", e)))?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ImageModel for ImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse> {
        let payload =
            GeminiRequest::image_edit(&request.image_data, &request.mime_type, &request.prompt);

        log::info!(
            "Generating image for pose '{}' with model: {}",
            request.pose.label,
            self.config.model
        );
        log::debug!(
            "Image payload: {} base64 chars ({}), prompt: {} chars",
            request.image_data.len(),
            request.mime_type,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini request failed for '{}': {}", request.pose.label, e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            log::error!("Gemini API error: status={}, body={}", status, body);
            return Err(SceneError::Transport(format!(
                "Gemini request failed with status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse Gemini response: {}", e);
            e
        })?;

        if let Some(reason) = gemini_response.finish_reason() {
            log::debug!("Pose '{}' finish reason: {}", request.pose.label, reason);
        }

        Ok(gemini_response.into())
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
