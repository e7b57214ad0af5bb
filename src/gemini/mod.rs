pub mod image_client;

use crate::{
    config::GeminiConfig,
    error::{Result, SceneError},
    generator::SceneGenerator,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SceneError::Config("Gemini API key is required".into()))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SceneError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let config = Arc::new(config);
        log::info!(
            "Gemini client ready (model: {}, base url: {})",
            config.model,
            config.base_url
        );

        Ok(Self {
            image_client: ImageClient::new(client, config.clone(), api_key),
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// A scene generator backed by this client's image model.
    pub fn scenes(&self) -> SceneGenerator<ImageClient> {
        SceneGenerator::new(self.image_client.clone())
    }
}
