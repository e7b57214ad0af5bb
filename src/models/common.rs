use serde::{Deserialize, Serialize};

use super::PoseVariant;

/// One call's worth of input for the image model. Built per pose and dropped
/// once the call settles.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub pose: &'static PoseVariant,
    pub image_data: String, // Base64 encoded
    pub mime_type: String,
    pub prompt: String,
}

/// A single piece of model output, in the order the model produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub parts: Vec<ContentPart>,
}

impl ModelResponse {
    pub fn new(parts: Vec<ContentPart>) -> Self {
        Self { parts }
    }

    /// Payload of the first part carrying non-empty inline data.
    pub fn first_inline_image(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::InlineData { data, .. } if !data.is_empty() => Some(data.as_str()),
            _ => None,
        })
    }
}
