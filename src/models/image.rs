use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Raster formats accepted for the source photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMimeType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Png => "image/png",
            ImageMimeType::Webp => "image/webp",
        }
    }

    pub fn from_extension(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageMimeType::Jpeg),
            "png" => Some(ImageMimeType::Png),
            "webp" => Some(ImageMimeType::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageMimeType {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMimeType::Jpeg),
            "image/png" => Ok(ImageMimeType::Png),
            "image/webp" => Ok(ImageMimeType::Webp),
            _ => Err(SceneError::UnsupportedMimeType(s.to_string())),
        }
    }
}

/// The caller's photo. The crate only ever reads it.
#[derive(Debug, Clone)]
pub struct ImageResource {
    bytes: Vec<u8>,
    mime_type: ImageMimeType,
}

impl ImageResource {
    pub fn new(bytes: Vec<u8>, mime_type: ImageMimeType) -> Self {
        Self { bytes, mime_type }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Loads a photo from disk, taking the MIME type from the file extension.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = ImageMimeType::from_extension(path)
            .ok_or_else(|| SceneError::UnsupportedMimeType(path.display().to_string()))?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { bytes, mime_type })
    }

    /// Parses a `data:<mime>;base64,<payload>` URI as produced by browser file readers.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let (header, payload) = uri
            .split_once(',')
            .ok_or_else(|| SceneError::InvalidInput("data URI has no payload".into()))?;
        let mime = header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64"))
            .ok_or_else(|| SceneError::InvalidInput(format!("malformed data URI header: {}", header)))?;
        let mime_type = mime.parse()?;
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| SceneError::InvalidInput(format!("invalid base64 payload: {}", e)))?;
        Ok(Self { bytes, mime_type })
    }
}

/// One finished photo from the shoot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_payload: String, // Base64 encoded
    pub mime_type: String,
    pub pose: String,
}

impl GeneratedImage {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.image_payload)
    }
}
