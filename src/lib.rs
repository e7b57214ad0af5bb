//! Identity-preserving portrait photoshoots.
//!
//! A caller hands over one photo and a scene description; the crate encodes
//! the photo, writes one instruction prompt per pose in [`POSE_CATALOG`],
//! sends the four requests to an [`ImageModel`] concurrently and returns the
//! images in catalog order, or the first failure.
//!
//! - `encoder`: base64 encoding of the source photo.
//! - `prompt`: per-pose instruction text.
//! - `generator`: fan-out / fan-in over the pose catalog.
//! - `gemini`: REST client for Gemini image models.
//! - `models`: request, response and result types.
//! - `config`, `error`, `logger`: ambient plumbing.
pub mod config;
pub mod encoder;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod logger;
pub mod models;
pub mod prompt;

pub use config::GeminiConfig;
pub use error::{Result, SceneError};
pub use gemini::{GeminiClient, ImageClient};
pub use generator::{ImageModel, SceneGenerator};
pub use models::{
    catalog, find_pose, ContentPart, GeneratedImage, GenerationRequest, ImageMimeType,
    ImageResource, ModelResponse, PoseVariant, POSE_CATALOG,
};
pub use prompt::{build_prompt, DEFAULT_SCENE_DESCRIPTION};
