use crate::{
    error::Result,
    models::{GenerationRequest, ModelResponse},
};
use async_trait::async_trait;

/// An external multimodal model that can answer one pose request.
///
/// Transport failures come back as `Err`; a refusal is an `Ok` response with
/// no inline image part.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse>;

    fn name(&self) -> &str;
}
