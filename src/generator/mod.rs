//! Photoshoot orchestration: one model call per pose, run concurrently,
//! collected back in catalog order.
pub mod traits;

use futures::future::try_join_all;
use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::{
    encoder,
    error::{Result, SceneError},
    logger,
    models::{catalog, GeneratedImage, GenerationRequest, ImageMimeType, ImageResource},
    prompt::build_prompt,
};

pub use traits::ImageModel;

#[derive(Clone)]
pub struct SceneGenerator<M> {
    model: M,
}

impl<M: ImageModel> SceneGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Encodes the caller's photo and runs the photoshoot on it.
    pub async fn generate_from_resource(
        &self,
        resource: &ImageResource,
        scene_description: &str,
    ) -> Result<Vec<GeneratedImage>> {
        self.generate_from_reader(resource.bytes(), resource.mime_type(), scene_description)
            .await
    }

    /// Reads the whole photo from `reader` before any model call is made.
    pub async fn generate_from_reader<R>(
        &self,
        reader: R,
        mime_type: ImageMimeType,
        scene_description: &str,
    ) -> Result<Vec<GeneratedImage>>
    where
        R: AsyncRead + Unpin,
    {
        let encoded = encoder::encode(reader).await?;
        self.generate_scenes(&encoded, mime_type.as_str(), scene_description)
            .await
    }

    /// Generates one image per catalog pose from an already encoded photo.
    ///
    /// Returns every pose in catalog order, or the first failure. When one
    /// pose fails the others are dropped mid-flight and their results are
    /// never seen.
    pub async fn generate_scenes(
        &self,
        encoded_image: &str,
        mime_type: &str,
        scene_description: &str,
    ) -> Result<Vec<GeneratedImage>> {
        if mime_type.trim().is_empty() {
            return Err(SceneError::InvalidInput("MIME type must not be empty".into()));
        }
        let encoded_image = encoder::strip_data_uri_prefix(encoded_image);

        let batch_id = Uuid::new_v4().to_string();
        let timer = logger::timer(&format!("Photoshoot {}", batch_id));
        log::info!(
            "🎨 Photoshoot {}: {} poses with {} ({} base64 chars)",
            batch_id,
            catalog().len(),
            self.model.name(),
            encoded_image.len()
        );

        let requests: Vec<GenerationRequest> = catalog()
            .iter()
            .map(|pose| GenerationRequest {
                pose,
                image_data: encoded_image.to_string(),
                mime_type: mime_type.to_string(),
                prompt: build_prompt(scene_description, pose.instruction),
            })
            .collect();

        let payloads = match try_join_all(requests.iter().map(|r| self.generate_for_pose(r))).await
        {
            Ok(payloads) => payloads,
            Err(e) => {
                log::error!("Photoshoot {} failed: {}", batch_id, e);
                return Err(e);
            }
        };

        let images: Vec<GeneratedImage> = requests
            .iter()
            .zip(payloads)
            .map(|(request, image_payload)| GeneratedImage {
                image_payload,
                mime_type: mime_type.to_string(),
                pose: request.pose.label.to_string(),
            })
            .collect();

        logger::log_generation_summary(&batch_id, &images, timer.stop());
        Ok(images)
    }

    async fn generate_for_pose(&self, request: &GenerationRequest) -> Result<String> {
        let response = self.model.generate(request).await?;

        match response.first_inline_image() {
            Some(data) => {
                log::debug!("Pose '{}' returned an image", request.pose.label);
                Ok(data.to_string())
            }
            None => {
                log::warn!(
                    "Pose '{}' returned no image data ({} parts)",
                    request.pose.label,
                    response.parts.len()
                );
                Err(SceneError::Generation {
                    pose: request.pose.label.to_string(),
                    instruction: request.pose.instruction.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentPart, ModelResponse, POSE_CATALOG};
    use crate::prompt::DEFAULT_SCENE_DESCRIPTION;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::io;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::task::{Context, Poll};
    use std::time::Duration;
    use tokio::io::ReadBuf;

    const LABELS: [&str; 4] = [
        "Confident Pose",
        "Candid Laugh",
        "Thoughtful Profile",
        "Dynamic Action",
    ];

    /// Answers each pose with its label as the image payload, after a
    /// per-pose delay. Poses listed in `refuse` get a text-only reply.
    #[derive(Default)]
    struct ScriptedModel {
        delays_ms: HashMap<&'static str, u64>,
        refuse: Vec<&'static str>,
        transport_failure: Option<&'static str>,
        calls: AtomicUsize,
        completed: Mutex<Vec<String>>,
        prompts: Mutex<Vec<String>>,
        image_data: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn with_delays(delays: [u64; 4]) -> Self {
            Self {
                delays_ms: LABELS.iter().copied().zip(delays).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ImageModel for ScriptedModel {
        async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.image_data.lock().unwrap().push(request.image_data.clone());

            let label = request.pose.label;
            if let Some(ms) = self.delays_ms.get(label) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            self.completed.lock().unwrap().push(label.to_string());

            if self.transport_failure == Some(label) {
                return Err(SceneError::Transport("connection reset".into()));
            }
            if self.refuse.contains(&label) {
                return Ok(ModelResponse::new(vec![ContentPart::Text(
                    "I can't create that image.".into(),
                )]));
            }
            Ok(ModelResponse::new(vec![
                ContentPart::Text("Here you go".into()),
                ContentPart::InlineData {
                    mime_type: "image/png".into(),
                    data: encoder::encode_bytes(label.as_bytes()),
                },
            ]))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct CorruptedStream;

    impl AsyncRead for CorruptedStream {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "corrupted stream")))
        }
    }

    fn labels(images: &[GeneratedImage]) -> Vec<&str> {
        images.iter().map(|i| i.pose.as_str()).collect()
    }

    fn jpeg_resource() -> ImageResource {
        ImageResource::new(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10], ImageMimeType::Jpeg)
    }

    #[tokio::test]
    async fn test_empty_description_uses_default_for_every_pose() {
        let generator = SceneGenerator::new(ScriptedModel::default());
        let images = generator
            .generate_from_resource(&jpeg_resource(), "")
            .await
            .unwrap();

        assert_eq!(labels(&images), LABELS);
        for image in &images {
            assert_eq!(image.mime_type, "image/jpeg");
            assert!(image.data_uri().starts_with("data:image/jpeg;base64,"));
        }

        let prompts = generator.model().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 4);
        assert!(prompts.iter().all(|p| p.contains(DEFAULT_SCENE_DESCRIPTION)));
        for pose in POSE_CATALOG.iter() {
            assert_eq!(
                prompts.iter().filter(|p| p.contains(pose.instruction)).count(),
                1
            );
        }
    }

    #[tokio::test]
    async fn test_description_reaches_every_prompt() {
        let generator = SceneGenerator::new(ScriptedModel::default());
        let encoded = encoder::encode_bytes(b"portrait");
        let images = generator
            .generate_scenes(&encoded, "image/png", "on a rooftop at night")
            .await
            .unwrap();

        assert_eq!(labels(&images), LABELS);
        let prompts = generator.model().prompts.lock().unwrap();
        assert!(prompts.iter().all(|p| p.contains("on a rooftop at night")));
        assert!(!prompts.iter().any(|p| p.contains(DEFAULT_SCENE_DESCRIPTION)));
    }

    #[tokio::test]
    async fn test_results_follow_catalog_not_completion_order() {
        for delays in [[80, 60, 40, 5], [10, 40, 0, 25], [0, 0, 30, 5]] {
            let generator = SceneGenerator::new(ScriptedModel::with_delays(delays));
            let images = generator
                .generate_scenes(&encoder::encode_bytes(b"me"), "image/webp", "")
                .await
                .unwrap();

            assert_eq!(labels(&images), LABELS);
            for image in &images {
                assert_eq!(image.image_payload, encoder::encode_bytes(image.pose.as_bytes()));
            }
        }

        let generator = SceneGenerator::new(ScriptedModel::with_delays([80, 60, 40, 5]));
        generator
            .generate_scenes(&encoder::encode_bytes(b"me"), "image/png", "")
            .await
            .unwrap();
        let completed = generator.model().completed.lock().unwrap();
        assert_eq!(completed.first().map(String::as_str), Some("Dynamic Action"));
    }

    #[tokio::test]
    async fn test_refused_pose_fails_whole_batch() {
        let model = ScriptedModel {
            refuse: vec!["Thoughtful Profile"],
            ..Default::default()
        };
        let generator = SceneGenerator::new(model);
        let err = generator
            .generate_from_resource(&jpeg_resource(), "")
            .await
            .unwrap_err();

        match &err {
            SceneError::Generation { pose, instruction } => {
                assert_eq!(pose, "Thoughtful Profile");
                assert_eq!(instruction, POSE_CATALOG[2].instruction);
            }
            other => panic!("expected generation error, got {:?}", other),
        }
        assert!(err.to_string().contains("Thoughtful Profile"));
    }

    #[tokio::test]
    async fn test_first_failure_wins_and_siblings_are_dropped() {
        let mut model = ScriptedModel::with_delays([200, 200, 10, 200]);
        model.refuse = vec!["Thoughtful Profile"];
        let generator = SceneGenerator::new(model);

        let err = generator
            .generate_scenes(&encoder::encode_bytes(b"me"), "image/png", "")
            .await
            .unwrap_err();
        assert_eq!(err.pose(), Some("Thoughtful Profile"));

        // All four calls were issued, only the refused one finished.
        assert_eq!(generator.model().calls.load(Ordering::SeqCst), 4);
        assert_eq!(
            *generator.model().completed.lock().unwrap(),
            vec!["Thoughtful Profile".to_string()]
        );
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let model = ScriptedModel {
            transport_failure: Some("Candid Laugh"),
            ..Default::default()
        };
        let generator = SceneGenerator::new(model);
        let err = generator
            .generate_scenes(&encoder::encode_bytes(b"me"), "image/png", "")
            .await
            .unwrap_err();
        assert!(matches!(err, SceneError::Transport(ref msg) if msg == "connection reset"));
    }

    #[tokio::test]
    async fn test_read_failure_stops_before_any_call() {
        let generator = SceneGenerator::new(ScriptedModel::default());
        let err = generator
            .generate_from_reader(CorruptedStream, ImageMimeType::Jpeg, "")
            .await
            .unwrap_err();

        assert!(matches!(err, SceneError::Encoding(_)));
        assert_eq!(err.to_string(), "corrupted stream");
        assert_eq!(generator.model().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_mime_type_rejected() {
        let generator = SceneGenerator::new(ScriptedModel::default());
        let err = generator
            .generate_scenes("aGVsbG8=", "  ", "")
            .await
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidInput(_)));
        assert_eq!(generator.model().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_data_uri_header_is_not_forwarded() {
        let generator = SceneGenerator::new(ScriptedModel::default());
        let images = generator
            .generate_scenes("data:image/png;base64,aGVsbG8=", "image/png", "")
            .await
            .unwrap();
        assert_eq!(images.len(), 4);
        let sent = generator.model().image_data.lock().unwrap();
        assert!(sent.iter().all(|data| data == "aGVsbG8="));
    }
}
