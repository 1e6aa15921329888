mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::Engine;

use crate::traits::{GeneratedImage, ImageGenerator, ImageRequest};

use client::StabilityClient;
use types::TextToImageRequest;

/// How strongly image-to-image preserves the init image. Lower values let
/// the prompt reshape more of the scene.
const DEFAULT_IMAGE_STRENGTH: f32 = 0.35;

// =============================================================================
// Stability Agent
// =============================================================================

#[derive(Clone)]
pub struct Stability {
    api_key: String,
    engine: String,
    base_url: Option<String>,
}

impl Stability {
    pub fn new(api_key: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine: engine.into(),
            base_url: None,
        }
    }

    pub fn from_env(engine: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("STABILITY_API_KEY")
            .map_err(|_| anyhow!("STABILITY_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, engine))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    fn client(&self) -> StabilityClient {
        let client = StabilityClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    fn wire_request(request: &ImageRequest) -> TextToImageRequest {
        let mut wire = TextToImageRequest::new(&request.prompt)
            .size(request.width, request.height)
            .steps(request.steps)
            .cfg_scale(request.cfg_scale);
        if let Some(ref negative) = request.negative_prompt {
            wire = wire.negative_prompt(negative);
        }
        if let Some(ref preset) = request.style_preset {
            wire = wire.style_preset(preset);
        }
        wire
    }

    fn first_artifact(response: types::GenerationResponse) -> Result<GeneratedImage> {
        let artifact = response
            .artifacts
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No artifact in Stability response"))?;

        match artifact.finish_reason.as_deref() {
            Some("ERROR") => Err(anyhow!("Stability generation failed")),
            Some("CONTENT_FILTERED") => {
                Err(anyhow!("Stability generation blocked by content filter"))
            }
            _ => Ok(GeneratedImage {
                base64: artifact.base64,
                mime_type: "image/png".to_string(),
                seed: artifact.seed,
            }),
        }
    }
}

// =============================================================================
// ImageGenerator Implementation
// =============================================================================

#[async_trait]
impl ImageGenerator for Stability {
    async fn text_to_image(&self, request: &ImageRequest) -> Result<GeneratedImage> {
        let wire = Self::wire_request(request);
        let response = self.client().text_to_image(&self.engine, &wire).await?;
        Self::first_artifact(response)
    }

    async fn image_to_image(
        &self,
        init_image_b64: &str,
        request: &ImageRequest,
    ) -> Result<GeneratedImage> {
        let init_image = base64::engine::general_purpose::STANDARD
            .decode(init_image_b64.trim())
            .map_err(|e| anyhow!("Invalid base64 init image: {}", e))?;

        let wire = Self::wire_request(request);
        let response = self
            .client()
            .image_to_image(&self.engine, init_image, DEFAULT_IMAGE_STRENGTH, &wire)
            .await?;
        Self::first_artifact(response)
    }
}
