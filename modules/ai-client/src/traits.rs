use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Image Request / Response Types
// =============================================================================

/// Parameters for one image generation call, provider-agnostic.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub cfg_scale: f32,
    pub style_preset: Option<String>,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            width: 1024,
            height: 1024,
            steps: 30,
            cfg_scale: 7.0,
            style_preset: None,
        }
    }

    pub fn negative_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(prompt.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn cfg_scale(mut self, cfg_scale: f32) -> Self {
        self.cfg_scale = cfg_scale;
        self
    }

    pub fn style_preset(mut self, preset: impl Into<String>) -> Self {
        self.style_preset = Some(preset.into());
        self
    }
}

/// One generated image, base64-encoded as returned by the provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub base64: String,
    pub mime_type: String,
    pub seed: Option<u64>,
}

// =============================================================================
// TextGenerator Trait
// =============================================================================

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// ImageGenerator Trait
// =============================================================================

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn text_to_image(&self, request: &ImageRequest) -> Result<GeneratedImage>;

    /// Generate a variation of `init_image_b64` (base64 PNG) steered by the
    /// request prompt.
    async fn image_to_image(
        &self,
        init_image_b64: &str,
        request: &ImageRequest,
    ) -> Result<GeneratedImage>;
}
