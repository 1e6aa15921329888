use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextPrompt {
    pub text: String,
    pub weight: f32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f32,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub samples: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<String>,
}

impl TextToImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            text_prompts: vec![TextPrompt {
                text: prompt.into(),
                weight: 1.0,
            }],
            cfg_scale: 7.0,
            width: 1024,
            height: 1024,
            steps: 30,
            samples: 1,
            style_preset: None,
        }
    }

    /// A negative prompt is a text prompt with negative weight.
    pub fn negative_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.text_prompts.push(TextPrompt {
            text: prompt.into(),
            weight: -1.0,
        });
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

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Artifact {
    pub base64: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GenerationResponse {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}
