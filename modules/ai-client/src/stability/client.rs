use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::debug;

use super::types::*;

const STABILITY_API_URL: &str = "https://api.stability.ai";

pub(crate) struct StabilityClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl StabilityClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
            base_url: STABILITY_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn text_to_image(
        &self,
        engine: &str,
        request: &TextToImageRequest,
    ) -> Result<GenerationResponse> {
        let url = format!("{}/v1/generation/{}/text-to-image", self.base_url, engine);

        debug!(engine = %engine, "Stability text-to-image request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Stability API error ({}): {}", status, error_text));
        }

        Ok(response.json().await?)
    }

    /// Image-to-image rides a multipart form: the init image as raw bytes,
    /// everything else as indexed form fields.
    pub async fn image_to_image(
        &self,
        engine: &str,
        init_image: Vec<u8>,
        image_strength: f32,
        request: &TextToImageRequest,
    ) -> Result<GenerationResponse> {
        let url = format!("{}/v1/generation/{}/image-to-image", self.base_url, engine);

        debug!(engine = %engine, "Stability image-to-image request");

        let mut form = reqwest::multipart::Form::new()
            .part(
                "init_image",
                reqwest::multipart::Part::bytes(init_image)
                    .file_name("init_image.png")
                    .mime_str("image/png")?,
            )
            .text("init_image_mode", "IMAGE_STRENGTH")
            .text("image_strength", image_strength.to_string())
            .text("cfg_scale", request.cfg_scale.to_string())
            .text("steps", request.steps.to_string())
            .text("samples", request.samples.to_string());

        for (i, prompt) in request.text_prompts.iter().enumerate() {
            form = form
                .text(format!("text_prompts[{i}][text]"), prompt.text.clone())
                .text(format!("text_prompts[{i}][weight]"), prompt.weight.to_string());
        }

        if let Some(ref preset) = request.style_preset {
            form = form.text("style_preset", preset.clone());
        }

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Stability API error ({}): {}", status, error_text));
        }

        Ok(response.json().await?)
    }
}
