use std::sync::Arc;

use ai_client::{ImageGenerator, ImageRequest};
use anyhow::Result;
use npcc_common::PolicyInputs;
use npcc_engine::ImpactResult;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::prompts::{
    baseline_prompt, change_description, impact_negative_prompt, impact_prompt, ImageStyle,
};
use crate::scenario::Scenario;

/// Before/after comparison, images base64-encoded for the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrbanComparison {
    pub baseline_image: String,
    pub impact_image: String,
    pub description: String,
}

/// Turns a policy configuration into a visual before/after story for one
/// city. All arithmetic lives in the engine; this only builds prompts and
/// drives the image provider.
pub struct UrbanImpactGenerator {
    images: Arc<dyn ImageGenerator>,
}

impl UrbanImpactGenerator {
    pub fn new(images: Arc<dyn ImageGenerator>) -> Self {
        Self { images }
    }

    /// Full comparison. With a caller-supplied baseline photo the impact
    /// frame is a variation of it; otherwise both frames are generated.
    pub async fn generate_comparison(
        &self,
        inputs: &PolicyInputs,
        calculation: &ImpactResult,
        city_description: &str,
        style: ImageStyle,
        baseline_image_b64: Option<String>,
    ) -> Result<UrbanComparison> {
        let impact_request = self.impact_request(inputs, calculation, city_description, style);

        let (baseline_image, impact_image) = match baseline_image_b64 {
            Some(baseline) => {
                info!(city = %city_description, "Urban impact from caller baseline image");
                let impact = self
                    .images
                    .image_to_image(&baseline, &impact_request)
                    .await?;
                (baseline, impact.base64)
            }
            None => {
                info!(city = %city_description, "Urban impact with generated baseline");
                let baseline_request =
                    ImageRequest::new(baseline_prompt(city_description, style));
                let baseline = self.images.text_to_image(&baseline_request).await?;
                let impact = self.images.text_to_image(&impact_request).await?;
                (baseline.base64, impact.base64)
            }
        };

        Ok(UrbanComparison {
            baseline_image,
            impact_image,
            description: change_description(inputs, calculation),
        })
    }

    /// Scenario-preset comparison, both frames generated.
    pub async fn quick_generate(
        &self,
        inputs: &PolicyInputs,
        calculation: &ImpactResult,
        scenario: Scenario,
    ) -> Result<UrbanComparison> {
        self.generate_comparison(
            inputs,
            calculation,
            scenario.description(),
            ImageStyle::Photorealistic,
            None,
        )
        .await
    }

    fn impact_request(
        &self,
        inputs: &PolicyInputs,
        calculation: &ImpactResult,
        city_description: &str,
        style: ImageStyle,
    ) -> ImageRequest {
        let mut request =
            ImageRequest::new(impact_prompt(inputs, calculation, city_description, style));
        if let Some(negative) = impact_negative_prompt(inputs) {
            request = request.negative_prompt(negative);
        }
        request
    }
}
