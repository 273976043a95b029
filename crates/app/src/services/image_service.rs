//! Image service — handles the `generate_image` service call.

use assistbridge_domain::error::{AssistError, UpstreamError, ValidationError};
use assistbridge_domain::image::{GenerateImageRequest, GeneratedImage};

use crate::ports::{ConfigEntryLookup, ImageGenerator};

/// Application service turning a service-call payload into one image.
pub struct ImageService<C, G> {
    entries: C,
    generator: G,
}

impl<C, G> ImageService<C, G>
where
    C: ConfigEntryLookup,
    G: ImageGenerator,
{
    /// Create a new service backed by the entry registry and the vendor API.
    pub fn new(entries: C, generator: G) -> Self {
        Self { entries, generator }
    }

    /// Generate an image for `request` using the entry it names.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] when the prompt is blank or the
    /// config entry is unknown or owned by another integration, and
    /// [`AssistError::Upstream`] when the vendor call fails or returns no image.
    pub async fn generate_image(
        &self,
        request: GenerateImageRequest,
    ) -> Result<GeneratedImage, AssistError> {
        request.validate()?;

        let entry = self
            .entries
            .config_entry(&request.config_entry)
            .filter(|entry| entry.is_owned())
            .ok_or_else(|| ValidationError::InvalidConfigEntry(request.config_entry.to_string()))?;

        let params = request.params();
        tracing::debug!(
            entry = %entry.id,
            size = params.size.as_str(),
            "generating image"
        );

        let images = self
            .generator
            .generate(entry, &params)
            .await
            .map_err(|err| UpstreamError::Api(format!("Error generating image: {err}")))?;

        images.into_iter().next().ok_or_else(|| {
            UpstreamError::Api("Error generating image: no image returned".to_string()).into()
        })
    }
}
