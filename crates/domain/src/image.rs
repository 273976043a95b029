//! Image generation — the `generate_image` service request and response.

use serde::{Deserialize, Serialize};

use crate::error::{AssistError, ValidationError};
use crate::id::ConfigEntryId;

/// Image model requested from the vendor.
pub const IMAGE_MODEL: &str = "dall-e-3";

/// Output dimensions accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1024x1792")]
    Portrait,
    #[serde(rename = "1792x1024")]
    Landscape,
}

impl ImageSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Portrait => "1024x1792",
            Self::Landscape => "1792x1024",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Standard,
    Hd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Vivid,
    Natural,
}

/// Service-call payload of `generate_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub config_entry: ConfigEntryId,
    pub prompt: String,
    #[serde(default)]
    pub size: ImageSize,
    #[serde(default)]
    pub quality: ImageQuality,
    #[serde(default)]
    pub style: ImageStyle,
}

impl GenerateImageRequest {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] when the prompt is blank.
    pub fn validate(&self) -> Result<(), AssistError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt.into());
        }
        Ok(())
    }

    /// Parameters forwarded to the vendor for this request.
    #[must_use]
    pub fn params(&self) -> ImageParams {
        ImageParams {
            model: IMAGE_MODEL,
            prompt: self.prompt.clone(),
            size: self.size,
            quality: self.quality,
            style: self.style,
            response_format: "url",
            n: 1,
        }
    }
}

/// Fully resolved parameters of one image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageParams {
    pub model: &'static str,
    pub prompt: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub style: ImageStyle,
    pub response_format: &'static str,
    pub n: u8,
}

/// One image returned by the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_when_optional_fields_missing() {
        let json = r#"{"config_entry": "abc", "prompt": "a cat on a roof"}"#;
        let req: GenerateImageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.size, ImageSize::Square);
        assert_eq!(req.quality, ImageQuality::Standard);
        assert_eq!(req.style, ImageStyle::Vivid);
    }

    #[test]
    fn should_parse_explicit_options() {
        let json = r#"{
            "config_entry": "abc",
            "prompt": "sunset",
            "size": "1792x1024",
            "quality": "hd",
            "style": "natural"
        }"#;
        let req: GenerateImageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.size, ImageSize::Landscape);
        assert_eq!(req.quality, ImageQuality::Hd);
        assert_eq!(req.style, ImageStyle::Natural);
    }

    #[test]
    fn should_reject_unknown_size() {
        let json = r#"{"config_entry": "abc", "prompt": "x", "size": "512x512"}"#;
        let result: Result<GenerateImageRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_missing_prompt() {
        let json = r#"{"config_entry": "abc"}"#;
        let result: Result<GenerateImageRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_blank_prompt_on_validate() {
        let json = r#"{"config_entry": "abc", "prompt": "   "}"#;
        let req: GenerateImageRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            req.validate(),
            Err(AssistError::Validation(ValidationError::EmptyPrompt))
        ));
    }

    #[test]
    fn should_build_single_url_params_for_dall_e() {
        let json = r#"{"config_entry": "abc", "prompt": "a fox", "size": "1024x1792"}"#;
        let req: GenerateImageRequest = serde_json::from_str(json).unwrap();
        let params = req.params();
        assert_eq!(params.model, "dall-e-3");
        assert_eq!(params.response_format, "url");
        assert_eq!(params.n, 1);
        assert_eq!(params.size.as_str(), "1024x1792");
    }

    #[test]
    fn should_omit_missing_fields_when_serializing_image() {
        let image = GeneratedImage {
            url: Some("https://img/1.png".to_string()),
            revised_prompt: None,
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json, serde_json::json!({"url": "https://img/1.png"}));
    }
}
