//! Vendor ports — the conversational-AI API as seen by the use-cases.
//!
//! The host owns the HTTP client and the SDK. Implementations authenticate
//! with the entry's API key and translate SDK failures into
//! [`UpstreamError`], using [`UpstreamError::Authentication`] for refused keys.

use std::future::Future;

use assistbridge_domain::config_entry::ConfigEntry;
use assistbridge_domain::error::UpstreamError;
use assistbridge_domain::image::{GeneratedImage, ImageParams};

/// Image generation endpoint.
pub trait ImageGenerator: Send + Sync {
    /// Generate images for `params`. May return fewer images than requested.
    fn generate(
        &self,
        entry: &ConfigEntry,
        params: &ImageParams,
    ) -> impl Future<Output = Result<Vec<GeneratedImage>, UpstreamError>> + Send;
}

/// Model listing endpoint, used as a cheap authenticated probe.
pub trait ModelCatalog: Send + Sync {
    /// List the model identifiers available to `entry`'s API key.
    fn list_models(
        &self,
        entry: &ConfigEntry,
    ) -> impl Future<Output = Result<Vec<String>, UpstreamError>> + Send;
}
