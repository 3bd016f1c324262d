//! Icon generation against the Recraft image API.
//!
//! This is the working end of the plugin: build one request from the plugin
//! settings and a tag name, POST it, and pull the image URL out of the
//! response.
//!
//! The caller-facing contract is deliberately soft. [`IconClient::fetch_tag_icon`]
//! never returns an error: every failure is logged to the host and collapsed
//! into `None`, because a tag without an icon is an acceptable outcome while
//! a crashed plugin task is not. The typed error path is still available via
//! [`IconClient::generate`] for callers that want to distinguish failures.

use crate::client::{build_http_client, check_response_status, translate_reqwest_error};
use crate::error::{RecraftError, Result};
use crate::log;
use crate::settings::PluginSettings;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};


/// Model identifier sent with every generation request.
pub const RECRAFT_MODEL: &str = "recraftv2";

/// Request body for the image generation endpoint.
///
/// Style selection: a non-empty style id wins outright and suppresses
/// `sub_style`; otherwise the named style and sub-style are sent when
/// non-empty. The two selection forms never appear together in one body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Image dimensions as `"{size}x{size}"`.
    pub size: String,
    /// Free-text prompt; the tag name.
    pub prompt: String,
    /// Model identifier (always [`RECRAFT_MODEL`]).
    pub model: String,
    /// Style id or style name, depending on configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Sub-style refining a named style; never sent with a style id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_style: Option<String>,
}

impl GenerationRequest {
    /// Builds a request body from the plugin settings and a tag name.
    ///
    /// Settings are passed through without validation; an unset size renders
    /// as `"0x0"` and the remote service is left to reject it.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::icon::GenerationRequest;
    /// use librecraft::settings::PluginSettings;
    ///
    /// let settings = PluginSettings {
    ///     icon_size: Some(256),
    ///     ..Default::default()
    /// };
    /// let request = GenerationRequest::new(&settings, "sunset");
    /// assert_eq!(request.size, "256x256");
    /// assert_eq!(request.prompt, "sunset");
    /// ```
    pub fn new(settings: &PluginSettings, tag_name: &str) -> Self {
        let size = settings.icon_size.unwrap_or_default();

        let mut request = Self {
            size: format!("{}x{}", size, size),
            prompt: tag_name.to_string(),
            model: RECRAFT_MODEL.to_string(),
            style: None,
            sub_style: None,
        };

        if let Some(style_id) = settings.style_id.as_deref()
            && !style_id.is_empty()
        {
            request.style = Some(style_id.to_string());
        } else {
            if let Some(style) = settings.style.as_deref()
                && !style.is_empty()
            {
                request.style = Some(style.to_string());
            }
            if let Some(sub_style) = settings.sub_style.as_deref()
                && !sub_style.is_empty()
            {
                request.sub_style = Some(sub_style.to_string());
            }
        }

        request
    }
}

/// Success body of the generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    /// Generated images; the first one's URL is the result.
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

/// Client for the Recraft image generation API.
#[derive(Debug, Clone)]
pub struct IconClient {
    /// The underlying HTTP client
    http_client: reqwest::Client,
}

impl IconClient {
    /// Creates a new client.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::icon::IconClient;
    ///
    /// let client = IconClient::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Ok(Self {
            http_client: build_http_client()?,
        })
    }

    /// Requests one generated icon and returns its URL.
    ///
    /// Issues exactly one POST to the configured endpoint with bearer
    /// authorization and `Prefer: wait`, so the server blocks until the image
    /// is ready. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is unreachable or returns a non-2xx status
    /// - The response body is not valid JSON
    /// - The response carries no generated image (empty or missing `data`)
    pub async fn generate(&self, settings: &PluginSettings, tag_name: &str) -> Result<String> {
        let url = settings.api_url.clone().unwrap_or_default();
        let api_key = settings.api_key.as_deref().unwrap_or_default();
        let body = GenerationRequest::new(settings, tag_name);

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            // Ask the server to hold the request open until generation finishes
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await
            .map_err(|e| translate_reqwest_error(e, &url))?;

        let response = check_response_status(response).await?;

        // Keep the raw text around: an empty result is logged with the full
        // payload so misconfigured styles are diagnosable from host logs.
        let raw_body = response
            .text()
            .await
            .map_err(|e| RecraftError::network_with_source("Failed to read image response", e))?;

        let parsed: GenerationResponse = serde_json::from_str(&raw_body).map_err(|e| {
            RecraftError::protocol_with_source(
                format!("Malformed image response: {}", raw_body),
                e,
            )
        })?;

        match parsed.data.into_iter().next() {
            Some(image) => Ok(image.url),
            None => Err(RecraftError::api(format!(
                "No image generated for: {} {}",
                tag_name, raw_body
            ))),
        }
    }

    /// Fetches an icon URL for a tag, reporting failures to the host log.
    ///
    /// An empty tag name short-circuits to `None` without a network call.
    /// All errors are logged and collapsed into `None`; this method never
    /// fails from the caller's perspective.
    pub async fn fetch_tag_icon(&self, settings: &PluginSettings, tag_name: &str) -> Option<String> {
        if tag_name.is_empty() {
            return None;
        }

        log::debug(&format!("Fetching icon for {}...", tag_name));

        match self.generate(settings, tag_name).await {
            Ok(url) => {
                log::info(&format!("Got image URL for {}: {}", tag_name, url));
                Some(url)
            }
            Err(e) => {
                log::error(&format!("Error fetching image: {}", e));
                None
            }
        }
    }
}
