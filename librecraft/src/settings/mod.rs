//! Typed plugin settings.
//!
//! The host stores plugin configuration as a free-form map of setting name to
//! value. This module gives that map a concrete shape once, at the host
//! boundary, so the rest of the plugin works with explicitly optional fields
//! instead of a duck-typed dictionary.
//!
//! No local validation is performed on the values: absent or empty settings
//! flow into the image request as-is and the remote service rejects what it
//! cannot use.

use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Settings for the Recraft icon plugin, as stored by the host.
///
/// All fields are optional; the host only stores what the user has filled in.
/// `style_id` takes priority over `style`/`sub_style` when building a request
/// (see [`crate::icon::GenerationRequest`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Recraft API key, sent as a bearer token.
    #[serde(rename = "recraftApiKey")]
    pub api_key: Option<String>,
    /// Full URL of the image generation endpoint.
    #[serde(rename = "recraftApiUrl")]
    pub api_url: Option<String>,
    /// Icon edge length in pixels; rendered as `"{size}x{size}"`.
    #[serde(rename = "recraftTagIconSize")]
    pub icon_size: Option<u64>,
    /// Identifier of a user-created style; overrides `style`/`sub_style`.
    #[serde(rename = "recraftTagIconStyleId")]
    pub style_id: Option<String>,
    /// Named built-in style.
    #[serde(rename = "recraftTagIconStyle")]
    pub style: Option<String>,
    /// Sub-style refining `style`.
    #[serde(rename = "recraftTagIconSubStyle")]
    pub sub_style: Option<String>,
}
