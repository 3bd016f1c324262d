//! Host invocation envelope.
//!
//! The host hands a plugin exactly one JSON object on stdin and expects
//! exactly one JSON object back on stdout. This module models both sides of
//! that exchange.

use crate::error::{RecraftError, Result};
use crate::host::ServerConnection;
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
mod tests;

/// Input envelope read from stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginInput {
    /// Connection details for calling back into the host.
    pub server_connection: ServerConnection,
    /// Task arguments configured by the host.
    #[serde(default)]
    pub args: PluginArgs,
}

/// Task arguments inside the input envelope.
///
/// Unknown keys are ignored; the host is free to pass extra arguments the
/// plugin does not care about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PluginArgs {
    /// Operation selector. A task runs when its name appears here.
    #[serde(default, deserialize_with = "string_or_list")]
    pub mode: Vec<String>,
    /// Name of the tag to generate an icon for.
    #[serde(default, rename = "tagName")]
    pub tag_name: Option<String>,
}

/// Deserializes `mode` from either a bare string or a list of strings.
///
/// Task wiring on the host side produces both shapes.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mode {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Mode>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Mode::One(mode)) => vec![mode],
        Some(Mode::Many(modes)) => modes,
    })
}

impl PluginInput {
    /// Parses an input envelope from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if the input is not a valid envelope.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| RecraftError::protocol_with_source("Failed to parse input envelope", e))
    }
}

/// Output envelope written to stdout.
///
/// `output` carries the human-readable completion message; `error` is added
/// when the invocation also failed in a way the host should surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PluginOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PluginOutput {
    /// Creates a success envelope with the given completion message.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::envelope::PluginOutput;
    ///
    /// let out = PluginOutput::ok("ok");
    /// assert_eq!(out.to_json_line(), "{\"output\":\"ok\"}");
    /// ```
    pub fn ok<S: Into<String>>(message: S) -> Self {
        Self {
            output: Some(message.into()),
            ..Default::default()
        }
    }

    /// Creates an envelope carrying an error message.
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Adds an error message to an existing envelope.
    pub fn with_error<S: Into<String>>(mut self, message: S) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Serializes the envelope to the single line the host expects.
    ///
    /// Serialization of this shape cannot fail; the fallback keeps the
    /// one-line contract even if it somehow does.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}
