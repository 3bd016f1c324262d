//! Host (Stash) connection and configuration lookup.
//!
//! When the host invokes a plugin it passes connection details for its own
//! GraphQL endpoint in the input envelope. This module models those details
//! and provides [`HostClient`], which fetches the stored plugin settings via
//! the `configuration { plugins }` query.
//!
//! The host protocol itself (invocation envelope, settings storage, log sink)
//! is a fixed external interface; only the client side lives here.

use crate::client::{build_http_client, check_response_status, translate_reqwest_error};
use crate::error::{RecraftError, Result};
use crate::settings::PluginSettings;
use reqwest::header::COOKIE;
use serde::Deserialize;
use std::collections::HashMap;


/// GraphQL query returning the per-plugin settings maps.
const CONFIGURATION_QUERY: &str = "query Configuration { configuration { plugins } }";

/// Session cookie forwarded back to the host for authentication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCookie {
    /// Cookie name (typically "session").
    pub name: String,
    /// Cookie value.
    #[serde(default)]
    pub value: String,
}

/// Connection details for the invoking host, as sent in the input envelope.
///
/// The host serializes these keys in PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerConnection {
    /// URL scheme of the host endpoint ("http" or "https").
    pub scheme: String,
    /// Host address. May be a wildcard bind address; see [`Self::graphql_url`].
    #[serde(default = "default_host")]
    pub host: String,
    /// Port of the host endpoint.
    pub port: u16,
    /// Session cookie to authenticate with, if the host requires one.
    #[serde(default)]
    pub session_cookie: Option<SessionCookie>,
    /// Host working directory.
    #[serde(default)]
    pub dir: String,
    /// Directory the plugin was loaded from.
    #[serde(default)]
    pub plugin_dir: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

impl ServerConnection {
    /// Returns the URL of the host's GraphQL endpoint.
    ///
    /// A wildcard bind address (`0.0.0.0`) is not routable from a client, so
    /// it is rewritten to `localhost` — the plugin always runs on the same
    /// machine as the host.
    pub fn graphql_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("{}://{}:{}/graphql", self.scheme, host, self.port)
    }
}

/// Shape of the `configuration { plugins }` GraphQL response.
#[derive(Debug, Deserialize)]
struct ConfigurationResponse {
    #[serde(default)]
    data: Option<ConfigurationData>,
}

#[derive(Debug, Deserialize)]
struct ConfigurationData {
    #[serde(default)]
    configuration: Option<Configuration>,
}

#[derive(Debug, Deserialize)]
struct Configuration {
    /// Map of plugin id to that plugin's settings map.
    #[serde(default)]
    plugins: Option<HashMap<String, serde_json::Value>>,
}

/// Client for the invoking host's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HostClient {
    /// The underlying HTTP client
    http_client: reqwest::Client,
    /// Resolved GraphQL endpoint URL
    graphql_url: String,
    /// Session cookie to send with every request, if any
    session_cookie: Option<SessionCookie>,
}

impl HostClient {
    /// Creates a client for the host described by a [`ServerConnection`].
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::host::{HostClient, ServerConnection};
    ///
    /// let connection = ServerConnection {
    ///     scheme: "http".to_string(),
    ///     host: "localhost".to_string(),
    ///     port: 9999,
    ///     session_cookie: None,
    ///     dir: String::new(),
    ///     plugin_dir: String::new(),
    /// };
    /// let client = HostClient::new(&connection).unwrap();
    /// assert_eq!(client.graphql_url(), "http://localhost:9999/graphql");
    /// ```
    pub fn new(connection: &ServerConnection) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client()?,
            graphql_url: connection.graphql_url(),
            session_cookie: connection.session_cookie.clone(),
        })
    }

    /// Returns the resolved GraphQL endpoint URL.
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Fetches the settings map stored for `plugin_id`.
    ///
    /// Returns `Ok(None)` when the host has no configuration stored under
    /// that id (the plugin is installed but never configured).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The host is unreachable
    /// - The host rejects the session cookie
    /// - The response cannot be parsed as valid JSON
    pub async fn find_plugin_settings(&self, plugin_id: &str) -> Result<Option<PluginSettings>> {
        let body = serde_json::json!({ "query": CONFIGURATION_QUERY });

        let mut request = self.http_client.post(&self.graphql_url).json(&body);

        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, format!("{}={}", cookie.name, cookie.value));
        }

        let response = request
            .send()
            .await
            .map_err(|e| translate_reqwest_error(e, &self.graphql_url))?;

        let response = check_response_status(response).await?;

        let configuration: ConfigurationResponse = response.json().await.map_err(|e| {
            RecraftError::protocol_with_source("Failed to parse configuration response", e)
        })?;

        let Some(value) = configuration
            .data
            .and_then(|d| d.configuration)
            .and_then(|c| c.plugins)
            .and_then(|mut plugins| plugins.remove(plugin_id))
        else {
            return Ok(None);
        };

        let settings = serde_json::from_value(value).map_err(|e| {
            RecraftError::protocol_with_source(
                format!("Unusable settings stored for {}", plugin_id),
                e,
            )
        })?;

        Ok(Some(settings))
    }
}
