//! librecraft - Recraft icon generation for Stash plugins
//!
//! librecraft implements the working half of the `stash-plugin-recraft-icons`
//! plugin: talking to the invoking Stash host (invocation envelope, settings
//! lookup, log sink) and to the Recraft image API (one generation request per
//! tag).
//!
//! # Quick Start
//!
//! ```no_run
//! use librecraft::{HostClient, IconClient, PluginInput, PLUGIN_ID};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = PluginInput::from_json(r#"{"server_connection": {"Scheme": "http", "Host": "localhost", "Port": 9999}, "args": {"mode": ["recraftTagIcon"], "tagName": "sunset"}}"#)?;
//!
//!     let host = HostClient::new(&input.server_connection)?;
//!     if let Some(settings) = host.find_plugin_settings(PLUGIN_ID).await? {
//!         let icons = IconClient::new()?;
//!         if let Some(url) = icons.fetch_tag_icon(&settings, "sunset").await {
//!             println!("{}", url);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`PluginInput`] / [`PluginOutput`] - the stdin/stdout envelope
//! - [`HostClient`] - settings lookup against the host's GraphQL endpoint
//! - [`PluginSettings`] - typed plugin configuration
//! - [`IconClient`] - the icon fetch itself
//! - [`log`] - the host's leveled log sink
//!
//! # Error Model
//!
//! Internal operations return [`Result`] with typed [`RecraftError`] values,
//! but the plugin surface never escalates them: the icon fetch logs failures
//! to the host and reports "no result", and the process always exits with a
//! single output envelope.

#![warn(clippy::all)]

/// Identifier this plugin's settings are stored under on the host.
pub const PLUGIN_ID: &str = "stash-plugin-recraft-icons";

/// Returns the librecraft crate version.
///
/// # Examples
///
/// ```
/// let version = librecraft::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use envelope::{PluginArgs, PluginInput, PluginOutput};
pub use error::{RecraftError, Result};
pub use host::{HostClient, ServerConnection, SessionCookie};
pub use icon::{GenerationRequest, IconClient};
pub use settings::PluginSettings;

pub mod envelope;
pub mod error;
pub mod host;
pub mod icon;
pub mod log;
pub mod settings;

// Shared HTTP plumbing, internal to the crate
mod client;
