//! Task handlers for the plugin.
//!
//! The host selects work through the `mode` list in the input envelope; each
//! entry names a task. This plugin implements a single task, `recraftTagIcon`.
//!
//! Control flow mirrors the plugin contract: failures inside a task are
//! logged to the host and the run still completes with an "ok" envelope. The
//! only message the host sees in `output` besides "ok" is the
//! missing-configuration case.

use librecraft::{
    HostClient, IconClient, PLUGIN_ID, PluginInput, PluginOutput, PluginSettings, ServerConnection,
    log,
};


/// Name of the icon generation task in `args.mode`.
pub const TASK_TAG_ICON: &str = "recraftTagIcon";

/// Runs the tasks selected by the input envelope.
pub async fn run(input: &PluginInput) -> PluginOutput {
    if input.args.mode.is_empty() {
        return PluginOutput::ok("ok");
    }

    log::debug(&format!("--Starting {} Plugin --", PLUGIN_ID));

    if input.args.mode.iter().any(|mode| mode == TASK_TAG_ICON) {
        return run_tag_icon(input).await;
    }

    PluginOutput::ok("ok")
}

/// Handles the `recraftTagIcon` task.
async fn run_tag_icon(input: &PluginInput) -> PluginOutput {
    log::info(&format!("running {}", TASK_TAG_ICON));

    let tag_name = input.args.tag_name.as_deref().unwrap_or_default();

    if !tag_name.is_empty() {
        let Some(settings) = plugin_settings(&input.server_connection).await else {
            log::error("No plugin settings found");
            return PluginOutput::ok("No plugin settings found");
        };

        if let Some(url) = fetch_icon(&settings, tag_name).await {
            log::info(&format!(
                "{} = {}",
                TASK_TAG_ICON,
                serde_json::json!({ "url": url })
            ));
            return PluginOutput::ok("ok");
        }
    }

    log::info(&format!(
        "{} = {}",
        TASK_TAG_ICON,
        serde_json::json!({ "url": null })
    ));
    PluginOutput::ok("ok")
}

/// Looks up the plugin settings from the host.
///
/// `None` means the host has no configuration stored for this plugin. A
/// failed lookup is logged and treated as an empty settings bundle, so the
/// run proceeds and the remote service reports what is missing.
async fn plugin_settings(connection: &ServerConnection) -> Option<PluginSettings> {
    let host = match HostClient::new(connection) {
        Ok(host) => host,
        Err(e) => {
            log::error(&format!("Error getting plugin settings: {}", e));
            return Some(PluginSettings::default());
        }
    };

    match host.find_plugin_settings(PLUGIN_ID).await {
        Ok(found) => found,
        Err(e) => {
            log::error(&format!("Error getting plugin settings: {}", e));
            Some(PluginSettings::default())
        }
    }
}

/// Fetches the icon URL, collapsing client construction failures into the
/// same logged no-result outcome as a failed fetch.
async fn fetch_icon(settings: &PluginSettings, tag_name: &str) -> Option<String> {
    let client = match IconClient::new() {
        Ok(client) => client,
        Err(e) => {
            log::error(&format!("Error fetching image: {}", e));
            return None;
        }
    };

    client.fetch_tag_icon(settings, tag_name).await
}
