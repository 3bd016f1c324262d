use std::io::Read;

use librecraft::{PLUGIN_ID, PluginInput, PluginOutput, log};

mod tasks;

#[tokio::main]
async fn main() {
    let mut raw_input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw_input) {
        exit_plugin(
            PluginOutput::ok(default_message())
                .with_error(format!("Failed to read input envelope: {}", e)),
        );
    }

    let input = match PluginInput::from_json(&raw_input) {
        Ok(input) => input,
        Err(e) => {
            exit_plugin(PluginOutput::ok(default_message()).with_error(e.to_string()));
        }
    };

    let output = tasks::run(&input).await;
    exit_plugin(output);
}

/// Default completion message when a run has nothing more specific to say.
fn default_message() -> String {
    format!("{} plugin ended", PLUGIN_ID)
}

/// Reports the output envelope to the host and terminates.
///
/// The messages are mirrored into the host log, then the envelope is printed
/// as the single stdout line the host expects. The process always exits
/// cleanly; failures were already logged where they happened.
fn exit_plugin(output: PluginOutput) -> ! {
    if let Some(message) = &output.output {
        log::debug(message);
    }
    if let Some(message) = &output.error {
        log::error(message);
    }
    println!("{}", output.to_json_line());
    std::process::exit(0);
}
