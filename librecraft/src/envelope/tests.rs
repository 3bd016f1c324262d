use super::*;

#[test]
fn test_input_parses_mode_list_and_tag_name() {
    let input = PluginInput::from_json(
        r#"{
            "server_connection": {"Scheme": "http", "Host": "localhost", "Port": 9999},
            "args": {"mode": ["recraftTagIcon"], "tagName": "sunset"}
        }"#,
    )
    .unwrap();

    assert_eq!(input.args.mode, vec!["recraftTagIcon"]);
    assert_eq!(input.args.tag_name.as_deref(), Some("sunset"));
    assert_eq!(input.server_connection.port, 9999);
}

#[test]
fn test_input_parses_mode_as_bare_string() {
    let input = PluginInput::from_json(
        r#"{
            "server_connection": {"Scheme": "http", "Host": "localhost", "Port": 9999},
            "args": {"mode": "recraftTagIcon"}
        }"#,
    )
    .unwrap();

    assert_eq!(input.args.mode, vec!["recraftTagIcon"]);
    assert!(input.args.tag_name.is_none());
}

#[test]
fn test_input_without_args() {
    let input = PluginInput::from_json(
        r#"{"server_connection": {"Scheme": "http", "Host": "localhost", "Port": 9999}}"#,
    )
    .unwrap();

    assert!(input.args.mode.is_empty());
    assert!(input.args.tag_name.is_none());
}

#[test]
fn test_input_ignores_extra_args() {
    let input = PluginInput::from_json(
        r#"{
            "server_connection": {"Scheme": "http", "Host": "localhost", "Port": 9999},
            "args": {"mode": ["recraftTagIcon"], "tagName": "sunset", "hookContext": {"type": "Tag.Create.Post"}}
        }"#,
    )
    .unwrap();

    assert_eq!(input.args.tag_name.as_deref(), Some("sunset"));
}

#[test]
fn test_input_invalid_json_is_protocol_error() {
    let err = PluginInput::from_json("not an envelope").unwrap_err();
    assert!(matches!(err, RecraftError::Protocol { .. }));
}

#[test]
fn test_output_ok_serializes_without_error_field() {
    let line = PluginOutput::ok("ok").to_json_line();
    assert_eq!(line, r#"{"output":"ok"}"#);
}

#[test]
fn test_output_with_error_serializes_both_fields() {
    let line = PluginOutput::ok("plugin ended")
        .with_error("something went wrong")
        .to_json_line();
    assert_eq!(
        line,
        r#"{"output":"plugin ended","error":"something went wrong"}"#
    );
}

#[test]
fn test_output_error_only() {
    let line = PluginOutput::error("bad envelope").to_json_line();
    assert_eq!(line, r#"{"error":"bad envelope"}"#);
}

#[test]
fn test_output_is_single_line() {
    let line = PluginOutput::ok("multi\nline").to_json_line();
    // serde_json escapes the newline, so the envelope stays on one line.
    assert!(!line.contains('\n'));
}
