use super::*;

#[test]
fn test_settings_deserialize_full_map() {
    let settings: PluginSettings = serde_json::from_str(
        r#"{
            "recraftApiKey": "key-123",
            "recraftApiUrl": "https://external.api.recraft.ai/v1/images/generations",
            "recraftTagIconSize": 256,
            "recraftTagIconStyleId": "style-abc",
            "recraftTagIconStyle": "icon",
            "recraftTagIconSubStyle": "broken_line"
        }"#,
    )
    .unwrap();

    assert_eq!(settings.api_key.as_deref(), Some("key-123"));
    assert_eq!(settings.icon_size, Some(256));
    assert_eq!(settings.style_id.as_deref(), Some("style-abc"));
    assert_eq!(settings.style.as_deref(), Some("icon"));
    assert_eq!(settings.sub_style.as_deref(), Some("broken_line"));
}

#[test]
fn test_settings_deserialize_empty_map() {
    let settings: PluginSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, PluginSettings::default());
}

#[test]
fn test_settings_deserialize_partial_map() {
    let settings: PluginSettings = serde_json::from_str(
        r#"{"recraftApiKey": "key-123", "recraftTagIconSize": 128}"#,
    )
    .unwrap();

    assert_eq!(settings.api_key.as_deref(), Some("key-123"));
    assert_eq!(settings.icon_size, Some(128));
    assert!(settings.api_url.is_none());
    assert!(settings.style_id.is_none());
}

#[test]
fn test_settings_ignore_unknown_keys() {
    // The host may store settings for other features in the same map.
    let settings: PluginSettings = serde_json::from_str(
        r#"{"recraftApiKey": "key-123", "someFutureSetting": true}"#,
    )
    .unwrap();

    assert_eq!(settings.api_key.as_deref(), Some("key-123"));
}
