use super::*;

fn service_body() -> RenderClipRequest {
    serde_json::from_str(
        r#"{
            "audio_path": "downloads/space_abc.mp3",
            "start_time": 12.0,
            "end_time": 47.5,
            "layout": "split_screen",
            "caption_text": "so what we found was surprising"
        }"#,
    )
    .unwrap()
}

#[test]
fn service_defaults_apply_on_deserialize() {
    let wire: RenderClipRequest = serde_json::from_str(
        r#"{"audio_path": "a.mp3", "start_time": 0, "end_time": 30}"#,
    )
    .unwrap();
    assert_eq!(wire.layout, "centered_waveform");
    assert_eq!(wire.title, "Space2Thread");
    assert_eq!(wire.logo_position, "top-right");
    assert_eq!(wire.colors, None);
}

#[test]
fn slice_range_becomes_duration() {
    let request = service_body().into_clip_request().unwrap();
    assert_eq!(request.duration_in_seconds, 35.5);
    assert_eq!(request.layout, LayoutId::SplitScreen);
    assert_eq!(request.audio_src, "downloads/space_abc.mp3");
    assert_eq!(request.colors, Palette::default());
}

#[test]
fn inverted_or_empty_ranges_are_rejected() {
    let mut wire = service_body();
    wire.end_time = wire.start_time;
    assert!(wire.clone().into_clip_request().is_err());
    wire.end_time = wire.start_time - 5.0;
    assert!(wire.into_clip_request().is_err());
}

#[test]
fn negative_start_is_rejected() {
    let mut wire = service_body();
    wire.start_time = -1.0;
    assert!(wire.into_clip_request().is_err());
}

#[test]
fn unknown_layout_fails_instead_of_falling_back() {
    let mut wire = service_body();
    wire.layout = "story_vertical".to_string();
    let err = wire.into_clip_request().unwrap_err();
    assert!(err.to_string().contains("unknown layout"));
}

#[test]
fn bad_corner_name_fails_conversion() {
    let mut wire = service_body();
    wire.logo_position = "center".to_string();
    assert!(wire.into_clip_request().is_err());
}

#[test]
fn palette_override_survives_conversion() {
    let mut wire = service_body();
    wire.colors = Some(Palette {
        waveform: "#22c55e".parse().unwrap(),
        ..Palette::default()
    });
    let request = wire.into_clip_request().unwrap();
    assert_eq!(request.colors.waveform.to_hex_string(), "#22c55e");
}
