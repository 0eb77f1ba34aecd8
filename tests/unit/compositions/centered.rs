use super::*;
use crate::clip::request::{LayoutId, Palette};
use crate::foundation::core::{Fps, FrameIndex};
use crate::registry::profile_for;

fn request() -> ClipRequest {
    ClipRequest {
        audio_src: "clip.wav".to_string(),
        title: "Night Shift Radio".to_string(),
        caption_text: "alpha beta gamma delta epsilon zeta".to_string(),
        logo_src: None,
        logo_position: LogoCorner::TopRight,
        colors: Palette::default(),
        duration_in_seconds: 10.0,
        layout: LayoutId::CenteredWaveform,
    }
}

fn ctx(frame: u64) -> FrameContext {
    FrameContext::new(FrameIndex(frame), Fps::new(30, 1).unwrap(), 300).unwrap()
}

fn compose_at(frame: u64, request: &ClipRequest, amps: Option<&AmplitudeFrame>) -> Scene {
    let profile = profile_for(request.layout);
    let chunks = CaptionChunks::split(&request.caption_text, profile.words_per_chunk).unwrap();
    compose(request, &profile, ctx(frame), &chunks, amps)
}

fn title_node(scene: &Scene) -> Option<(f64, f64)> {
    scene.nodes.iter().find_map(|n| match n {
        SceneNode::Text {
            font_size,
            anchor,
            opacity,
            ..
        } if *font_size == 48.0 => Some((anchor.y, *opacity)),
        _ => None,
    })
}

fn bar_rects(scene: &Scene) -> Vec<&SceneNode> {
    scene
        .nodes
        .iter()
        .filter(|n| matches!(n, SceneNode::Rect { shadow: Some(_), .. }))
        .collect()
}

#[test]
fn frame_zero_is_washed_background_with_hidden_title() {
    let request = request();
    let scene = compose_at(0, &request, None);

    assert_eq!(scene.background, request.colors.background);
    match &scene.nodes[0] {
        SceneNode::Rect { bounds, fill, .. } => {
            assert_eq!(*bounds, Rect::new(0.0, 0.0, 1080.0, 1080.0));
            assert_eq!(*fill, request.colors.waveform.with_alpha(0x15));
        }
        other => panic!("expected wash rect first, got {other:?}"),
    }

    // Spring is at rest start: title fully transparent, slid 50px above its slot.
    let (y, opacity) = title_node(&scene).unwrap();
    assert_eq!(opacity, 0.0);
    assert_eq!(y, 30.0);
}

#[test]
fn title_settles_into_place_after_the_entrance() {
    let scene = compose_at(90, &request(), None);
    let (y, opacity) = title_node(&scene).unwrap();
    assert!((y - 80.0).abs() < 1e-3, "title y still {y}");
    assert!(opacity > 0.999);
}

#[test]
fn empty_title_emits_no_heading() {
    let mut request = request();
    request.title = String::new();
    let scene = compose_at(90, &request, None);
    assert!(title_node(&scene).is_none());
}

#[test]
fn logo_respects_requested_corner() {
    let mut request = request();
    request.logo_src = Some("logo.png".to_string());
    request.logo_position = LogoCorner::BottomLeft;

    let scene = compose_at(0, &request, None);
    let logo = scene
        .nodes
        .iter()
        .find_map(|n| match n {
            SceneNode::Image {
                source,
                bounds,
                corner_radius,
                ..
            } => Some((source.as_str(), *bounds, *corner_radius)),
            _ => None,
        })
        .unwrap();
    assert_eq!(logo.0, "logo.png");
    assert_eq!(logo.1, Rect::new(40.0, 950.0, 130.0, 1040.0));
    assert_eq!(logo.2, 45.0);
}

#[test]
fn no_logo_source_means_no_image_node() {
    let scene = compose_at(0, &request(), None);
    assert!(
        !scene
            .nodes
            .iter()
            .any(|n| matches!(n, SceneNode::Image { .. }))
    );
}

#[test]
fn logo_bounds_cover_all_four_corners() {
    assert_eq!(
        logo_bounds(LogoCorner::TopLeft, 1080.0, 1080.0),
        Rect::new(40.0, 40.0, 130.0, 130.0)
    );
    assert_eq!(
        logo_bounds(LogoCorner::TopRight, 1080.0, 1080.0),
        Rect::new(950.0, 40.0, 1040.0, 130.0)
    );
    assert_eq!(
        logo_bounds(LogoCorner::BottomLeft, 1080.0, 1080.0),
        Rect::new(40.0, 950.0, 130.0, 1040.0)
    );
    assert_eq!(
        logo_bounds(LogoCorner::BottomRight, 1080.0, 1080.0),
        Rect::new(950.0, 950.0, 1040.0, 1040.0)
    );
}

#[test]
fn bars_tile_the_center_row() {
    let request = request();
    let amps = AmplitudeFrame::new(vec![0.5; 40]);
    let scene = compose_at(60, &request, Some(&amps));

    let bars = bar_rects(&scene);
    assert_eq!(bars.len(), 40);

    // Row is 900x250 centered horizontally, nudged 40px below canvas center.
    let SceneNode::Rect {
        bounds,
        corner_radius,
        fill,
        ..
    } = bars[0]
    else {
        unreachable!()
    };
    assert!((bounds.x0 - 93.375).abs() < 1e-9);
    assert!((bounds.width() - 15.75).abs() < 1e-9);
    assert!((bounds.y0 - 503.75).abs() < 1e-9);
    assert!((corner_radius - bounds.width() / 2.0).abs() < 1e-9);
    assert_eq!(*fill, request.colors.waveform);

    for bar in &bars {
        let SceneNode::Rect { bounds, .. } = bar else {
            unreachable!()
        };
        assert!(bounds.x0 >= 90.0 - 1e-9 && bounds.x1 <= 990.0 + 1e-9);
        assert!(bounds.y0 >= 435.0 - 1e-9 && bounds.y1 <= 685.0 + 1e-9);
    }
}

#[test]
fn missing_amplitudes_draw_no_bars() {
    let scene = compose_at(60, &request(), None);
    assert!(bar_rects(&scene).is_empty());
    // Wash, title and caption only.
    assert_eq!(scene.nodes.len(), 3);
}

#[test]
fn caption_chunks_rotate_through_the_bottom_band() {
    let request = request();

    // Six words at five per chunk over 300 frames: two 150-frame windows.
    let scene = compose_at(75, &request, None);
    let caption = scene
        .nodes
        .iter()
        .find_map(|n| match n {
            SceneNode::Text {
                content,
                anchor,
                valign,
                font_size,
                opacity,
                max_width,
                ..
            } if *font_size == 40.0 => {
                Some((content.clone(), *anchor, *valign, *opacity, *max_width))
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(caption.0, "alpha beta gamma delta epsilon");
    assert_eq!(caption.1, Point::new(540.0, 1000.0));
    assert_eq!(caption.2, TextVAlign::Bottom);
    assert_eq!(caption.3, 1.0);
    assert_eq!(caption.4, Some(900.0));

    let scene = compose_at(225, &request, None);
    assert!(scene.nodes.iter().any(|n| matches!(
        n,
        SceneNode::Text { content, .. } if content == "zeta"
    )));
}
