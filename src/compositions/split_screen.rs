use crate::animation::interp::lerp;
use crate::animation::spring::SpringConfig;
use crate::audio::amplitude::AmplitudeFrame;
use crate::captions::chunker::CaptionChunks;
use crate::clip::request::ClipRequest;
use crate::compositions::{CaptionSlot, push_bars, push_caption};
use crate::foundation::core::{FrameContext, Point, Rect};
use crate::registry::LayoutProfile;
use crate::scene::model::{Border, Scene, SceneNode, Shadow, TextAlign, TextVAlign};

const PANEL_SLIDE: f64 = -540.0;
const PANEL_EDGE_WIDTH: f64 = 2.0;
const LOGO_SIZE: f64 = 350.0;
const TITLE_GAP: f64 = 40.0;
const BARS_WIDTH: f64 = 420.0;
const BARS_HEIGHT: f64 = 180.0;
const CAPTION_GAP: f64 = 40.0;

/// Composes one frame of the split-screen layout.
///
/// The left half is a tinted panel carrying the circular logo (or a
/// placeholder disc with a mic glyph); it slides in from offscreen on a
/// spring. The right half holds title, waveform and captions and is in place
/// from the first frame.
pub fn compose(
    request: &ClipRequest,
    profile: &LayoutProfile,
    ctx: FrameContext,
    chunks: &CaptionChunks,
    amps: Option<&AmplitudeFrame>,
) -> Scene {
    let width = f64::from(profile.canvas.width);
    let height = f64::from(profile.canvas.height);
    let panel_width = width / 2.0;
    let mid_y = height / 2.0;
    let colors = &request.colors;

    let mut scene = Scene::new(profile.canvas, colors.background);

    let slide = lerp(PANEL_SLIDE, 0.0, SpringConfig::with_damping(18.0).sample(ctx));

    scene.push(SceneNode::Rect {
        bounds: Rect::new(slide, 0.0, slide + panel_width, height),
        corner_radius: 0.0,
        fill: colors.accent.with_alpha(0x20),
        opacity: 1.0,
        border: None,
        shadow: None,
    });
    scene.push(SceneNode::Rect {
        bounds: Rect::new(
            slide + panel_width - PANEL_EDGE_WIDTH,
            0.0,
            slide + panel_width,
            height,
        ),
        corner_radius: 0.0,
        fill: colors.waveform.with_alpha(0x30),
        opacity: 1.0,
        border: None,
        shadow: None,
    });

    let logo_center = Point::new(slide + panel_width / 2.0, mid_y);
    let logo_bounds = Rect::new(
        logo_center.x - LOGO_SIZE / 2.0,
        logo_center.y - LOGO_SIZE / 2.0,
        logo_center.x + LOGO_SIZE / 2.0,
        logo_center.y + LOGO_SIZE / 2.0,
    );
    match &request.logo_src {
        Some(logo) => scene.push(SceneNode::Image {
            source: logo.clone(),
            bounds: logo_bounds,
            corner_radius: LOGO_SIZE / 2.0,
            opacity: 1.0,
            border: Some(Border {
                width: 4.0,
                color: colors.waveform.with_alpha(0x60),
            }),
            shadow: Some(Shadow::glow(60.0, colors.waveform.with_alpha(0x30))),
        }),
        None => {
            scene.push(SceneNode::Rect {
                bounds: logo_bounds,
                corner_radius: LOGO_SIZE / 2.0,
                fill: colors.waveform.with_alpha(0x40),
                opacity: 1.0,
                border: Some(Border {
                    width: 4.0,
                    color: colors.waveform.with_alpha(0x40),
                }),
                shadow: None,
            });
            scene.push(SceneNode::Text {
                content: "\u{1f399}\u{fe0f}".to_string(),
                anchor: logo_center,
                align: TextAlign::Center,
                valign: TextVAlign::Middle,
                font_size: 120.0,
                font_weight: 800,
                color: colors.text,
                opacity: 0.5,
                max_width: None,
                shadow: None,
            });
        }
    }

    // Right column: waveform row centered on the panel, title above, captions
    // below, all static.
    let right_x = width - panel_width / 2.0;
    let bars_region = Rect::new(
        right_x - BARS_WIDTH / 2.0,
        mid_y - BARS_HEIGHT / 2.0,
        right_x + BARS_WIDTH / 2.0,
        mid_y + BARS_HEIGHT / 2.0,
    );

    if !request.title.is_empty() {
        scene.push(SceneNode::Text {
            content: request.title.clone(),
            anchor: Point::new(right_x, bars_region.y0 - TITLE_GAP),
            align: TextAlign::Center,
            valign: TextVAlign::Bottom,
            font_size: 36.0,
            font_weight: 800,
            color: colors.text,
            opacity: 1.0,
            max_width: Some(panel_width - 80.0),
            shadow: None,
        });
    }

    push_bars(&mut scene.nodes, bars_region, amps, colors.waveform);

    push_caption(
        &mut scene,
        ctx,
        chunks,
        colors.text,
        CaptionSlot {
            anchor: Point::new(right_x, bars_region.y1 + CAPTION_GAP),
            valign: TextVAlign::Top,
            font_size: 32.0,
            max_width: 450.0,
        },
    );

    scene
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/split_screen.rs"]
mod tests;
