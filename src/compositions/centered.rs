use crate::animation::interp::lerp;
use crate::animation::spring::SpringConfig;
use crate::audio::amplitude::AmplitudeFrame;
use crate::captions::chunker::CaptionChunks;
use crate::clip::request::{ClipRequest, LogoCorner};
use crate::compositions::{CaptionSlot, push_bars, push_caption};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{FrameContext, Point, Rect, Vec2};
use crate::registry::LayoutProfile;
use crate::scene::model::{Scene, SceneNode, Shadow, TextAlign, TextVAlign};

const TITLE_TOP: f64 = 80.0;
const TITLE_SLIDE: f64 = -50.0;
const CAPTION_INSET_BOTTOM: f64 = 80.0;
const BARS_WIDTH: f64 = 900.0;
const BARS_HEIGHT: f64 = 250.0;
const BARS_TOP_MARGIN: f64 = 40.0;
const LOGO_SIZE: f64 = 90.0;
const LOGO_INSET: f64 = 40.0;

/// Composes one frame of the centered-waveform layout.
///
/// Back to front: a soft full-canvas wash of the waveform color, the corner
/// logo, the title sliding down from above on a spring, the waveform row, and
/// the caption line at the bottom.
pub fn compose(
    request: &ClipRequest,
    profile: &LayoutProfile,
    ctx: FrameContext,
    chunks: &CaptionChunks,
    amps: Option<&AmplitudeFrame>,
) -> Scene {
    let width = f64::from(profile.canvas.width);
    let height = f64::from(profile.canvas.height);
    let center_x = width / 2.0;
    let colors = &request.colors;

    let mut scene = Scene::new(profile.canvas, colors.background);

    scene.push(SceneNode::Rect {
        bounds: Rect::new(0.0, 0.0, width, height),
        corner_radius: 0.0,
        fill: colors.waveform.with_alpha(0x15),
        opacity: 1.0,
        border: None,
        shadow: None,
    });

    if let Some(logo) = &request.logo_src {
        scene.push(SceneNode::Image {
            source: logo.clone(),
            bounds: logo_bounds(request.logo_position, width, height),
            corner_radius: LOGO_SIZE / 2.0,
            opacity: 1.0,
            border: None,
            shadow: None,
        });
    }

    if !request.title.is_empty() {
        let progress = SpringConfig::with_damping(20.0).sample(ctx);
        scene.push(SceneNode::Text {
            content: request.title.clone(),
            anchor: Point::new(center_x, TITLE_TOP + lerp(TITLE_SLIDE, 0.0, progress)),
            align: TextAlign::Center,
            valign: TextVAlign::Top,
            font_size: 48.0,
            font_weight: 800,
            color: colors.text,
            opacity: progress,
            max_width: None,
            shadow: Some(Shadow {
                offset: Vec2::new(0.0, 2.0),
                blur: 30.0,
                color: Rgba8::from_rgb(0, 0, 0).with_alpha(128),
            }),
        });
    }

    // The waveform row sits at the canvas center, nudged down by its top margin.
    let bars_top = (height - (BARS_HEIGHT + BARS_TOP_MARGIN)) / 2.0 + BARS_TOP_MARGIN;
    let region = Rect::new(
        center_x - BARS_WIDTH / 2.0,
        bars_top,
        center_x + BARS_WIDTH / 2.0,
        bars_top + BARS_HEIGHT,
    );
    push_bars(&mut scene.nodes, region, amps, colors.waveform);

    push_caption(
        &mut scene,
        ctx,
        chunks,
        colors.text,
        CaptionSlot {
            anchor: Point::new(center_x, height - CAPTION_INSET_BOTTOM),
            valign: TextVAlign::Bottom,
            font_size: 40.0,
            max_width: 900.0,
        },
    );

    scene
}

fn logo_bounds(corner: LogoCorner, width: f64, height: f64) -> Rect {
    let (x, y) = match corner {
        LogoCorner::TopLeft => (LOGO_INSET, LOGO_INSET),
        LogoCorner::TopRight => (width - LOGO_INSET - LOGO_SIZE, LOGO_INSET),
        LogoCorner::BottomLeft => (LOGO_INSET, height - LOGO_INSET - LOGO_SIZE),
        LogoCorner::BottomRight => (
            width - LOGO_INSET - LOGO_SIZE,
            height - LOGO_INSET - LOGO_SIZE,
        ),
    };
    Rect::new(x, y, x + LOGO_SIZE, y + LOGO_SIZE)
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/centered.rs"]
mod tests;
