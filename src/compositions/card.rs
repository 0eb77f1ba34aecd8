use crate::animation::interp::lerp;
use crate::animation::spring::SpringConfig;
use crate::audio::amplitude::AmplitudeFrame;
use crate::captions::chunker::CaptionChunks;
use crate::clip::request::ClipRequest;
use crate::compositions::{CaptionSlot, push_bars, push_caption};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{FrameContext, Point, Rect, Vec2};
use crate::registry::LayoutProfile;
use crate::scene::model::{Border, Scene, SceneNode, Shadow, TextAlign, TextVAlign, scale_about};

const GLOW_SIZE: f64 = 600.0;
const CARD_WIDTH: f64 = 650.0;
const CARD_HEIGHT: f64 = 545.0;
const CARD_RADIUS: f64 = 32.0;
const CARD_PAD_Y: f64 = 60.0;
const STACK_GAP: f64 = 30.0;
const AVATAR_SIZE: f64 = 140.0;
const TITLE_LINE_HEIGHT: f64 = 46.0;
const BADGE_WIDTH: f64 = 120.0;
const BADGE_HEIGHT: f64 = 29.0;
const BARS_WIDTH: f64 = 550.0;
const BARS_HEIGHT: f64 = 120.0;
const CAPTION_INSET_BOTTOM: f64 = 80.0;

/// Composes one frame of the podcast-card layout.
///
/// A frosted card holding avatar, title, live badge and waveform scales in
/// from 80% while fading up; the background glow disc and the caption band
/// sit outside the card and do not animate with it.
pub fn compose(
    request: &ClipRequest,
    profile: &LayoutProfile,
    ctx: FrameContext,
    chunks: &CaptionChunks,
    amps: Option<&AmplitudeFrame>,
) -> Scene {
    let width = f64::from(profile.canvas.width);
    let height = f64::from(profile.canvas.height);
    let center = Point::new(width / 2.0, height / 2.0);
    let colors = &request.colors;

    let mut scene = Scene::new(profile.canvas, colors.background);

    scene.push(SceneNode::Rect {
        bounds: Rect::new(
            center.x - GLOW_SIZE / 2.0,
            center.y - GLOW_SIZE / 2.0,
            center.x + GLOW_SIZE / 2.0,
            center.y + GLOW_SIZE / 2.0,
        ),
        corner_radius: GLOW_SIZE / 2.0,
        fill: colors.waveform.with_alpha(0x20),
        opacity: 1.0,
        border: None,
        shadow: Some(Shadow::glow(60.0, colors.waveform.with_alpha(0x20))),
    });

    let progress = SpringConfig {
        damping: 15.0,
        mass: 0.8,
        ..SpringConfig::default()
    }
    .sample(ctx);
    let scale = lerp(0.8, 1.0, progress);

    // Card content laid out at rest, then every node scaled about the canvas
    // center and faded by the spring progress.
    let mut card_nodes: Vec<SceneNode> = Vec::new();

    let card = Rect::new(
        center.x - CARD_WIDTH / 2.0,
        center.y - CARD_HEIGHT / 2.0,
        center.x + CARD_WIDTH / 2.0,
        center.y + CARD_HEIGHT / 2.0,
    );
    card_nodes.push(SceneNode::Rect {
        bounds: card,
        corner_radius: CARD_RADIUS,
        fill: Rgba8::from_rgb(0xff, 0xff, 0xff).with_alpha(0x12),
        opacity: 1.0,
        border: Some(Border {
            width: 1.0,
            color: Rgba8::from_rgb(0xff, 0xff, 0xff).with_alpha(0x1a),
        }),
        shadow: Some(Shadow {
            offset: Vec2::new(0.0, 20.0),
            blur: 60.0,
            color: Rgba8::from_rgb(0, 0, 0).with_alpha(0x80),
        }),
    });

    // Fixed vertical stack: padding, avatar, title, badge, waveform.
    let mut cursor = card.y0 + CARD_PAD_Y;

    let avatar = Rect::new(
        center.x - AVATAR_SIZE / 2.0,
        cursor,
        center.x + AVATAR_SIZE / 2.0,
        cursor + AVATAR_SIZE,
    );
    match &request.logo_src {
        Some(logo) => card_nodes.push(SceneNode::Image {
            source: logo.clone(),
            bounds: avatar,
            corner_radius: AVATAR_SIZE / 2.0,
            opacity: 1.0,
            border: Some(Border {
                width: 4.0,
                color: colors.waveform.with_alpha(0x60),
            }),
            shadow: Some(Shadow::glow(30.0, colors.waveform.with_alpha(0x20))),
        }),
        None => {
            card_nodes.push(SceneNode::Rect {
                bounds: avatar,
                corner_radius: AVATAR_SIZE / 2.0,
                fill: colors.waveform.with_alpha(0x50),
                opacity: 1.0,
                border: Some(Border {
                    width: 4.0,
                    color: colors.waveform.with_alpha(0x40),
                }),
                shadow: None,
            });
            card_nodes.push(SceneNode::Text {
                content: "\u{1f399}\u{fe0f}".to_string(),
                anchor: Point::new(center.x, cursor + AVATAR_SIZE / 2.0),
                align: TextAlign::Center,
                valign: TextVAlign::Middle,
                font_size: 60.0,
                font_weight: 400,
                color: colors.text,
                opacity: 1.0,
                max_width: None,
                shadow: None,
            });
        }
    }
    cursor += AVATAR_SIZE + STACK_GAP;

    if !request.title.is_empty() {
        card_nodes.push(SceneNode::Text {
            content: request.title.clone(),
            anchor: Point::new(center.x, cursor),
            align: TextAlign::Center,
            valign: TextVAlign::Top,
            font_size: 38.0,
            font_weight: 800,
            color: colors.text,
            opacity: 1.0,
            max_width: Some(CARD_WIDTH - 100.0),
            shadow: None,
        });
    }
    cursor += TITLE_LINE_HEIGHT + STACK_GAP;

    card_nodes.push(SceneNode::Rect {
        bounds: Rect::new(
            center.x - BADGE_WIDTH / 2.0,
            cursor,
            center.x + BADGE_WIDTH / 2.0,
            cursor + BADGE_HEIGHT,
        ),
        corner_radius: 20.0,
        fill: colors.waveform.with_alpha(0x20),
        opacity: 1.0,
        border: Some(Border {
            width: 1.0,
            color: colors.waveform.with_alpha(0x30),
        }),
        shadow: None,
    });
    card_nodes.push(SceneNode::Text {
        content: "\u{1f534} LIVE".to_string(),
        anchor: Point::new(center.x, cursor + BADGE_HEIGHT / 2.0),
        align: TextAlign::Center,
        valign: TextVAlign::Middle,
        font_size: 14.0,
        font_weight: 600,
        color: colors.waveform,
        opacity: 1.0,
        max_width: None,
        shadow: None,
    });
    cursor += BADGE_HEIGHT + STACK_GAP;

    let bars_region = Rect::new(
        center.x - BARS_WIDTH / 2.0,
        cursor,
        center.x + BARS_WIDTH / 2.0,
        cursor + BARS_HEIGHT,
    );
    push_bars(&mut card_nodes, bars_region, amps, colors.waveform);

    for node in card_nodes {
        scene.push(scale_node(node, center, scale, progress));
    }

    push_caption(
        &mut scene,
        ctx,
        chunks,
        colors.text,
        CaptionSlot {
            anchor: Point::new(center.x, height - CAPTION_INSET_BOTTOM),
            valign: TextVAlign::Bottom,
            font_size: 38.0,
            max_width: 900.0,
        },
    );

    scene
}

/// Scales a node about `center` and folds `opacity_mul` into its opacity.
///
/// Geometry, corner radii, font sizes, border widths and shadow extents all
/// scale together so the node reads as one rigid element shrinking in place.
fn scale_node(node: SceneNode, center: Point, factor: f64, opacity_mul: f64) -> SceneNode {
    let scale_shadow = |shadow: Option<Shadow>| {
        shadow.map(|s| Shadow {
            offset: s.offset * factor,
            blur: s.blur * factor,
            color: s.color,
        })
    };
    let scale_border = |border: Option<Border>| {
        border.map(|b| Border {
            width: b.width * factor,
            color: b.color,
        })
    };
    match node {
        SceneNode::Rect {
            bounds,
            corner_radius,
            fill,
            opacity,
            border,
            shadow,
        } => SceneNode::Rect {
            bounds: scale_about(bounds, center, factor),
            corner_radius: corner_radius * factor,
            fill,
            opacity: opacity * opacity_mul,
            border: scale_border(border),
            shadow: scale_shadow(shadow),
        },
        SceneNode::Text {
            content,
            anchor,
            align,
            valign,
            font_size,
            font_weight,
            color,
            opacity,
            max_width,
            shadow,
        } => SceneNode::Text {
            content,
            anchor: center + (anchor - center) * factor,
            align,
            valign,
            font_size: font_size * factor,
            font_weight,
            color,
            opacity: opacity * opacity_mul,
            max_width: max_width.map(|w| w * factor),
            shadow: scale_shadow(shadow),
        },
        SceneNode::Image {
            source,
            bounds,
            corner_radius,
            opacity,
            border,
            shadow,
        } => SceneNode::Image {
            source,
            bounds: scale_about(bounds, center, factor),
            corner_radius: corner_radius * factor,
            opacity: opacity * opacity_mul,
            border: scale_border(border),
            shadow: scale_shadow(shadow),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/card.rs"]
mod tests;
