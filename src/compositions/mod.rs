//! The three layout compositions.
//!
//! Each layout is a pure function `(request, profile, ctx, chunks, amps) ->
//! Scene` with no cross-frame state; entrance motion is recomputed from the
//! frame index every call, which is what keeps frames composable in parallel
//! and in any order.

use crate::audio::amplitude::AmplitudeFrame;
use crate::captions::chunker::CaptionChunks;
use crate::captions::schedule::schedule_caption;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{FrameContext, Point, Rect, Vec2};
use crate::scene::model::{Scene, SceneNode, Shadow, TextAlign, TextVAlign};
use crate::waveform::bars::{BarStyle, render_bars};

/// Card layout: floating panel with avatar, title and live badge.
pub mod card;
/// Centered layout: title top, large waveform, captions bottom.
pub mod centered;
/// Split-screen layout: logo panel left, waveform column right.
pub mod split_screen;

/// Where a layout puts its caption line.
struct CaptionSlot {
    anchor: Point,
    valign: TextVAlign,
    font_size: f64,
    max_width: f64,
}

/// Appends the scheduled caption chunk, if any, with its fade and slide.
fn push_caption(scene: &mut Scene, ctx: FrameContext, chunks: &CaptionChunks, color: Rgba8, slot: CaptionSlot) {
    let Some(cue) = schedule_caption(ctx, chunks.len()) else {
        return;
    };
    let Some(text) = chunks.get(cue.chunk_index) else {
        return;
    };

    scene.push(SceneNode::Text {
        content: text.to_string(),
        anchor: Point::new(slot.anchor.x, slot.anchor.y + cue.translate_y),
        align: TextAlign::Center,
        valign: slot.valign,
        font_size: slot.font_size,
        font_weight: 700,
        color,
        opacity: cue.opacity,
        max_width: Some(slot.max_width),
        shadow: Some(Shadow {
            offset: Vec2::new(0.0, 2.0),
            blur: 20.0,
            color: Rgba8::from_rgb(0, 0, 0).with_alpha(204),
        }),
    });
}

/// Appends one rect per waveform bar; absent amplitudes draw nothing.
fn push_bars(nodes: &mut Vec<SceneNode>, region: Rect, amps: Option<&AmplitudeFrame>, color: Rgba8) {
    let Some(amps) = amps else {
        return;
    };
    for bar in render_bars(region, amps, color, BarStyle::Rounded) {
        nodes.push(SceneNode::Rect {
            bounds: bar.bounds,
            corner_radius: bar.corner_radius,
            fill: bar.color,
            opacity: bar.opacity,
            border: None,
            shadow: Some(Shadow::glow(bar.glow_radius, bar.glow_color)),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/helpers.rs"]
mod tests;
