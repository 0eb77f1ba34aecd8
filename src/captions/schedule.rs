use crate::animation::interp::piecewise_linear;
use crate::foundation::core::{FrameContext, FrameIndex};

/// The caption chunk window a frame falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChunkWindow {
    /// Index of the active chunk.
    pub index: usize,
    /// First frame of the window.
    pub start: FrameIndex,
    /// Window length in frames, always >= 1.
    pub len_frames: u64,
}

impl ChunkWindow {
    /// Resolves which chunk is active at the context's frame.
    ///
    /// Windows tile the clip evenly: each chunk owns
    /// `max(1, total_frames / chunk_count)` frames, and any remainder frames
    /// at the tail stay on the final chunk (its envelope has faded out there,
    /// so the tail reads as a clean gap before the clip ends). `None` when
    /// there are no chunks.
    pub fn resolve(ctx: FrameContext, chunk_count: usize) -> Option<Self> {
        if chunk_count == 0 {
            return None;
        }

        let frames_per_chunk = (ctx.total_frames / chunk_count as u64).max(1);
        let index = ((ctx.frame.0 / frames_per_chunk) as usize).min(chunk_count - 1);
        Some(Self {
            index,
            start: FrameIndex(index as u64 * frames_per_chunk),
            len_frames: frames_per_chunk,
        })
    }
}

/// Per-frame caption state: which chunk to draw and how.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledCaption {
    /// Index of the chunk to draw.
    pub chunk_index: usize,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Upward slide offset in pixels; 10 at the window start, 0 once settled.
    pub translate_y: f64,
}

/// Schedules the caption for one frame.
///
/// Each chunk fades in over `min(0.3 * fps, 0.15 * window)` frames, holds at
/// full opacity, and fades back out over the same span, reaching exactly 0 at
/// both window edges. While fading in it also slides up from 10 px. Returns
/// `None` when `chunk_count` is 0 (no caption text).
pub fn schedule_caption(ctx: FrameContext, chunk_count: usize) -> Option<ScheduledCaption> {
    let window = ChunkWindow::resolve(ctx, chunk_count)?;

    let frame = ctx.frame.0 as f64;
    let start = window.start.0 as f64;
    let len = window.len_frames as f64;
    let fade = (0.3 * ctx.fps.as_f64()).min(0.15 * len);

    let opacity = piecewise_linear(
        frame,
        &[
            (start, 0.0),
            (start + fade, 1.0),
            (start + len - fade, 1.0),
            (start + len, 0.0),
        ],
    );
    let translate_y = piecewise_linear(frame, &[(start, 10.0), (start + fade, 0.0)]);

    Some(ScheduledCaption {
        chunk_index: window.index,
        opacity,
        translate_y,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/captions/schedule.rs"]
mod tests;
