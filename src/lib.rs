//! Audiogram is a deterministic scene composition engine for social audio clips.
//!
//! Given a validated clip request (audio slice, title, caption text, palette,
//! layout choice), Audiogram computes for every output frame a flat, serializable
//! [`Scene`]: rectangles, text runs and image placements in paint order. An
//! external rasterizer/encoder turns scenes into pixels; this crate never touches
//! pixel buffers.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `ClipRequest::validate` rejects malformed input up front
//! 2. **Prepare**: `RenderSession` splits caption text into chunks and fixes the
//!    frame count from the layout profile (`frames_for_duration`)
//! 3. **Compose**: `RenderSession::compose(frame, amplitudes) -> Scene`, pure per
//!    frame (captions scheduled, waveform bars laid out, entrance curves sampled)
//! 4. **Emit**: `compose_frames` walks all frames (sequentially or via rayon) and
//!    hands each scene to a sink, e.g. the JSONL writer used by the CLI
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: composing the same frame twice yields equal
//!   scenes; parallel and sequential runs produce identical output.
//! - **No IO during composition**: audio amplitudes are front-loaded behind
//!   [`AmplitudeSource`]; a source that is not ready yet simply hides the bars.
//! - **Straight-alpha RGBA8** throughout: scenes carry colors as the rasterizer
//!   expects them on the wire, not premultiplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod captions;
mod clip;
mod compositions;
mod foundation;
mod registry;
mod render;
mod scene;
mod waveform;

pub use animation::interp::{lerp, piecewise_linear};
pub use animation::spring::SpringConfig;
pub use audio::amplitude::{
    AmplitudeFrame, AmplitudeSource, PeakWindowAmplitudes, SilentAmplitudes, StaticAmplitudes,
};
pub use captions::chunker::CaptionChunks;
pub use captions::schedule::{ChunkWindow, ScheduledCaption, schedule_caption};
pub use clip::request::{ClipRequest, LayoutId, LogoCorner, Palette};
pub use clip::wire::RenderClipRequest;
pub use compositions::{card, centered, split_screen};
pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Fps, FrameContext, FrameIndex, Point, Rect, Vec2};
pub use foundation::error::{ClipError, ClipResult};
pub use registry::{LayoutProfile, frames_for_duration, profile_for};
pub use render::pipeline::{
    ComposeStats, RenderThreading, compose_frames, compose_frames_with_stats, write_scenes_jsonl,
};
pub use render::session::RenderSession;
pub use scene::model::{Border, Scene, SceneNode, Shadow, TextAlign, TextVAlign, scale_about};
pub use waveform::bars::{BarGeometry, BarStyle, render_bars};
