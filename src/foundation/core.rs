use crate::foundation::error::{ClipError, ClipResult};

pub use kurbo::{Point, Rect, Vec2};

/// Zero-based index of a frame within a clip.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frames-per-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Builds a rate, rejecting zero numerators and denominators.
    pub fn new(num: u32, den: u32) -> ClipResult<Self> {
        if den == 0 {
            return Err(ClipError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ClipError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// The rate as a float, e.g. 30.0.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Converts a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Everything a composition needs to know about "when" it is being evaluated.
///
/// A context is only constructible for frames inside the clip, so compositions
/// can assume `frame < total_frames`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameContext {
    /// The frame being composed.
    pub frame: FrameIndex,
    /// Output frame rate.
    pub fps: Fps,
    /// Total number of frames in the clip, always >= 1.
    pub total_frames: u64,
}

impl FrameContext {
    /// Builds a context, rejecting out-of-bounds frames.
    pub fn new(frame: FrameIndex, fps: Fps, total_frames: u64) -> ClipResult<Self> {
        if total_frames == 0 {
            return Err(ClipError::validation("total_frames must be >= 1"));
        }
        if frame.0 >= total_frames {
            return Err(ClipError::evaluation(format!(
                "frame {} is out of bounds for clip of {} frames",
                frame.0, total_frames
            )));
        }
        Ok(Self {
            frame,
            fps,
            total_frames,
        })
    }

    /// Seconds elapsed at this frame.
    pub fn secs(self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }
}
