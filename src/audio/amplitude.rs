use crate::foundation::core::FrameContext;
use crate::foundation::error::{ClipError, ClipResult};

/// Normalized per-bar amplitudes for one frame.
///
/// Samples are clamped into `[0, 1]` at construction (non-finite values
/// become 0), so consumers never have to re-validate them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmplitudeFrame {
    samples: Vec<f64>,
}

impl AmplitudeFrame {
    /// Builds a frame, clamping every sample into `[0, 1]`.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| if s.is_finite() { s.clamp(0.0, 1.0) } else { 0.0 })
            .collect();
        Self { samples }
    }

    /// A frame of `len` silent bars.
    pub fn silent(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// The clamped samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the frame holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Per-frame amplitude provider for waveform rendering.
///
/// Audio decoding and analysis happen outside this crate; compositions only
/// ever see this seam. Returning `None` means the source is not ready yet
/// (still decoding, file missing), and the waveform is simply omitted from
/// that frame, mirroring a player that draws bars once audio data arrives.
pub trait AmplitudeSource: Send + Sync {
    /// Amplitudes for `bar_count` bars at the context's frame.
    fn sample(&self, ctx: FrameContext, bar_count: usize) -> Option<AmplitudeFrame>;
}

/// Source that is always silent. Useful for previews without audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAmplitudes;

impl AmplitudeSource for SilentAmplitudes {
    fn sample(&self, _ctx: FrameContext, bar_count: usize) -> Option<AmplitudeFrame> {
        Some(AmplitudeFrame::silent(bar_count))
    }
}

/// Source that plays the same amplitudes on every frame.
///
/// The stored samples are resampled (nearest index) to whatever bar count a
/// layout asks for. No samples behaves like silence.
#[derive(Clone, Debug)]
pub struct StaticAmplitudes {
    samples: Vec<f64>,
}

impl StaticAmplitudes {
    /// Builds the source from raw samples, clamping them into `[0, 1]`.
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples: AmplitudeFrame::new(samples).samples,
        }
    }
}

impl AmplitudeSource for StaticAmplitudes {
    fn sample(&self, _ctx: FrameContext, bar_count: usize) -> Option<AmplitudeFrame> {
        if self.samples.is_empty() {
            return Some(AmplitudeFrame::silent(bar_count));
        }
        let samples = (0..bar_count)
            .map(|i| self.samples[i * self.samples.len() / bar_count.max(1)])
            .collect();
        Some(AmplitudeFrame { samples })
    }
}

/// Source backed by peaks pre-extracted from the clip's audio.
///
/// `peaks` hold one normalized peak per analysis step at `peaks_per_second`
/// resolution; each frame shows a `bar_count`-wide window centered on the
/// current playback position, clamped at both ends of the clip. An empty peak
/// list means extraction has not finished and the source reports not-ready.
#[derive(Clone, Debug)]
pub struct PeakWindowAmplitudes {
    peaks: Vec<f64>,
    peaks_per_second: f64,
}

impl PeakWindowAmplitudes {
    /// Builds the source, clamping peaks into `[0, 1]`.
    pub fn new(peaks: Vec<f64>, peaks_per_second: f64) -> ClipResult<Self> {
        if !peaks_per_second.is_finite() || peaks_per_second <= 0.0 {
            return Err(ClipError::validation("peaks_per_second must be > 0"));
        }
        Ok(Self {
            peaks: AmplitudeFrame::new(peaks).samples,
            peaks_per_second,
        })
    }
}

impl AmplitudeSource for PeakWindowAmplitudes {
    fn sample(&self, ctx: FrameContext, bar_count: usize) -> Option<AmplitudeFrame> {
        if self.peaks.is_empty() {
            return None;
        }

        let center = (ctx.secs() * self.peaks_per_second).floor() as i64;
        let half = (bar_count / 2) as i64;
        let last = (self.peaks.len() - 1) as i64;
        let samples = (0..bar_count as i64)
            .map(|i| {
                let idx = (center - half + i).clamp(0, last);
                self.peaks[idx as usize]
            })
            .collect();
        Some(AmplitudeFrame { samples })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/amplitude.rs"]
mod tests;
