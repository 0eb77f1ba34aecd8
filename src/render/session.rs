use crate::audio::amplitude::AmplitudeSource;
use crate::captions::chunker::CaptionChunks;
use crate::clip::request::{ClipRequest, LayoutId};
use crate::compositions::{card, centered, split_screen};
use crate::foundation::core::{FrameContext, FrameIndex};
use crate::foundation::error::ClipResult;
use crate::registry::{LayoutProfile, frames_for_duration, profile_for};
use crate::scene::model::Scene;

/// A validated clip request with everything derived from it up front.
///
/// Construction does all the per-clip work (validation, profile lookup,
/// caption chunking, frame count); composing a frame afterwards is pure and
/// touches no shared state, so one session can serve many workers at once.
#[derive(Clone, Debug)]
pub struct RenderSession {
    request: ClipRequest,
    profile: LayoutProfile,
    chunks: CaptionChunks,
    total_frames: u64,
}

impl RenderSession {
    /// Validates `request` and prepares it for composition.
    pub fn new(request: ClipRequest) -> ClipResult<Self> {
        request.validate()?;
        let profile = profile_for(request.layout);
        let chunks = CaptionChunks::split(&request.caption_text, profile.words_per_chunk)?;
        let total_frames = frames_for_duration(request.duration_in_seconds, profile.fps);
        Ok(Self {
            request,
            profile,
            chunks,
            total_frames,
        })
    }

    /// The request this session was built from.
    pub fn request(&self) -> &ClipRequest {
        &self.request
    }

    /// The fixed rendering parameters for the request's layout.
    pub fn profile(&self) -> &LayoutProfile {
        &self.profile
    }

    /// Caption text split at the layout's chunk density.
    pub fn chunks(&self) -> &CaptionChunks {
        &self.chunks
    }

    /// Clip length in frames, duration rounded up to whole frames.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frame context for `frame`; indices past the end are evaluation errors.
    pub fn frame_context(&self, frame: FrameIndex) -> ClipResult<FrameContext> {
        FrameContext::new(frame, self.profile.fps, self.total_frames)
    }

    #[tracing::instrument(skip(self, source))]
    /// Composes the scene for one frame of the clip.
    ///
    /// `source` is resampled to the layout's bar count each call; a source
    /// that returns `None` leaves the waveform row empty.
    pub fn compose(&self, frame: FrameIndex, source: &dyn AmplitudeSource) -> ClipResult<Scene> {
        let ctx = self.frame_context(frame)?;
        let amps = source.sample(ctx, self.profile.bar_count);
        let scene = match self.request.layout {
            LayoutId::CenteredWaveform => {
                centered::compose(&self.request, &self.profile, ctx, &self.chunks, amps.as_ref())
            }
            LayoutId::SplitScreen => {
                split_screen::compose(&self.request, &self.profile, ctx, &self.chunks, amps.as_ref())
            }
            LayoutId::PodcastCard => {
                card::compose(&self.request, &self.profile, ctx, &self.chunks, amps.as_ref())
            }
        };
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
