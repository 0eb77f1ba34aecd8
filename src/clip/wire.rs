use crate::clip::request::{ClipRequest, LayoutId, LogoCorner, Palette};
use crate::foundation::error::{ClipError, ClipResult};

/// Render request as the clip service posts it.
///
/// This mirrors the backend API body: snake_case fields, a time range into
/// the source recording instead of a duration, and string-typed layout and
/// corner names. [`RenderClipRequest::into_clip_request`] is the validating
/// boundary that turns it into a typed [`ClipRequest`]. Audio slicing and
/// logo file resolution happen in the service, so both paths pass through
/// untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderClipRequest {
    /// Source recording on the service's disk.
    pub audio_path: String,
    /// Slice start in seconds into the recording.
    pub start_time: f64,
    /// Slice end in seconds, must be past the start.
    pub end_time: f64,
    /// Layout wire name.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Headline text.
    #[serde(default = "default_title")]
    pub title: String,
    /// Caption transcript for the slice.
    #[serde(default)]
    pub caption_text: String,
    /// Uploaded logo path, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    /// Corner wire name for the logo.
    #[serde(default = "default_logo_position")]
    pub logo_position: String,
    /// Palette override; missing means studio defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
}

fn default_layout() -> String {
    LayoutId::CenteredWaveform.as_str().to_string()
}

fn default_title() -> String {
    "Space2Thread".to_string()
}

fn default_logo_position() -> String {
    LogoCorner::TopRight.as_str().to_string()
}

impl RenderClipRequest {
    /// Validates the wire request and converts it into a [`ClipRequest`].
    ///
    /// The slice range collapses to `durationInSeconds = end - start`. An
    /// unrecognized layout or corner name fails here rather than falling back
    /// to a default layout.
    pub fn into_clip_request(self) -> ClipResult<ClipRequest> {
        if !self.start_time.is_finite() || !self.end_time.is_finite() {
            return Err(ClipError::validation(
                "start_time and end_time must be finite",
            ));
        }
        if self.start_time < 0.0 {
            return Err(ClipError::validation("start_time must be >= 0"));
        }
        if self.end_time <= self.start_time {
            return Err(ClipError::validation(format!(
                "end_time {} must be past start_time {}",
                self.end_time, self.start_time
            )));
        }

        let request = ClipRequest {
            audio_src: self.audio_path,
            title: self.title,
            caption_text: self.caption_text,
            logo_src: self.logo_path,
            logo_position: self.logo_position.parse()?,
            colors: self.colors.unwrap_or_default(),
            duration_in_seconds: self.end_time - self.start_time,
            layout: self.layout.parse()?,
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clip/wire.rs"]
mod tests;
