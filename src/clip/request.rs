use std::fmt;
use std::str::FromStr;

use crate::foundation::color::Rgba8;
use crate::foundation::error::{ClipError, ClipResult};

/// Identifier of a registered layout composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutId {
    /// Title top, large waveform center, captions bottom.
    CenteredWaveform,
    /// Logo panel left, title/waveform/captions right.
    SplitScreen,
    /// Floating podcast card with avatar and live badge.
    PodcastCard,
}

impl LayoutId {
    /// Every registered layout.
    pub const ALL: [LayoutId; 3] = [
        LayoutId::CenteredWaveform,
        LayoutId::SplitScreen,
        LayoutId::PodcastCard,
    ];

    /// The wire name, e.g. `centered_waveform`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CenteredWaveform => "centered_waveform",
            Self::SplitScreen => "split_screen",
            Self::PodcastCard => "podcast_card",
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutId {
    type Err = ClipError;

    /// Parses a wire name. Unknown layouts are a configuration error, never
    /// a silent fallback to some default layout.
    fn from_str(s: &str) -> ClipResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centered_waveform" => Ok(Self::CenteredWaveform),
            "split_screen" => Ok(Self::SplitScreen),
            "podcast_card" => Ok(Self::PodcastCard),
            other => Err(ClipError::validation(format!(
                "unknown layout '{other}' (expected centered_waveform, split_screen or podcast_card)"
            ))),
        }
    }
}

/// Canvas corner a logo is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoCorner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl LogoCorner {
    /// The wire name, e.g. `top-right`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for LogoCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoCorner {
    type Err = ClipError;

    fn from_str(s: &str) -> ClipResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            other => Err(ClipError::validation(format!(
                "unknown logo position '{other}'"
            ))),
        }
    }
}

/// The four palette roles every layout draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Canvas background.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Waveform bars and their tints.
    #[serde(default = "default_waveform")]
    pub waveform: Rgba8,
    /// Titles and captions.
    #[serde(default = "default_text")]
    pub text: Rgba8,
    /// Secondary tint for panels and placeholder art.
    #[serde(default = "default_accent")]
    pub accent: Rgba8,
}

fn default_background() -> Rgba8 {
    Rgba8::from_rgb(0x0a, 0x0a, 0x0a)
}

fn default_waveform() -> Rgba8 {
    Rgba8::from_rgb(0xa8, 0x55, 0xf7)
}

fn default_text() -> Rgba8 {
    Rgba8::from_rgb(0xff, 0xff, 0xff)
}

fn default_accent() -> Rgba8 {
    Rgba8::from_rgb(0x3b, 0x82, 0xf6)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: default_background(),
            waveform: default_waveform(),
            text: default_text(),
            accent: default_accent(),
        }
    }
}

/// A validated request to render one clip.
///
/// This is the render-props JSON the studio frontend produces, so field names
/// stay camelCase on the wire.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRequest {
    /// Audio file reference, passed through to the muxing stage. Empty means
    /// no audio (preview renders).
    #[serde(default)]
    pub audio_src: String,
    /// Headline text; empty hides the title element.
    #[serde(default)]
    pub title: String,
    /// Caption transcript; empty hides captions entirely.
    #[serde(default)]
    pub caption_text: String,
    /// Logo/avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_src: Option<String>,
    /// Corner for the logo in layouts that pin it.
    #[serde(default = "default_logo_position")]
    pub logo_position: LogoCorner,
    /// Palette; missing roles fall back to the studio defaults.
    #[serde(default)]
    pub colors: Palette,
    /// Clip duration in seconds, must be > 0.
    pub duration_in_seconds: f64,
    /// Which layout composes the scene.
    pub layout: LayoutId,
}

fn default_logo_position() -> LogoCorner {
    LogoCorner::TopRight
}

impl ClipRequest {
    /// Validate request invariants.
    pub fn validate(&self) -> ClipResult<()> {
        if !self.duration_in_seconds.is_finite() || self.duration_in_seconds <= 0.0 {
            return Err(ClipError::validation(
                "durationInSeconds must be finite and > 0",
            ));
        }
        if let Some(logo) = &self.logo_src
            && logo.trim().is_empty()
        {
            return Err(ClipError::validation(
                "logoSrc must be non-empty when present",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clip/request.rs"]
mod tests;
