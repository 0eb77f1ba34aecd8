use crate::clip::request::LayoutId;
use crate::foundation::core::{Canvas, Fps};

/// Fixed rendering parameters for one layout.
///
/// Every layout currently shares the 1080x1080 square canvas at 30 fps the
/// studio exports for social feeds; caption density and bar count are where
/// they differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutProfile {
    /// The layout this profile belongs to.
    pub layout: LayoutId,
    /// Output canvas size.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Words per caption chunk.
    pub words_per_chunk: usize,
    /// Waveform bar count.
    pub bar_count: usize,
}

/// Looks up the registered profile for a layout.
///
/// Layout ids are a closed enum, so lookup cannot fail; unknown wire names
/// are rejected earlier when the id is parsed.
pub fn profile_for(layout: LayoutId) -> LayoutProfile {
    let square = Canvas {
        width: 1080,
        height: 1080,
    };
    let fps = Fps { num: 30, den: 1 };
    match layout {
        LayoutId::CenteredWaveform => LayoutProfile {
            layout,
            canvas: square,
            fps,
            words_per_chunk: 5,
            bar_count: 40,
        },
        LayoutId::SplitScreen => LayoutProfile {
            layout,
            canvas: square,
            fps,
            words_per_chunk: 4,
            bar_count: 24,
        },
        LayoutId::PodcastCard => LayoutProfile {
            layout,
            canvas: square,
            fps,
            words_per_chunk: 5,
            bar_count: 28,
        },
    }
}

/// Number of frames needed to cover `duration_secs` at `fps`.
///
/// Partial trailing frames round up so the clip never ends early.
pub fn frames_for_duration(duration_secs: f64, fps: Fps) -> u64 {
    (duration_secs * fps.as_f64()).ceil() as u64
}
