use crate::audio::amplitude::AmplitudeFrame;
use crate::foundation::color::Rgba8;
use crate::foundation::core::Rect;

/// Bar cap style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    /// Pill-shaped bars, corner radius half the bar width.
    Rounded,
    /// Near-square bars with a 2 px corner radius.
    Square,
}

/// Resolved geometry and paint for a single waveform bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Bar bounds in canvas coordinates.
    pub bounds: Rect,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Bar opacity in `[0.7, 1.0]`, louder bars more opaque.
    pub opacity: f64,
    /// Glow blur radius in pixels, 0 when silent.
    pub glow_radius: f64,
    /// Glow color, the bar color at reduced alpha.
    pub glow_color: Rgba8,
}

/// Lays out one bar per amplitude sample across `region`.
///
/// The region's width is divided into equal cells, each split 70/30 between
/// bar and gap, with bars centered in their cells (so the row starts and ends
/// with a half gap). Bar height is `amp * height * 0.9` with a 4 px floor,
/// vertically centered. Opacity is `0.7 + amp * 0.3` and the glow radius is
/// `floor(amp * 15)`.
pub fn render_bars(
    region: Rect,
    amps: &AmplitudeFrame,
    color: Rgba8,
    style: BarStyle,
) -> Vec<BarGeometry> {
    let count = amps.len();
    if count == 0 {
        return Vec::new();
    }

    let cell = region.width() / count as f64;
    let bar_width = cell * 0.7;
    let gap = cell * 0.3;
    let corner_radius = match style {
        BarStyle::Rounded => bar_width / 2.0,
        BarStyle::Square => 2.0,
    };
    let glow_color = color.with_alpha(0x40);

    amps.samples()
        .iter()
        .enumerate()
        .map(|(i, &amp)| {
            let height = (amp * region.height() * 0.9).max(4.0);
            let x = region.x0 + gap / 2.0 + i as f64 * cell;
            let y = region.y0 + (region.height() - height) / 2.0;
            BarGeometry {
                bounds: Rect::new(x, y, x + bar_width, y + height),
                corner_radius,
                color,
                opacity: 0.7 + amp * 0.3,
                glow_radius: (amp * 15.0).floor(),
                glow_color,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/bars.rs"]
mod tests;
