use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect, Vec2};

/// Drop shadow or glow attached to a node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    /// Shadow offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Rgba8,
}

impl Shadow {
    /// Centered glow: no offset, just blur and color.
    pub fn glow(blur: f64, color: Rgba8) -> Self {
        Self {
            offset: Vec2::ZERO,
            blur,
            color,
        }
    }
}

/// Stroked edge around a node's bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Rgba8,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Anchor is the left edge of the text.
    Left,
    /// Anchor is the horizontal center.
    Center,
    /// Anchor is the right edge.
    Right,
}

/// Vertical text anchoring relative to the anchor point.
///
/// The rasterizer measures the laid-out block and pins the chosen edge to
/// the anchor, so the core never needs font metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVAlign {
    /// Anchor is the top edge of the block.
    Top,
    /// Anchor is the vertical center.
    Middle,
    /// Anchor is the bottom edge.
    Bottom,
}

/// One element of a [`Scene`], painted in list order.
///
/// Circles are rounded rects with `corner_radius == width / 2`; the
/// rasterizer needs no separate ellipse primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    /// Filled rounded rectangle.
    Rect {
        /// Bounds in canvas coordinates.
        bounds: Rect,
        /// Corner radius in pixels.
        corner_radius: f64,
        /// Fill color.
        fill: Rgba8,
        /// Node opacity in `[0, 1]`, multiplied onto the fill.
        opacity: f64,
        /// Optional stroked edge.
        border: Option<Border>,
        /// Optional drop shadow or glow.
        shadow: Option<Shadow>,
    },
    /// A run of text at an anchor point.
    Text {
        /// The text to draw.
        content: String,
        /// Anchor position; `align`/`valign` say which edges it pins.
        anchor: Point,
        /// Horizontal alignment about the anchor.
        align: TextAlign,
        /// Vertical anchoring about the anchor.
        valign: TextVAlign,
        /// Font size in pixels.
        font_size: f64,
        /// CSS-style weight, 400 = regular, 700 = bold.
        font_weight: u16,
        /// Text color.
        color: Rgba8,
        /// Node opacity in `[0, 1]`.
        opacity: f64,
        /// Wrap width in pixels; unset means no wrapping.
        max_width: Option<f64>,
        /// Optional drop shadow.
        shadow: Option<Shadow>,
    },
    /// An externally-resolved image placed into bounds.
    Image {
        /// Opaque reference handed back to the rasterizer (path or URL).
        source: String,
        /// Bounds in canvas coordinates.
        bounds: Rect,
        /// Corner radius; `width / 2` crops to a circle.
        corner_radius: f64,
        /// Node opacity in `[0, 1]`.
        opacity: f64,
        /// Optional stroked edge.
        border: Option<Border>,
        /// Optional drop shadow or glow.
        shadow: Option<Shadow>,
    },
}

/// Everything to draw for one frame, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Output surface size.
    pub canvas: Canvas,
    /// Color the canvas is cleared to before nodes paint.
    pub background: Rgba8,
    /// Nodes in paint order, back to front.
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    /// An empty scene over a cleared canvas.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            nodes: Vec::new(),
        }
    }

    /// Appends a node above everything pushed so far.
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}

/// Scales `rect` about a fixed `center` point.
///
/// Used to bake entrance scales into node bounds so scenes stay flat: there
/// is no nested group transform for the rasterizer to track.
pub fn scale_about(rect: Rect, center: Point, factor: f64) -> Rect {
    let sx = |x: f64| center.x + (x - center.x) * factor;
    let sy = |y: f64| center.y + (y - center.y) * factor;
    Rect::new(sx(rect.x0), sy(rect.y0), sx(rect.x1), sy(rect.y1))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
