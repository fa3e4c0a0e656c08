use crate::foundation::core::{Point, Rect, Rgba8};
use crate::geometry::direction::TextAlignment;

/// A filled shape the renderer must paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ShapeGeometry {
    /// A filled circle.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color with the frame's alpha already applied.
        color: Rgba8,
    },
    /// A filled rectangle with rounded corners.
    RoundedRect {
        /// Rectangle bounds.
        rect: Rect,
        /// Corner radius (0 for square corners).
        corner_radius: f64,
        /// Fill color with the frame's alpha already applied.
        color: Rgba8,
    },
}

/// One laid-out text block for the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBlockGeometry {
    /// Text content to draw.
    pub content: String,
    /// Top-left corner of the block's logical bounds.
    pub origin: Point,
    /// Logical block width (widest wrapped line).
    pub width: f64,
    /// Total wrapped block height.
    pub height: f64,
    /// Font size in layout units.
    pub font_size: f64,
    /// Resolved absolute alignment within the block.
    pub alignment: TextAlignment,
    /// Additional draw-time x shift producing the mirrored RTL indent.
    /// Does not alter the logical bounds.
    pub rtl_indent: f64,
    /// Text color with the frame's alpha already applied.
    pub color: Rgba8,
}

/// Everything the renderer needs for one frame.
///
/// Draw order contract: `background`, then `focal` (the background must never
/// paint over the focal region), then `ripple` if present, then the target
/// mirror hinted by `target_bounds`, then the text blocks.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameGeometry {
    /// Background shape behind everything.
    pub background: ShapeGeometry,
    /// Focal highlight around the target.
    pub focal: ShapeGeometry,
    /// Idle ripple ring, when the ripple timeline is in flight.
    pub ripple: Option<ShapeGeometry>,
    /// Resolved target bounds, for hosts that mirror the target on top.
    pub target_bounds: Option<Rect>,
    /// Primary text block, if configured.
    pub primary_text: Option<TextBlockGeometry>,
    /// Secondary text block, if configured.
    pub secondary_text: Option<TextBlockGeometry>,
}
