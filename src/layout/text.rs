use crate::foundation::core::{Point, Rect, Rgba8};
use crate::geometry::direction::{Gravity, TextAlignment, is_rtl_text, resolve_alignment};
use crate::geometry::rect::{clamp_max_width, point_in_rect};
use crate::host::frame::TextBlockGeometry;
use crate::host::ports::TextMeasurer;
use crate::prompt::options::PromptStyle;

/// Margin inside the clip bounds defining the near-center zone. A focal whose
/// center lies within this inset gets text placed adjacent to it; focals
/// nearer an edge get text pinned to the clip edge instead.
pub const NEAR_CENTER_INSET: f64 = 88.0;

/// One measured and positioned text block.
#[derive(Clone, Debug)]
struct TextBlock {
    content: String,
    font_size: f64,
    color: Rgba8,
    alignment: TextAlignment,
    left: f64,
    top: f64,
    actual_width: f64,
    height: f64,
    rtl_indent: f64,
}

impl TextBlock {
    fn rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.actual_width,
            self.top + self.height,
        )
    }

    fn geometry(&self, alpha: f64) -> TextBlockGeometry {
        TextBlockGeometry {
            content: self.content.clone(),
            origin: Point::new(self.left, self.top),
            width: self.actual_width,
            height: self.height,
            font_size: self.font_size,
            alignment: self.alignment,
            rtl_indent: self.rtl_indent,
            color: self.color.with_alpha(alpha),
        }
    }
}

/// Text flow layout: positions the primary and optional secondary block in
/// the quadrant opposite the focal, relative to the clip-bounds center.
///
/// Bounds are reveal-progress-independent; only alpha animates, applied at
/// paint level so alpha-only changes never re-measure.
#[derive(Debug, Default)]
pub(crate) struct TextFlow {
    primary: Option<TextBlock>,
    secondary: Option<TextBlock>,
    bounds: Rect,
    alpha: f64,
    text_above: bool,
    text_left: bool,
}

impl TextFlow {
    /// Recompute block positions and sizes for the current focal bounds.
    pub(crate) fn prepare(
        &mut self,
        style: &PromptStyle,
        focal_bounds: Rect,
        layout_bounds: Rect,
        clip: Option<Rect>,
        measurer: &dyn TextMeasurer,
    ) {
        let focal_center = focal_bounds.center();
        let layout_center = layout_bounds.center();
        // Named for where the text goes, which is opposite the quadrant the
        // focal occupies.
        self.text_above = focal_center.y > layout_center.y;
        self.text_left = focal_center.x > layout_center.x;

        let max_width = clamp_max_width(
            style.max_text_width,
            clip,
            layout_bounds.width(),
            style.text_padding,
        );
        let near_center = point_in_rect(
            focal_center,
            layout_bounds.inflate(-NEAR_CENTER_INSET, -NEAR_CENTER_INSET),
        );

        let primary = measure_block(
            style.primary_text.as_deref(),
            style.primary_text_size,
            style.primary_text_color,
            style.primary_text_gravity,
            style.layout_rtl,
            max_width,
            measurer,
        );
        let secondary = measure_block(
            style.secondary_text.as_deref(),
            style.secondary_text_size,
            style.secondary_text_color,
            style.secondary_text_gravity,
            style.layout_rtl,
            max_width,
            measurer,
        );

        let mut total_height =
            primary.as_ref().map_or(0.0, |b| b.height) + secondary.as_ref().map_or(0.0, |b| b.height);
        if primary.is_some() && secondary.is_some() {
            total_height += style.text_separation;
        }

        let mut top = if self.text_above {
            focal_bounds.y0 - style.focal_padding - total_height
        } else {
            focal_bounds.y1 + style.focal_padding
        };

        self.primary = primary.map(|mut b| {
            place_block(
                &mut b,
                &mut top,
                style,
                focal_bounds,
                layout_bounds,
                near_center,
                self.text_left,
                true,
            );
            b
        });
        self.secondary = secondary.map(|mut b| {
            place_block(
                &mut b,
                &mut top,
                style,
                focal_bounds,
                layout_bounds,
                near_center,
                self.text_left,
                false,
            );
            b
        });

        self.bounds = match (&self.primary, &self.secondary) {
            (Some(p), Some(s)) => p.rect().union(s.rect()),
            (Some(p), None) => p.rect(),
            (None, Some(s)) => s.rect(),
            (None, None) => Rect::ZERO,
        };
    }

    /// Per-frame update; position and size are reveal-independent.
    pub(crate) fn update(&mut self, _reveal: f64, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Union of the wrapped content bounds at progress 1.
    pub(crate) fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the text sits above the focal.
    pub(crate) fn is_above(&self) -> bool {
        self.text_above
    }

    /// Whether the text sits left of the focal.
    pub(crate) fn is_left(&self) -> bool {
        self.text_left
    }

    /// Drawable geometry for (primary, secondary) this frame.
    pub(crate) fn geometry(&self) -> (Option<TextBlockGeometry>, Option<TextBlockGeometry>) {
        (
            self.primary.as_ref().map(|b| b.geometry(self.alpha)),
            self.secondary.as_ref().map(|b| b.geometry(self.alpha)),
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn place_block(
    block: &mut TextBlock,
    top: &mut f64,
    style: &PromptStyle,
    focal_bounds: Rect,
    layout_bounds: Rect,
    near_center: bool,
    text_left: bool,
    is_primary: bool,
) {
    let min_left = layout_bounds.x0 + style.text_padding;
    let max_left = layout_bounds.x1 - style.text_padding - block.actual_width;
    let left = if near_center {
        // Adjacent to the focal on the chosen side, clamped inside the clip
        // padding margins.
        let adjacent = if text_left {
            focal_bounds.x1 - block.actual_width
        } else {
            focal_bounds.x0
        };
        adjacent.clamp(min_left, max_left.max(min_left))
    } else if text_left {
        min_left
    } else {
        max_left.max(min_left)
    };

    block.left = left;
    block.top = *top;
    *top += block.height;
    if is_primary {
        *top += style.text_separation;
    }
}

fn measure_block(
    content: Option<&str>,
    font_size: f64,
    color: Rgba8,
    gravity: Gravity,
    layout_rtl: bool,
    max_width: f64,
    measurer: &dyn TextMeasurer,
) -> Option<TextBlock> {
    let content = content?.trim_end();
    if content.is_empty() {
        return None;
    }
    let measured = measurer.measure(content, font_size, max_width);
    let actual_width = measured.width.min(max_width);
    let alignment = resolve_alignment(gravity, content, layout_rtl);
    Some(TextBlock {
        content: content.to_string(),
        font_size,
        color,
        alignment,
        left: 0.0,
        top: 0.0,
        actual_width,
        height: measured.height,
        rtl_indent: rtl_indent(alignment, content, max_width, actual_width),
    })
}

/// Draw-time x shift producing the visually mirrored indent for blocks whose
/// resolved alignment and detected script direction indicate RTL flow.
fn rtl_indent(alignment: TextAlignment, content: &str, max_width: f64, actual_width: f64) -> f64 {
    let rtl_flow = match alignment {
        TextAlignment::Center => false,
        TextAlignment::Start => is_rtl_text(content),
        TextAlignment::End => !is_rtl_text(content),
    };
    if rtl_flow {
        (max_width - actual_width).max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
