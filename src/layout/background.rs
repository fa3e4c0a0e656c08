use crate::foundation::core::{Circle, Point, Rect, Rgba8};
use crate::geometry::circle::{fit_circle_through_points, point_in_circle};
use crate::geometry::rect::point_in_rect;
use crate::host::frame::ShapeGeometry;
use crate::layout::text::NEAR_CENTER_INSET;

/// Built-in background shape strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BackgroundKind {
    /// Minimal circle enclosing focal and text, emerging from the focal
    /// center during the reveal.
    #[default]
    Circle,
    /// Static rounded rectangle around the union of focal and text bounds;
    /// only alpha animates.
    Rectangle {
        /// Corner radius of the rectangle.
        corner_radius: f64,
    },
    /// The whole clip area; only alpha animates.
    Fullscreen,
}

/// Background shape layout: the minimal enclosing shape covering focal and
/// text bounds, with reveal/alpha animation state.
///
/// Whatever the strategy, the base shape at reveal 1 contains every corner of
/// both the focal and text bounds; the renderer relies on that for its
/// focal-cutout clipping.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Background {
    Circle(CircleBackground),
    Rect(RectBackground),
    Fullscreen(RectBackground),
}

impl Background {
    pub(crate) fn new(kind: BackgroundKind) -> Self {
        match kind {
            BackgroundKind::Circle => Self::Circle(CircleBackground::default()),
            BackgroundKind::Rectangle { corner_radius } => {
                Self::Rect(RectBackground::new(corner_radius))
            }
            BackgroundKind::Fullscreen => Self::Fullscreen(RectBackground::new(0.0)),
        }
    }

    /// Recompute the base shape from prepared focal and text layout.
    pub(crate) fn prepare(
        &mut self,
        focal_bounds: Rect,
        focal_center: Point,
        text_bounds: Rect,
        layout_bounds: Rect,
        text_above: bool,
        text_left: bool,
        focal_padding: f64,
        text_padding: f64,
    ) {
        match self {
            Self::Circle(c) => c.prepare(
                focal_bounds,
                focal_center,
                text_bounds,
                layout_bounds,
                text_above,
                text_left,
                focal_padding,
                text_padding,
            ),
            Self::Rect(r) => {
                r.base = focal_bounds.union(text_bounds).inflate(text_padding, text_padding);
                r.rect = r.base;
            }
            Self::Fullscreen(r) => {
                r.base = layout_bounds;
                r.rect = r.base;
            }
        }
    }

    /// Per-frame update from reveal/alpha progress.
    pub(crate) fn update(&mut self, reveal: f64, alpha: f64) {
        match self {
            Self::Circle(c) => c.update(reveal, alpha),
            Self::Rect(r) | Self::Fullscreen(r) => r.update(reveal, alpha),
        }
    }

    /// Hit test against the currently drawn shape.
    pub(crate) fn contains(&self, p: Point) -> bool {
        match self {
            Self::Circle(c) => point_in_circle(p, Circle::new(c.center, c.radius)),
            Self::Rect(r) | Self::Fullscreen(r) => point_in_rect(p, r.rect),
        }
    }

    /// Base shape bounds at reveal 1.
    pub(crate) fn base_bounds(&self) -> Rect {
        match self {
            Self::Circle(c) => Rect::new(
                c.base_center.x - c.base_radius,
                c.base_center.y - c.base_radius,
                c.base_center.x + c.base_radius,
                c.base_center.y + c.base_radius,
            ),
            Self::Rect(r) | Self::Fullscreen(r) => r.base,
        }
    }

    /// Drawable geometry for this frame.
    pub(crate) fn geometry(&self, color: Rgba8) -> ShapeGeometry {
        match self {
            Self::Circle(c) => ShapeGeometry::Circle {
                center: c.center,
                radius: c.radius,
                color: color.with_alpha(c.alpha),
            },
            Self::Rect(r) | Self::Fullscreen(r) => ShapeGeometry::RoundedRect {
                rect: r.rect,
                corner_radius: r.corner_radius,
                color: color.with_alpha(r.alpha),
            },
        }
    }
}

/// Circle strategy state.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CircleBackground {
    focal_center: Point,
    base_center: Point,
    base_radius: f64,
    center: Point,
    radius: f64,
    alpha: f64,
}

impl CircleBackground {
    #[allow(clippy::too_many_arguments)]
    fn prepare(
        &mut self,
        focal_bounds: Rect,
        focal_center: Point,
        text_bounds: Rect,
        layout_bounds: Rect,
        text_above: bool,
        text_left: bool,
        focal_padding: f64,
        text_padding: f64,
    ) {
        self.focal_center = focal_center;
        let padded_text = text_bounds.inflate(text_padding, text_padding);

        let near_center = point_in_rect(
            focal_center,
            layout_bounds.inflate(-NEAR_CENTER_INSET, -NEAR_CENTER_INSET),
        );
        if near_center {
            // Degenerate to a circle on the focal center; the radius is the
            // perpendicular distance to the furthest required corner.
            self.base_center = focal_center;
            self.base_radius = furthest_corner_distance(focal_center, padded_text)
                .max(furthest_corner_distance(focal_center, focal_bounds) + focal_padding);
        } else {
            // Fit through the focal-opposite edge point and the two far
            // corners of the padded text block.
            let p1 = if text_above {
                Point::new(focal_center.x, focal_bounds.y1 + focal_padding)
            } else {
                Point::new(focal_center.x, focal_bounds.y0 - focal_padding)
            };
            let y_far = if text_above {
                padded_text.y0
            } else {
                padded_text.y1
            };
            let (mut x_near, x_far) = if text_left {
                (padded_text.x1, padded_text.x0)
            } else {
                (padded_text.x0, padded_text.x1)
            };
            // Anti-degeneracy correction: a text corner inside the focal's
            // padded horizontal span would make the three points near
            // collinear; push it outward first.
            let focal_span = (
                focal_bounds.x0 - text_padding,
                focal_bounds.x1 + text_padding,
            );
            if x_near > focal_span.0 && x_near < focal_span.1 {
                let push = focal_bounds.width() / 2.0 + text_padding;
                if text_left {
                    x_near -= push;
                } else {
                    x_near += push;
                }
            }
            // The fit needs two distinct corner xs; keep them separated even
            // if the push lands exactly on the far corner.
            if (x_near - x_far).abs() < 1e-6 {
                x_near += if text_left { -1.0 } else { 1.0 };
            }
            let fitted = fit_circle_through_points(
                p1,
                Point::new(x_near, y_far),
                Point::new(x_far, y_far),
            );
            self.base_center = fitted.center;
            self.base_radius = fitted.radius;
        }

        // Containment is a contract, not a best effort: raise the radius
        // until every corner of focal and padded text is enclosed.
        self.base_radius = self
            .base_radius
            .max(furthest_corner_distance(self.base_center, focal_bounds))
            .max(furthest_corner_distance(self.base_center, padded_text));
    }

    fn update(&mut self, reveal: f64, alpha: f64) {
        self.radius = self.base_radius * reveal;
        // Emerge from the focal: the center travels focal -> fitted base.
        self.center = Point::new(
            self.focal_center.x + (self.base_center.x - self.focal_center.x) * reveal,
            self.focal_center.y + (self.base_center.y - self.focal_center.y) * reveal,
        );
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

/// Shared state for the rectangle and fullscreen strategies.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RectBackground {
    base: Rect,
    rect: Rect,
    corner_radius: f64,
    alpha: f64,
}

impl RectBackground {
    fn new(corner_radius: f64) -> Self {
        Self {
            corner_radius,
            ..Self::default()
        }
    }

    fn update(&mut self, _reveal: f64, alpha: f64) {
        self.rect = self.base;
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

fn furthest_corner_distance(from: Point, rect: Rect) -> f64 {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
    ]
    .into_iter()
    .map(|c| from.distance(c))
    .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/background.rs"]
mod tests;
