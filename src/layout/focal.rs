use crate::foundation::core::{Circle, Point, Rect, Rgba8};
use crate::geometry::circle::point_in_circle;
use crate::geometry::rect::{point_in_rounded_rect, scale_rect_about};
use crate::host::frame::ShapeGeometry;

/// Default base alpha of the idle ripple ring, before the per-frame
/// alpha modifier is applied.
pub const DEFAULT_RIPPLE_ALPHA: f64 = 138.0 / 255.0;

/// Built-in focal shape variants.
///
/// A custom shape is supplied as a boxed [`FocalShape`] implementation via
/// the builder instead of a variant here, keeping this set closed and
/// serializable.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FocalKind {
    /// Circular highlight centered on the target.
    #[default]
    Circle,
    /// Rounded rectangle hugging the target bounds.
    Rectangle {
        /// Corner radius of the highlight.
        corner_radius: f64,
    },
}

impl FocalKind {
    /// Instantiate the concrete shape for this variant.
    pub(crate) fn instantiate(self, ripple_base_alpha: f64) -> Box<dyn FocalShape> {
        match self {
            Self::Circle => Box::new(CircleFocal::new(ripple_base_alpha)),
            Self::Rectangle { corner_radius } => {
                Box::new(RectangleFocal::new(corner_radius, ripple_base_alpha))
            }
        }
    }
}

/// Capability set every focal shape implements: prepare, per-frame update,
/// idle ripple update, hit test, and geometry emission.
pub trait FocalShape {
    /// Prepare from resolved target bounds, expanded by `padding`.
    fn prepare_rect(&mut self, target: Rect, padding: f64);

    /// Prepare from an explicit target point with a fixed `radius`.
    fn prepare_point(&mut self, center: Point, radius: f64);

    /// Per-frame update: size = base × `reveal` (linear), plus alpha.
    fn update(&mut self, reveal: f64, alpha: f64);

    /// Idle ripple update: ring size = `reveal_mod` × base size
    /// (`reveal_mod` ∈ [0, 2]), ring alpha = base ripple alpha × `alpha_mod`.
    fn update_ripple(&mut self, reveal_mod: f64, alpha_mod: f64);

    /// Exact shape hit test against the currently drawn shape.
    fn contains(&self, p: Point) -> bool;

    /// Padded focal bounds at full reveal.
    fn bounds(&self) -> Rect;

    /// Focal center point.
    fn center(&self) -> Point;

    /// Largest base extent of the shape (radius for circles, half the larger
    /// side for rectangles), used by background sizing.
    fn base_extent(&self) -> f64;

    /// Drawable geometry for this frame.
    fn geometry(&self, color: Rgba8) -> ShapeGeometry;

    /// Drawable ripple ring, when visible this frame.
    fn ripple_geometry(&self, color: Rgba8) -> Option<ShapeGeometry>;
}

/// Circular focal highlight.
#[derive(Clone, Copy, Debug)]
pub struct CircleFocal {
    center: Point,
    base_radius: f64,
    radius: f64,
    alpha: f64,
    ripple_radius: f64,
    ripple_alpha: f64,
    ripple_base_alpha: f64,
}

impl CircleFocal {
    fn new(ripple_base_alpha: f64) -> Self {
        Self {
            center: Point::ZERO,
            base_radius: 0.0,
            radius: 0.0,
            alpha: 0.0,
            ripple_radius: 0.0,
            ripple_alpha: 0.0,
            ripple_base_alpha,
        }
    }
}

impl FocalShape for CircleFocal {
    fn prepare_rect(&mut self, target: Rect, padding: f64) {
        self.center = target.center();
        let half_diagonal = (target.width() / 2.0).hypot(target.height() / 2.0);
        self.base_radius = half_diagonal + padding;
    }

    fn prepare_point(&mut self, center: Point, radius: f64) {
        self.center = center;
        self.base_radius = radius;
    }

    fn update(&mut self, reveal: f64, alpha: f64) {
        self.radius = self.base_radius * reveal;
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn update_ripple(&mut self, reveal_mod: f64, alpha_mod: f64) {
        self.ripple_radius = self.base_radius * reveal_mod;
        self.ripple_alpha = self.ripple_base_alpha * alpha_mod.clamp(0.0, 1.0);
    }

    fn contains(&self, p: Point) -> bool {
        point_in_circle(p, Circle::new(self.center, self.radius))
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.base_radius,
            self.center.y - self.base_radius,
            self.center.x + self.base_radius,
            self.center.y + self.base_radius,
        )
    }

    fn center(&self) -> Point {
        self.center
    }

    fn base_extent(&self) -> f64 {
        self.base_radius
    }

    fn geometry(&self, color: Rgba8) -> ShapeGeometry {
        ShapeGeometry::Circle {
            center: self.center,
            radius: self.radius,
            color: color.with_alpha(self.alpha),
        }
    }

    fn ripple_geometry(&self, color: Rgba8) -> Option<ShapeGeometry> {
        if self.ripple_alpha <= 0.0 {
            return None;
        }
        Some(ShapeGeometry::Circle {
            center: self.center,
            radius: self.ripple_radius,
            color: color.with_alpha(self.ripple_alpha),
        })
    }
}

/// Rounded-rectangle focal highlight.
#[derive(Clone, Copy, Debug)]
pub struct RectangleFocal {
    base: Rect,
    rect: Rect,
    corner_radius: f64,
    alpha: f64,
    ripple_rect: Rect,
    ripple_alpha: f64,
    ripple_base_alpha: f64,
}

impl RectangleFocal {
    fn new(corner_radius: f64, ripple_base_alpha: f64) -> Self {
        Self {
            base: Rect::ZERO,
            rect: Rect::ZERO,
            corner_radius,
            alpha: 0.0,
            ripple_rect: Rect::ZERO,
            ripple_alpha: 0.0,
            ripple_base_alpha,
        }
    }
}

impl FocalShape for RectangleFocal {
    fn prepare_rect(&mut self, target: Rect, padding: f64) {
        self.base = target.inflate(padding, padding);
    }

    fn prepare_point(&mut self, center: Point, radius: f64) {
        self.base = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
    }

    fn update(&mut self, reveal: f64, alpha: f64) {
        self.rect = scale_rect_about(self.base.center(), self.base, reveal, false);
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn update_ripple(&mut self, reveal_mod: f64, alpha_mod: f64) {
        // Even growth keeps the ripple ring a uniform distance from the
        // rectangle on all sides.
        self.ripple_rect = scale_rect_about(self.base.center(), self.base, reveal_mod, true);
        self.ripple_alpha = self.ripple_base_alpha * alpha_mod.clamp(0.0, 1.0);
    }

    fn contains(&self, p: Point) -> bool {
        point_in_rounded_rect(p, self.rect, self.corner_radius)
    }

    fn bounds(&self) -> Rect {
        self.base
    }

    fn center(&self) -> Point {
        self.base.center()
    }

    fn base_extent(&self) -> f64 {
        (self.base.width() / 2.0).max(self.base.height() / 2.0)
    }

    fn geometry(&self, color: Rgba8) -> ShapeGeometry {
        ShapeGeometry::RoundedRect {
            rect: self.rect,
            corner_radius: self.corner_radius,
            color: color.with_alpha(self.alpha),
        }
    }

    fn ripple_geometry(&self, color: Rgba8) -> Option<ShapeGeometry> {
        if self.ripple_alpha <= 0.0 {
            return None;
        }
        Some(ShapeGeometry::RoundedRect {
            rect: self.ripple_rect,
            corner_radius: self.corner_radius,
            color: color.with_alpha(self.ripple_alpha),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/focal.rs"]
mod tests;
