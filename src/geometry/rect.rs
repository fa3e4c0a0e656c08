use crate::foundation::core::{Point, Rect};

/// Fixed minimum usable text width, in layout units.
pub const MIN_TEXT_WIDTH: f64 = 80.0;

/// Whether `p` lies inside `rect` (edges included).
pub fn point_in_rect(p: Point, rect: Rect) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Scale `base` by `scale` about an arbitrary `origin` point.
///
/// With `even_growth` false each edge moves to `origin + (edge - origin) * scale`,
/// so growth is anisotropic toward/away from the origin. With `even_growth`
/// true the minimum of the two axis growth deltas is applied symmetrically on
/// all four edges, keeping the center fixed (for shrinks the minimum is the
/// larger dimension's delta).
///
/// `scale == 1` is an identity short-circuit returning `base` unchanged.
pub fn scale_rect_about(origin: Point, base: Rect, scale: f64, even_growth: bool) -> Rect {
    if scale == 1.0 {
        return base;
    }
    if even_growth {
        let delta = (base.width() * (scale - 1.0)).min(base.height() * (scale - 1.0)) / 2.0;
        return Rect::new(
            base.x0 - delta,
            base.y0 - delta,
            base.x1 + delta,
            base.y1 + delta,
        );
    }
    Rect::new(
        origin.x + (base.x0 - origin.x) * scale,
        origin.y + (base.y0 - origin.y) * scale,
        origin.x + (base.x1 - origin.x) * scale,
        origin.y + (base.y1 - origin.y) * scale,
    )
}

/// Whether `p` lies inside a rectangle with rounded corners of `radius`.
pub fn point_in_rounded_rect(p: Point, rect: Rect, radius: f64) -> bool {
    if !point_in_rect(p, rect) {
        return false;
    }
    let r = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if r <= 0.0 {
        return true;
    }
    let cx = p.x.clamp(rect.x0 + r, rect.x1 - r);
    let cy = p.y.clamp(rect.y0 + r, rect.y1 - r);
    let dx = p.x - cx;
    let dy = p.y - cy;
    dx * dx + dy * dy <= r * r
}

/// Clamp a requested text width against the available horizontal space.
///
/// `available` is the clip-bounds width when clipping is active, else the
/// parent width; the result never drops below [`MIN_TEXT_WIDTH`].
pub fn clamp_max_width(
    requested: f64,
    clip_bounds: Option<Rect>,
    parent_width: f64,
    padding: f64,
) -> f64 {
    let available = clip_bounds.map_or(parent_width, |c| c.width());
    requested.min(available - 2.0 * padding).max(MIN_TEXT_WIDTH)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
