use crate::foundation::core::Rect;

/// Resolves the configured target element to bounds in the shared
/// coordinate space.
///
/// Re-queried on every layout pass: elements may move or resize between
/// frames. `None` means "not yet available" (e.g. the element is not
/// attached); the state machine defers the reveal until a target resolves.
pub trait TargetResolver {
    /// Current target bounds, or `None` while unavailable.
    fn resolve(&self) -> Option<Rect>;
}

/// A fixed rectangle is the simplest resolver.
impl TargetResolver for Rect {
    fn resolve(&self) -> Option<Rect> {
        Some(*self)
    }
}

/// The rectangle outside which nothing is drawn or hit-tested.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipBounds {
    /// Clip rectangle in the shared coordinate space.
    pub rect: Rect,
    /// When false, layout falls back to the parent bounds instead.
    pub enabled: bool,
}

/// Supplies the current clip rectangle; may change between frames.
pub trait ClipBoundsProvider {
    /// Current clip bounds and whether clipping is active.
    fn clip_bounds(&self) -> ClipBounds;
}

/// A fixed, always-enabled clip rectangle.
impl ClipBoundsProvider for Rect {
    fn clip_bounds(&self) -> ClipBounds {
        ClipBounds {
            rect: *self,
            enabled: true,
        }
    }
}

/// Extent of a line-wrapped text block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeasuredText {
    /// Width of the widest wrapped line.
    pub width: f64,
    /// Total height of all wrapped lines.
    pub height: f64,
}

/// Measures line-wrapped text extents.
///
/// Text shaping and wrapping belong to the host's text engine; the core only
/// consumes resulting extents. Implementations must wrap at `max_width`.
pub trait TextMeasurer {
    /// Measure `text` at `font_size`, wrapped to at most `max_width`.
    fn measure(&self, text: &str, font_size: f64, max_width: f64) -> MeasuredText;
}

/// Host collaborators a prompt needs on every layout pass.
pub struct HostEnv {
    /// Text measurement port.
    pub measurer: Box<dyn TextMeasurer>,
    /// Clip-bounds port.
    pub clip: Box<dyn ClipBoundsProvider>,
    /// Parent bounds, used when clipping is disabled.
    pub parent_bounds: Rect,
}

impl HostEnv {
    /// Effective layout bounds for this pass: the clip rect when clipping is
    /// enabled, else the parent bounds.
    pub(crate) fn layout_bounds(&self) -> (Rect, Option<Rect>) {
        let clip = self.clip.clip_bounds();
        if clip.enabled {
            (clip.rect, Some(clip.rect))
        } else {
            (self.parent_bounds, None)
        }
    }
}

impl std::fmt::Debug for HostEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnv")
            .field("parent_bounds", &self.parent_bounds)
            .finish_non_exhaustive()
    }
}
