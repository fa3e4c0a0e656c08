//! Coachmark is the core of a transient "tap target" coaching overlay: a
//! background shape, a focal highlight around a target element, and
//! explanatory text, animated in and out.
//!
//! The crate owns the two parts with real algorithmic content:
//!
//! 1. **Geometry/layout**: closed-form circle fitting, quadrant-aware text
//!    flow, and background/focal/text bounds recomputed from
//!    [`PromptStyle`] plus animation progress on every frame.
//! 2. **Lifecycle**: a finite state machine ([`PromptState`]) validating
//!    transitions and driving three timelines — the exclusive
//!    reveal/finish/dismiss animation plus the idle breathing and ripple
//!    loops.
//!
//! Everything else is a host port: rendering consumes the per-frame
//! [`FrameGeometry`] draw list, target/clip lookup and text measurement come
//! in through the traits in this crate, and input arrives pre-routed as
//! pointer/back presses.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and frame-driven**: no internal locking; timelines
//!   advance only inside [`Prompt::tick`], synchronously.
//! - **Value geometry**: layout functions return values; no shared mutable
//!   scratch rectangles.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod host;
mod layout;
mod prompt;

pub use animation::ease::Ease;
pub use animation::timeline::{
    BREATH_SCALE_MAX, BREATH_SCALE_MIN, BreathingTimeline, RIPPLE_SCALE_END, RIPPLE_SCALE_START,
    RippleTimeline, Timeline,
};
pub use foundation::core::{Circle, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{CoachmarkError, CoachmarkResult};
pub use geometry::circle::{fit_circle_through_points, point_in_circle};
pub use geometry::direction::{Gravity, TextAlignment, is_rtl_text, resolve_alignment};
pub use geometry::rect::{
    MIN_TEXT_WIDTH, clamp_max_width, point_in_rect, point_in_rounded_rect, scale_rect_about,
};
pub use host::frame::{FrameGeometry, ShapeGeometry, TextBlockGeometry};
pub use host::ports::{
    ClipBounds, ClipBoundsProvider, HostEnv, MeasuredText, TargetResolver, TextMeasurer,
};
pub use layout::background::BackgroundKind;
pub use layout::focal::{DEFAULT_RIPPLE_ALPHA, FocalKind, FocalShape};
pub use layout::text::NEAR_CENTER_INSET;
pub use prompt::machine::Prompt;
pub use prompt::options::{PromptBuilder, PromptStyle, Target};
pub use prompt::sequence::PromptSequence;
pub use prompt::state::PromptState;
