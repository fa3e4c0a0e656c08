use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{CoachmarkError, CoachmarkResult};
use crate::geometry::direction::Gravity;
use crate::host::ports::{HostEnv, TargetResolver};
use crate::layout::background::BackgroundKind;
use crate::layout::focal::{DEFAULT_RIPPLE_ALPHA, FocalKind, FocalShape};
use crate::prompt::machine::Prompt;

/// What the prompt highlights: a rectangle-producing element reference or an
/// explicit point. Mutually exclusive; the builder's last-set target wins.
pub enum Target {
    /// An element resolved to bounds on every layout pass.
    Element(Box<dyn TargetResolver>),
    /// A fixed point with a focal of the configured radius around it.
    Point(Point),
}

/// A target resolved for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ResolvedTarget {
    /// Element bounds in the shared coordinate space.
    Bounds(Rect),
    /// Explicit point target.
    Point(Point),
}

impl Target {
    /// Resolve for this pass; `None` while an element target is unavailable.
    pub(crate) fn resolve(&self) -> Option<ResolvedTarget> {
        match self {
            Self::Element(r) => r.resolve().map(ResolvedTarget::Bounds),
            Self::Point(p) => Some(ResolvedTarget::Point(*p)),
        }
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(_) => f.write_str("Target::Element(..)"),
            Self::Point(p) => write!(f, "Target::Point({p:?})"),
        }
    }
}

/// Declarative prompt styling and behavior flags, immutable after creation.
///
/// Serializable so hosts can load prompt styles from configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PromptStyle {
    /// Primary (required) text block content.
    pub primary_text: Option<String>,
    /// Secondary (optional) text block content.
    pub secondary_text: Option<String>,
    /// Primary text font size.
    pub primary_text_size: f64,
    /// Secondary text font size.
    pub secondary_text_size: f64,
    /// Primary text color.
    pub primary_text_color: Rgba8,
    /// Secondary text color.
    pub secondary_text_color: Rgba8,
    /// Primary text logical gravity.
    pub primary_text_gravity: Gravity,
    /// Secondary text logical gravity.
    pub secondary_text_gravity: Gravity,
    /// Container layout direction is right-to-left.
    pub layout_rtl: bool,
    /// Padding between text and the clip-bounds edges, and around the
    /// background rectangle strategy.
    pub text_padding: f64,
    /// Padding between the focal and the text block.
    pub focal_padding: f64,
    /// Vertical separation between primary and secondary blocks.
    pub text_separation: f64,
    /// Requested maximum text width before clamping.
    pub max_text_width: f64,
    /// Background fill color.
    pub background_color: Rgba8,
    /// Focal fill color.
    pub focal_color: Rgba8,
    /// Focal radius used for point targets.
    pub focal_radius: f64,
    /// Base alpha of the idle ripple ring.
    pub ripple_alpha: f64,
    /// Run the idle breathing/ripple animations while revealed.
    pub idle_animation_enabled: bool,
    /// A non-focal press automatically dismisses the prompt.
    pub auto_dismiss: bool,
    /// A focal press automatically finishes the prompt.
    pub auto_finish: bool,
    /// Report focal presses as consumed so the host swallows the event.
    pub capture_touch_on_focal: bool,
    /// Report presses outside the prompt's background shape as consumed;
    /// presses on the background itself always are.
    pub capture_touch_outside_prompt: bool,
    /// A back-button press dismisses the prompt.
    pub back_button_dismiss: bool,
    /// Interpolation curve for reveal/finish/dismiss animations.
    pub ease: Ease,
    /// Reveal animation duration, seconds.
    pub reveal_duration: f64,
    /// Finish/dismiss animation duration, seconds.
    pub exit_duration: f64,
    /// Seconds per rising (or falling) leg of the idle breathing wave.
    pub breathing_leg_duration: f64,
    /// Idle ripple one-shot duration, seconds.
    pub ripple_duration: f64,
    /// Background shape strategy.
    pub background: BackgroundKind,
    /// Focal shape variant.
    pub focal: FocalKind,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            primary_text: None,
            secondary_text: None,
            primary_text_size: 22.0,
            secondary_text_size: 16.0,
            primary_text_color: Rgba8::rgb(255, 255, 255),
            secondary_text_color: Rgba8::rgb(255, 255, 255).with_alpha(0.7),
            primary_text_gravity: Gravity::Start,
            secondary_text_gravity: Gravity::Start,
            layout_rtl: false,
            text_padding: 40.0,
            focal_padding: 20.0,
            text_separation: 16.0,
            max_text_width: 400.0,
            background_color: Rgba8 {
                r: 33,
                g: 33,
                b: 33,
                a: 244,
            },
            focal_color: Rgba8::rgb(255, 255, 255),
            focal_radius: 44.0,
            ripple_alpha: DEFAULT_RIPPLE_ALPHA,
            idle_animation_enabled: true,
            auto_dismiss: true,
            auto_finish: true,
            capture_touch_on_focal: false,
            capture_touch_outside_prompt: false,
            back_button_dismiss: true,
            ease: Ease::InOutQuad,
            reveal_duration: 0.225,
            exit_duration: 0.2,
            breathing_leg_duration: 1.0,
            ripple_duration: 0.5,
            background: BackgroundKind::Circle,
            focal: FocalKind::Circle,
        }
    }
}

/// Builds a [`Prompt`] from host ports, a target, and style.
///
/// Creation fails (absent result) when no target was set or both text blocks
/// are empty; [`PromptBuilder::try_build`] surfaces the reason.
pub struct PromptBuilder {
    env: HostEnv,
    target: Option<Target>,
    style: PromptStyle,
    custom_focal: Option<Box<dyn FocalShape>>,
}

impl PromptBuilder {
    /// Start a builder with the host collaborators for this prompt.
    pub fn new(env: HostEnv) -> Self {
        Self {
            env,
            target: None,
            style: PromptStyle::default(),
            custom_focal: None,
        }
    }

    /// Replace the whole style (e.g. one loaded from configuration).
    pub fn style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    /// Target an element; replaces any previously set target.
    pub fn target(mut self, resolver: impl TargetResolver + 'static) -> Self {
        self.target = Some(Target::Element(Box::new(resolver)));
        self
    }

    /// Target an explicit point; replaces any previously set target.
    pub fn target_point(mut self, x: f64, y: f64) -> Self {
        self.target = Some(Target::Point(Point::new(x, y)));
        self
    }

    /// Set the primary text block.
    pub fn primary_text(mut self, text: impl Into<String>) -> Self {
        self.style.primary_text = Some(text.into());
        self
    }

    /// Set the secondary text block.
    pub fn secondary_text(mut self, text: impl Into<String>) -> Self {
        self.style.secondary_text = Some(text.into());
        self
    }

    /// Set the background strategy.
    pub fn background(mut self, kind: BackgroundKind) -> Self {
        self.style.background = kind;
        self
    }

    /// Set the focal variant.
    pub fn focal(mut self, kind: FocalKind) -> Self {
        self.style.focal = kind;
        self
    }

    /// Supply a custom focal shape implementing the same capability set;
    /// overrides the [`FocalKind`] variant.
    pub fn custom_focal(mut self, shape: Box<dyn FocalShape>) -> Self {
        self.custom_focal = Some(shape);
        self
    }

    /// Keep the prompt from auto-dismissing on non-focal presses.
    pub fn auto_dismiss(mut self, enabled: bool) -> Self {
        self.style.auto_dismiss = enabled;
        self
    }

    /// Keep the prompt from auto-finishing on focal presses.
    pub fn auto_finish(mut self, enabled: bool) -> Self {
        self.style.auto_finish = enabled;
        self
    }

    /// Toggle the idle breathing/ripple animations.
    pub fn idle_animation(mut self, enabled: bool) -> Self {
        self.style.idle_animation_enabled = enabled;
        self
    }

    /// Build, or absent when the configuration cannot produce a prompt.
    pub fn build(self) -> Option<Prompt> {
        match self.try_build() {
            Ok(prompt) => Some(prompt),
            Err(err) => {
                tracing::debug!(%err, "prompt not created");
                None
            }
        }
    }

    /// Build, surfacing the validation failure.
    pub fn try_build(self) -> CoachmarkResult<Prompt> {
        let target = self
            .target
            .ok_or_else(|| CoachmarkError::validation("no target set"))?;
        let has_text = [&self.style.primary_text, &self.style.secondary_text]
            .into_iter()
            .flatten()
            .any(|t| !t.trim().is_empty());
        if !has_text {
            return Err(CoachmarkError::validation(
                "at least one non-empty text block is required",
            ));
        }
        Ok(Prompt::from_parts(
            self.env,
            target,
            self.style,
            self.custom_focal,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/options.rs"]
mod tests;
