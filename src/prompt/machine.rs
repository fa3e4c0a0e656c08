use crate::animation::timeline::{BreathingTimeline, RippleTimeline, Timeline};
use crate::foundation::core::Point;
use crate::host::frame::FrameGeometry;
use crate::host::ports::HostEnv;
use crate::layout::background::Background;
use crate::layout::focal::FocalShape;
use crate::layout::text::TextFlow;
use crate::prompt::options::{PromptStyle, ResolvedTarget, Target};
use crate::prompt::state::PromptState;

/// Which exclusive animation the current timeline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AnimKind {
    Reveal,
    Finish,
    Dismiss,
}

#[derive(Clone, Copy, Debug)]
struct CurrentAnimation {
    kind: AnimKind,
    timeline: Timeline,
}

/// A live prompt: lifecycle state machine plus the three layout components,
/// driven by host frame ticks.
///
/// Single-threaded and cooperative: every mutation happens synchronously
/// inside the host call that triggered it. [`Prompt::tick`] advances the
/// timelines, recomputes geometry, and returns the frame's draw list.
pub struct Prompt {
    env: HostEnv,
    target: Target,
    style: PromptStyle,
    state: PromptState,
    focal: Box<dyn FocalShape>,
    text: TextFlow,
    background: Background,
    current: Option<CurrentAnimation>,
    breathing: Option<BreathingTimeline>,
    ripple: Option<RippleTimeline>,
    timeout_remaining: Option<f64>,
    subscribers: Vec<Box<dyn FnMut(PromptState)>>,
    prepared: bool,
    last_target: Option<ResolvedTarget>,
}

impl Prompt {
    pub(crate) fn from_parts(
        env: HostEnv,
        target: Target,
        style: PromptStyle,
        custom_focal: Option<Box<dyn FocalShape>>,
    ) -> Self {
        let focal = custom_focal.unwrap_or_else(|| style.focal.instantiate(style.ripple_alpha));
        Self {
            env,
            target,
            background: Background::new(style.background),
            style,
            state: PromptState::NotShown,
            focal,
            text: TextFlow::default(),
            current: None,
            breathing: None,
            ripple: None,
            timeout_remaining: None,
            subscribers: Vec::new(),
            prepared: false,
            last_target: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PromptState {
        self.state
    }

    /// The immutable style this prompt was created with.
    pub fn style(&self) -> &PromptStyle {
        &self.style
    }

    /// Register a state-change subscriber. Subscribers fire synchronously on
    /// every transition, in registration order (primary listener first).
    pub fn subscribe(&mut self, subscriber: impl FnMut(PromptState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Start the reveal.
    ///
    /// No-op while already `Revealing`/`Revealed`. From an exit or terminal
    /// state the prior animation is force-cleaned first and the prompt
    /// restarts from `Revealing`. When an element target has not resolved
    /// yet the reveal is deferred; call again once the target is ready.
    #[tracing::instrument(skip(self))]
    pub fn show(&mut self) {
        match self.state {
            PromptState::Revealing | PromptState::Revealed => {
                tracing::trace!(state = ?self.state, "show ignored, already starting");
                return;
            }
            PromptState::NotShown => {}
            _ => self.clean_up(),
        }
        if !self.prepare_layout() {
            tracing::debug!("target not resolved, reveal deferred");
            return;
        }
        self.apply_progress(0.0, 0.0);
        self.current = Some(CurrentAnimation {
            kind: AnimKind::Reveal,
            timeline: Timeline::new(self.style.reveal_duration, self.style.ease),
        });
        self.set_state(PromptState::Revealing);
    }

    /// Show, auto-dismissing after `timeout_secs` of no interaction.
    ///
    /// The deadline only counts down while the prompt is revealing or
    /// revealed, and is dropped by any press, finish, or dismiss.
    #[tracing::instrument(skip(self))]
    pub fn show_for(&mut self, timeout_secs: f64) {
        self.timeout_remaining = Some(timeout_secs.max(0.0));
        self.show();
    }

    /// Cancel a pending show-for timeout. Safe after the timer has fired:
    /// the later of fire and cancel wins and exactly one effect applies.
    pub fn cancel_show_for_timer(&mut self) {
        self.timeout_remaining = None;
    }

    /// Start the finish (positive completion) animation.
    /// No-op while an exit animation runs or from a terminal state.
    #[tracing::instrument(skip(self))]
    pub fn finish(&mut self) {
        if self.is_exiting() {
            tracing::trace!(state = ?self.state, "finish ignored");
            return;
        }
        self.start_exit(AnimKind::Finish, PromptState::Finishing);
    }

    /// Start the dismiss animation.
    /// No-op while an exit animation runs or from a terminal state.
    #[tracing::instrument(skip(self))]
    pub fn dismiss(&mut self) {
        if self.is_exiting() {
            tracing::trace!(state = ?self.state, "dismiss ignored");
            return;
        }
        self.start_exit(AnimKind::Dismiss, PromptState::Dismissing);
    }

    /// Classify and apply a pointer press. Returns whether the host should
    /// consume the event, per the capture-touch flags.
    pub fn pointer_press(&mut self, p: Point) -> bool {
        if self.state != PromptState::Revealed {
            return false;
        }
        if self.focal.contains(p) {
            self.set_state(PromptState::FocalPressed);
            let consumed = self.style.capture_touch_on_focal;
            if self.style.auto_finish {
                self.finish();
            }
            consumed
        } else {
            self.set_state(PromptState::NonFocalPressed);
            // Presses on the prompt's own background belong to the prompt;
            // the capture flag governs presses beyond the background shape.
            let consumed =
                self.background.contains(p) || self.style.capture_touch_outside_prompt;
            if self.style.auto_dismiss {
                self.dismiss();
            }
            consumed
        }
    }

    /// Apply a back-button press. Returns whether it was consumed.
    pub fn back_pressed(&mut self) -> bool {
        if !self.style.back_button_dismiss
            || !matches!(self.state, PromptState::Revealing | PromptState::Revealed)
        {
            return false;
        }
        self.set_state(PromptState::BackButtonPressed);
        if self.style.auto_dismiss {
            self.dismiss();
        }
        true
    }

    /// Advance all timelines by `dt` seconds, recompute geometry, and return
    /// the draw list for this frame (`None` while nothing is visible).
    pub fn tick(&mut self, dt: f64) -> Option<FrameGeometry> {
        self.tick_timeout(dt);
        self.refresh_target();
        self.tick_current(dt);
        self.tick_idle(dt);

        if !self.prepared || !self.state.is_visible() {
            return None;
        }
        let (primary_text, secondary_text) = self.text.geometry();
        Some(FrameGeometry {
            background: self.background.geometry(self.style.background_color),
            focal: self.focal.geometry(self.style.focal_color),
            ripple: self.focal.ripple_geometry(self.style.focal_color),
            target_bounds: match self.last_target {
                Some(ResolvedTarget::Bounds(r)) => Some(r),
                _ => None,
            },
            primary_text,
            secondary_text,
        })
    }

    fn tick_timeout(&mut self, dt: f64) {
        if !matches!(self.state, PromptState::Revealing | PromptState::Revealed) {
            return;
        }
        let Some(remaining) = self.timeout_remaining else {
            return;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.timeout_remaining = Some(remaining);
            return;
        }
        self.timeout_remaining = None;
        self.set_state(PromptState::ShowForTimeout);
        self.dismiss();
    }

    /// Elements move and resize between frames; re-resolve the target every
    /// pass and re-prepare layout when its bounds changed.
    fn refresh_target(&mut self) {
        if !self.prepared
            || !matches!(self.state, PromptState::Revealing | PromptState::Revealed)
        {
            return;
        }
        if self.target.resolve().is_some_and(|t| Some(t) != self.last_target) {
            self.prepare_layout();
            // Prepared geometry is only a base; re-apply the in-flight
            // progress so the drawn shapes track the move this same frame.
            let (reveal, alpha) = self.current_progress();
            self.apply_progress(reveal, alpha);
        }
    }

    /// Reveal/alpha progress of the current exclusive animation, or fully
    /// shown when none is in flight.
    fn current_progress(&self) -> (f64, f64) {
        match self.current {
            Some(anim) => {
                let p = anim.timeline.progress();
                match anim.kind {
                    AnimKind::Reveal => (p, p),
                    AnimKind::Finish | AnimKind::Dismiss => (1.0 - p, 1.0 - p),
                }
            }
            None => (1.0, 1.0),
        }
    }

    fn tick_current(&mut self, dt: f64) {
        let Some(mut anim) = self.current else {
            return;
        };
        let finished = anim.timeline.advance(dt);
        self.current = Some(anim);
        let (reveal, alpha) = self.current_progress();
        self.apply_progress(reveal, alpha);
        if !finished {
            return;
        }
        self.current = None;
        match anim.kind {
            AnimKind::Reveal => {
                self.set_state(PromptState::Revealed);
                if self.style.idle_animation_enabled {
                    self.breathing =
                        Some(BreathingTimeline::new(self.style.breathing_leg_duration));
                    self.ripple = Some(RippleTimeline::new(self.style.ripple_duration));
                }
            }
            AnimKind::Finish => {
                self.set_state(PromptState::Finished);
                self.clean_up();
            }
            AnimKind::Dismiss => {
                self.set_state(PromptState::Dismissed);
                self.clean_up();
            }
        }
    }

    fn tick_idle(&mut self, dt: f64) {
        if self.state != PromptState::Revealed {
            return;
        }
        let Some(mut breathing) = self.breathing else {
            return;
        };
        let peak_passed = breathing.advance(dt);
        self.breathing = Some(breathing);
        self.focal.update(breathing.scale(), 1.0);
        let Some(mut ripple) = self.ripple else {
            return;
        };
        if peak_passed {
            ripple.restart();
        }
        ripple.advance(dt);
        self.ripple = Some(ripple);
        let alpha_mod = if ripple.is_active() { ripple.alpha() } else { 0.0 };
        self.focal.update_ripple(ripple.scale(), alpha_mod);
    }

    fn is_exiting(&self) -> bool {
        matches!(
            self.state,
            PromptState::Finishing | PromptState::Dismissing
        ) || self.state.is_terminal()
    }

    /// Starting a new current animation cancels any in-flight one without
    /// invoking its completion side effects, and always stops the idle
    /// timelines.
    fn start_exit(&mut self, kind: AnimKind, state: PromptState) {
        self.current = Some(CurrentAnimation {
            kind,
            timeline: Timeline::new(self.style.exit_duration, self.style.ease),
        });
        self.breathing = None;
        self.ripple = None;
        self.timeout_remaining = None;
        self.focal.update_ripple(0.0, 0.0);
        self.set_state(state);
    }

    fn prepare_layout(&mut self) -> bool {
        let Some(resolved) = self.target.resolve() else {
            return false;
        };
        self.last_target = Some(resolved);
        match resolved {
            ResolvedTarget::Bounds(r) => self.focal.prepare_rect(r, self.style.focal_padding),
            ResolvedTarget::Point(p) => self.focal.prepare_point(p, self.style.focal_radius),
        }
        let (layout_bounds, clip) = self.env.layout_bounds();
        let focal_bounds = self.focal.bounds();
        self.text.prepare(
            &self.style,
            focal_bounds,
            layout_bounds,
            clip,
            self.env.measurer.as_ref(),
        );
        self.background.prepare(
            focal_bounds,
            self.focal.center(),
            self.text.bounds(),
            layout_bounds,
            self.text.is_above(),
            self.text.is_left(),
            self.style.focal_padding,
            self.style.text_padding,
        );
        self.prepared = true;
        true
    }

    fn apply_progress(&mut self, reveal: f64, alpha: f64) {
        self.focal.update(reveal, alpha);
        self.text.update(reveal, alpha);
        self.background.update(reveal, alpha);
    }

    fn clean_up(&mut self) {
        self.current = None;
        self.breathing = None;
        self.ripple = None;
        self.timeout_remaining = None;
    }

    fn set_state(&mut self, state: PromptState) {
        self.state = state;
        tracing::debug!(?state, "prompt state changed");
        for subscriber in &mut self.subscribers {
            subscriber(state);
        }
    }
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt")
            .field("state", &self.state)
            .field("target", &self.target)
            .field("prepared", &self.prepared)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/machine.rs"]
mod tests;
