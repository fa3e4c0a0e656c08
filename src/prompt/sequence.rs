use crate::foundation::core::Point;
use crate::host::frame::FrameGeometry;
use crate::prompt::machine::Prompt;
use crate::prompt::state::PromptState;

/// An ordered chain of prompts shown one at a time.
///
/// Empty slots (`None`) are skipped without error. The next prompt starts
/// synchronously within the same host dispatch that observed the previous
/// prompt leaving the screen; when none remain the completion callback
/// fires once.
#[derive(Default)]
pub struct PromptSequence {
    items: Vec<Option<Prompt>>,
    index: Option<usize>,
    complete: bool,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl PromptSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prompt slot; `None` is tolerated and skipped when reached.
    pub fn add(&mut self, prompt: Option<Prompt>) -> &mut Self {
        self.items.push(prompt);
        self
    }

    /// Set the callback fired when the last prompt leaves the screen.
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) -> &mut Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Show the first available prompt; completes immediately when the
    /// sequence holds no prompts at all.
    #[tracing::instrument(skip(self))]
    pub fn show(&mut self) {
        if self.complete || self.index.is_some() {
            return;
        }
        self.start_from(0);
    }

    /// Whether every prompt has left the screen.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The prompt currently on screen.
    pub fn current(&self) -> Option<&Prompt> {
        self.items.get(self.index?)?.as_ref()
    }

    /// Advance the current prompt's timelines and return its draw list.
    pub fn tick(&mut self, dt: f64) -> Option<FrameGeometry> {
        let prompt = self.current_mut()?;
        // A deferred reveal (target not yet attached) retries each tick.
        if prompt.state() == PromptState::NotShown {
            prompt.show();
        }
        let frame = prompt.tick(dt);
        self.advance_if_done();
        frame
    }

    /// Forward a pointer press to the current prompt.
    pub fn pointer_press(&mut self, p: Point) -> bool {
        let Some(prompt) = self.current_mut() else {
            return false;
        };
        let consumed = prompt.pointer_press(p);
        self.advance_if_done();
        consumed
    }

    /// Forward a back-button press to the current prompt.
    pub fn back_pressed(&mut self) -> bool {
        let Some(prompt) = self.current_mut() else {
            return false;
        };
        let consumed = prompt.back_pressed();
        self.advance_if_done();
        consumed
    }

    fn current_mut(&mut self) -> Option<&mut Prompt> {
        self.items.get_mut(self.index?)?.as_mut()
    }

    fn start_from(&mut self, from: usize) {
        for idx in from..self.items.len() {
            if let Some(prompt) = self.items[idx].as_mut() {
                self.index = Some(idx);
                prompt.show();
                return;
            }
        }
        self.index = None;
        if !self.complete {
            self.complete = true;
            tracing::debug!("prompt sequence complete");
            if let Some(callback) = &mut self.on_complete {
                callback();
            }
        }
    }

    /// A prompt leaves the sequence once it is terminal, or once it is
    /// pressed while the corresponding auto transition is disabled (no
    /// terminal transition would ever follow).
    fn advance_if_done(&mut self) {
        let Some(idx) = self.index else {
            return;
        };
        let Some(prompt) = self.items.get(idx).and_then(|p| p.as_ref()) else {
            return;
        };
        let state = prompt.state();
        let done = state.is_terminal()
            || (state == PromptState::FocalPressed && !prompt.style().auto_finish)
            || (matches!(
                state,
                PromptState::NonFocalPressed | PromptState::BackButtonPressed
            ) && !prompt.style().auto_dismiss);
        if done {
            self.start_from(idx + 1);
        }
    }
}

impl std::fmt::Debug for PromptSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptSequence")
            .field("len", &self.items.len())
            .field("index", &self.index)
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/sequence.rs"]
mod tests;
