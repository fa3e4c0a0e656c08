/// Lifecycle state of a prompt. Exactly one is active per prompt at a time,
/// mutated only by the state machine in response to validated transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PromptState {
    /// Created but not yet shown.
    #[default]
    NotShown,
    /// Reveal animation in flight.
    Revealing,
    /// Fully revealed, awaiting user action (idle animations run here).
    Revealed,
    /// User pressed inside the focal.
    FocalPressed,
    /// User pressed outside the focal.
    NonFocalPressed,
    /// User pressed the back button.
    BackButtonPressed,
    /// Finish animation in flight.
    Finishing,
    /// Terminal: finished after a successful target press.
    Finished,
    /// Dismiss animation in flight.
    Dismissing,
    /// Terminal: dismissed without a target press.
    Dismissed,
    /// The show-for timeout elapsed; immediately followed by `Dismissing`.
    ShowForTimeout,
}

impl PromptState {
    /// Terminal states: the host may detach the prompt.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Dismissed)
    }

    /// States with an exclusive current animation in flight.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Revealing | Self::Finishing | Self::Dismissing)
    }

    /// States in which the prompt has visible geometry.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::NotShown | Self::Finished | Self::Dismissed)
    }

    /// Whether this state belongs to the dismissal path.
    pub fn was_dismissed(self) -> bool {
        matches!(
            self,
            Self::NonFocalPressed
                | Self::BackButtonPressed
                | Self::ShowForTimeout
                | Self::Dismissing
                | Self::Dismissed
        )
    }

    /// Whether this state belongs to the finish path.
    pub fn was_finished(self) -> bool {
        matches!(self, Self::FocalPressed | Self::Finishing | Self::Finished)
    }
}
