//! Emergency confirmation state machine.
//!
//! Requesting the emergency action never dials anything; it only raises a
//! confirmation prompt. The prompt has exactly two states, and every
//! transition lands back in one of them. The dial handoff itself belongs
//! to the page, not to this state machine.

/// State of the emergency confirmation prompt.
///
/// `Idle` is the hidden prompt; `Confirming` is the visible one. The flow
/// is `Idle → Confirming` on request, and `Confirming → Idle` on either
/// confirm or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmergencyPrompt {
    /// No confirmation in progress; the prompt is hidden.
    #[default]
    Idle,

    /// Waiting for the user to confirm or cancel; the prompt is visible.
    Confirming,
}

impl EmergencyPrompt {
    /// Create a new prompt in the hidden state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the prompt is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Confirming)
    }

    /// Raise the prompt. Requesting while already confirming stays visible.
    pub fn request(&mut self) {
        *self = Self::Confirming;
    }

    /// Lower the prompt after a confirmed handoff.
    ///
    /// Returns `true` if the prompt was visible, meaning the confirmation
    /// was valid and the caller should perform the dial handoff.
    pub fn confirm(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = Self::Idle;
        was_visible
    }

    /// Lower the prompt without any side effect.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

impl std::fmt::Display for EmergencyPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Confirming => write!(f, "confirming"),
        }
    }
}
