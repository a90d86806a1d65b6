//! The safety page.
//!
//! One presentation component owning the two pieces of transient UI state
//! (the emergency confirmation prompt and the last-known position) plus
//! the two capabilities every interaction ends in: a one-way deep-link
//! dispatcher and a one-shot locator. The four page sections have no data
//! flow between them; each interaction here stands alone.

use tracing::{debug, info, warn};

use crate::config::ContactsConfig;
use crate::dispatch::Dispatch;
use crate::emergency::EmergencyPrompt;
use crate::error::Result;
use crate::links;
use crate::location::{LocateOnce, Position};
use crate::report::IncidentReport;
use crate::tips::{safety_tips, SafetyTip};

/// The safety page and its transient state.
///
/// Generic over the dispatch and location capabilities so tests can
/// substitute recording fakes for the real OS facilities.
#[derive(Debug)]
pub struct SafetyPage<D, L> {
    contacts: ContactsConfig,
    dispatcher: D,
    locator: L,
    prompt: EmergencyPrompt,
    current_location: Option<Position>,
}

impl<D: Dispatch, L: LocateOnce> SafetyPage<D, L> {
    /// Create a page with the given contacts and capabilities.
    ///
    /// The prompt starts hidden and no position is held.
    #[must_use]
    pub fn new(contacts: ContactsConfig, dispatcher: D, locator: L) -> Self {
        Self {
            contacts,
            dispatcher,
            locator,
            prompt: EmergencyPrompt::new(),
            current_location: None,
        }
    }

    /// The contact numbers this page targets.
    #[must_use]
    pub fn contacts(&self) -> &ContactsConfig {
        &self.contacts
    }

    /// The dispatcher behind this page (mainly for test inspection).
    #[must_use]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Check whether the emergency confirmation prompt is visible.
    #[must_use]
    pub fn is_emergency_prompt_visible(&self) -> bool {
        self.prompt.is_visible()
    }

    /// The last successfully acquired position, if any.
    #[must_use]
    pub fn current_location(&self) -> Option<&Position> {
        self.current_location.as_ref()
    }

    /// The static safety-tips section.
    #[must_use]
    pub fn tips(&self) -> &'static [SafetyTip] {
        safety_tips()
    }

    /// Request the emergency action.
    ///
    /// Never dials anything; only raises the confirmation prompt.
    pub fn request_emergency(&mut self) {
        debug!("emergency action requested; raising confirmation prompt");
        self.prompt.request();
    }

    /// Confirm the emergency action.
    ///
    /// If the prompt was visible, hands a `tel:` deep link for the
    /// emergency number to the dialer and lowers the prompt. Confirming
    /// while the prompt is hidden does nothing. The dial handoff is
    /// fire-and-forget; there is no callback for whether the call
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be built or the handoff cannot
    /// be started.
    pub fn confirm_emergency(&mut self) -> Result<()> {
        if !self.prompt.confirm() {
            debug!("emergency confirmation with no prompt raised; ignoring");
            return Ok(());
        }

        let link = links::dial_link(&self.contacts.emergency_number)?;
        info!(number = %self.contacts.emergency_number, "handing off to the dialer");
        self.dispatcher.dispatch(&link)
    }

    /// Cancel the emergency action, lowering the prompt with no side effect.
    pub fn cancel_emergency(&mut self) {
        debug!("emergency action cancelled");
        self.prompt.cancel();
    }

    /// Share the device location with the configured chat recipient.
    ///
    /// Requests one position fix. On success the fix is stored (overwriting
    /// any previous one; last writer wins), wrapped in a map link, and
    /// handed to the chat app as a deep link. On failure the error is
    /// logged and nothing else happens: no retry, no user-facing error
    /// state, and the stored position is unchanged.
    ///
    /// Returns the shared position, or `None` when the fix failed.
    ///
    /// # Errors
    ///
    /// Returns an error if link construction or the handoff fails; a
    /// failed location fix is not an error by design.
    pub async fn share_location(&mut self) -> Result<Option<Position>> {
        let position = match self.locator.current_position().await {
            Ok(position) => position,
            Err(reason) => {
                warn!(%reason, "location fix failed; nothing shared");
                return Ok(None);
            }
        };

        self.current_location = Some(position.clone());

        let map = links::map_link(&position)?;
        let body = format!("My current location: {map}");
        let link = links::chat_link(&self.contacts.chat_recipient, &body)?;

        info!(%position, "handing location off to the chat app");
        self.dispatcher.dispatch(&link)?;
        Ok(Some(position))
    }

    /// Submit an incident report to the emergency number via SMS.
    ///
    /// The report's required fields were already enforced at its
    /// construction; this composes the message body into an `sms:` deep
    /// link and hands it to the platform's messaging app. There is no
    /// confirmation step and no feedback after the handoff.
    ///
    /// # Errors
    ///
    /// Returns an error if link construction or the handoff fails.
    pub fn submit_report(&self, report: &IncidentReport) -> Result<()> {
        let link = links::sms_link(&self.contacts.emergency_number, &report.message_body())?;
        info!(reporter = report.name(), "handing report off to the SMS composer");
        self.dispatcher.dispatch(&link)
    }
}
