//! One-way deep-link dispatch.
//!
//! Every page interaction ends by handing a deep link to the platform:
//! the dialer, the SMS composer, or the chat app. That handoff is
//! irrevocable and reports nothing back, so it is modeled as a capability
//! with a single one-way operation. The binary plugs in a system opener;
//! tests plug in a recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use url::Url;

use crate::error::Result;

/// A capability that hands a deep link to the platform.
///
/// Dispatch is fire-and-forget: once the link leaves through this seam
/// there is no channel for learning whether the dialer, composer, or chat
/// app completed anything. Implementations may only fail locally, before
/// the handoff starts.
pub trait Dispatch: Send + Sync {
    /// Hand the given deep link to the platform.
    ///
    /// # Errors
    ///
    /// Returns an error only when the handoff cannot be started at all,
    /// such as the OS opener failing to spawn.
    fn dispatch(&self, link: &Url) -> Result<()>;
}

impl<T: Dispatch + ?Sized> Dispatch for Box<T> {
    fn dispatch(&self, link: &Url) -> Result<()> {
        (**self).dispatch(link)
    }
}

/// A dispatcher that prints links instead of opening them.
///
/// Used for dry runs: the composed deep link goes to stdout and nothing
/// reaches the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintingDispatch;

impl Dispatch for PrintingDispatch {
    fn dispatch(&self, link: &Url) -> Result<()> {
        tracing::debug!(uri = %link, "dry-run dispatch");
        println!("{link}");
        Ok(())
    }
}

/// A dispatcher that records every link it receives.
///
/// The substitute for real OS facilities in tests: assertions read back
/// exactly which deep links an interaction produced, in order.
#[derive(Debug, Default)]
pub struct RecordingDispatch {
    sent: Mutex<Vec<Url>>,
}

impl RecordingDispatch {
    /// Create a new recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All links dispatched so far, in dispatch order.
    #[must_use]
    pub fn sent(&self) -> Vec<Url> {
        self.log().clone()
    }

    /// Number of links dispatched so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.log().len()
    }

    /// The most recently dispatched link, if any.
    #[must_use]
    pub fn last(&self) -> Option<Url> {
        self.log().last().cloned()
    }

    fn log(&self) -> MutexGuard<'_, Vec<Url>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Dispatch for RecordingDispatch {
    fn dispatch(&self, link: &Url) -> Result<()> {
        self.log().push(link.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_dispatch_starts_empty() {
        let dispatcher = RecordingDispatch::new();
        assert_eq!(dispatcher.count(), 0);
        assert!(dispatcher.sent().is_empty());
        assert!(dispatcher.last().is_none());
    }

    #[test]
    fn test_recording_dispatch_records_in_order() {
        let dispatcher = RecordingDispatch::new();
        let first = Url::parse("tel:112").unwrap();
        let second = Url::parse("sms:112?body=test").unwrap();

        dispatcher.dispatch(&first).unwrap();
        dispatcher.dispatch(&second).unwrap();

        assert_eq!(dispatcher.count(), 2);
        assert_eq!(dispatcher.sent(), vec![first, second.clone()]);
        assert_eq!(dispatcher.last(), Some(second));
    }

    #[test]
    fn test_printing_dispatch_succeeds() {
        let dispatcher = PrintingDispatch;
        let link = Url::parse("tel:112").unwrap();
        assert!(dispatcher.dispatch(&link).is_ok());
    }

    #[test]
    fn test_boxed_dispatch_forwards() {
        let dispatcher: Box<dyn Dispatch> = Box::new(RecordingDispatch::new());
        let link = Url::parse("tel:112").unwrap();
        assert!(dispatcher.dispatch(&link).is_ok());
    }
}
