//! `lifeline` - A personal safety page with emergency deep-link handoffs
//!
//! This library provides the core of a client-side safety page: static
//! safety tips, an emergency-call confirmation flow, one-shot device
//! location sharing via a chat deep link, and incident-report submission
//! via an SMS deep link. All behavior ends in a one-way handoff to the
//! platform; nothing is persisted.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod emergency;
pub mod error;
pub mod links;
pub mod location;
pub mod logging;
pub mod page;
pub mod report;
pub mod tips;

pub use config::Config;
pub use dispatch::{Dispatch, RecordingDispatch};
pub use emergency::EmergencyPrompt;
pub use error::{Error, Result};
pub use location::{LocateOnce, LocationError, Position};
pub use logging::init_logging;
pub use page::SafetyPage;
pub use report::IncidentReport;
pub use tips::{safety_tips, SafetyTip, TipIcon};
