//! Static safety-tips content.
//!
//! A fixed, ordered list of (title, description, icon) triples. Purely
//! presentational: no state, no lookup, no interaction.

use serde::Serialize;

/// Icon associated with a safety tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipIcon {
    /// A warning triangle.
    AlertTriangle,
    /// A map pin.
    MapPin,
    /// A telephone handset.
    Phone,
}

impl std::fmt::Display for TipIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlertTriangle => write!(f, "alert-triangle"),
            Self::MapPin => write!(f, "map-pin"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// A single safety tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyTip {
    /// Short tip title.
    pub title: &'static str,
    /// One-sentence tip body.
    pub description: &'static str,
    /// Icon shown next to the tip.
    pub icon: TipIcon,
}

/// The hard-coded tip list, in display order.
const SAFETY_TIPS: &[SafetyTip] = &[
    SafetyTip {
        title: "Stay Alert",
        description: "Always be aware of your surroundings and trust your instincts.",
        icon: TipIcon::AlertTriangle,
    },
    SafetyTip {
        title: "Share Location",
        description: "Let trusted contacts know your location when traveling.",
        icon: TipIcon::MapPin,
    },
    SafetyTip {
        title: "Emergency Contacts",
        description: "Keep important numbers readily available.",
        icon: TipIcon::Phone,
    },
];

/// Get the safety tips in display order.
#[must_use]
pub fn safety_tips() -> &'static [SafetyTip] {
    SAFETY_TIPS
}
