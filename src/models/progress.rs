//! Progression models: progress bars, prestige state and guarded
//! projections.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Current position within a progression.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub progress: i64,
}

/// The next threshold of a progression.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub needed: i64,
}

/// Progress toward the next threshold of some ladder.
///
/// `progress <= needed` except at the terminal tier, where `complete` is set
/// and the bar renders full.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressBar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<u8>,
    pub current: ProgressPoint,
    pub next: ProgressTarget,
}

impl ProgressBar {
    pub fn new(progress: i64, needed: i64) -> Self {
        ProgressBar {
            current: ProgressPoint {
                color: None,
                progress,
            },
            next: ProgressTarget {
                color: None,
                needed,
            },
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn current_color(mut self, color: impl Into<String>) -> Self {
        self.current.color = Some(color.into());
        self
    }

    pub fn next_color(mut self, color: impl Into<String>) -> Self {
        self.next.color = Some(color.into());
        self
    }

    /// Mark the terminal tier: the ladder is finished.
    pub fn complete(mut self) -> Self {
        self.complete = Some(1);
        self
    }
}

/// A projected future statistic.
///
/// Projections divide by live counters; when any divisor is zero the
/// projection is not computed and serializes as the literal `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Known(i64),
    Unknown,
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Projection::Known(value) => serializer.serialize_i64(*value),
            Projection::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

/// One end of a prestige window (the current tier or the next one).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrestigeTierRef {
    pub level: i64,
    pub name: String,
    pub color: String,
    /// Plain display form, e.g. `[520✫]`.
    pub formatted: String,
}

/// A player's position between two prestige tiers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrestigeStatus {
    pub previous: PrestigeTierRef,
    pub next: PrestigeTierRef,
    pub progress: ProgressBar,
    pub remaining: i64,
    pub percent: f64,
    /// Estimated-at-next-prestige stats, keyed `{stat}_estimated` and
    /// `{stat}_at`.
    #[serde(flatten)]
    pub projections: BTreeMap<String, Projection>,
}
