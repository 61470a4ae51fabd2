//! Canned detection records shown by the live demo.
//!
//! There are exactly three, compiled in. Activating one stamps it with the
//! current time, producing an [`Alert`].

use serde::{Deserialize, Serialize};

/// Shown if the caller could not produce a timestamp.
pub const FALLBACK_TIMESTAMP: &str = "Just now (UTC)";

/// Which canned scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKey {
    /// Unregistered trawler in a protected area
    Fishing,
    /// Dark slick consistent with an oil spill
    Spill,
    /// Coral bleaching event
    Reef,
}

impl ScenarioKey {
    /// All keys, in button order.
    pub const ALL: [ScenarioKey; 3] = [ScenarioKey::Fishing, ScenarioKey::Spill, ScenarioKey::Reef];

    /// The compiled-in record for this key.
    pub fn scenario(self) -> &'static Scenario {
        match self {
            ScenarioKey::Fishing => &SCENARIOS[0],
            ScenarioKey::Spill => &SCENARIOS[1],
            ScenarioKey::Reef => &SCENARIOS[2],
        }
    }

    /// Trigger button label.
    pub fn button_label(self) -> &'static str {
        match self {
            ScenarioKey::Fishing => "Illegal Fishing",
            ScenarioKey::Spill => "Oil Spill",
            ScenarioKey::Reef => "Reef Degradation",
        }
    }

    /// Lowercase identifier, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKey::Fishing => "fishing",
            ScenarioKey::Spill => "spill",
            ScenarioKey::Reef => "reef",
        }
    }
}

/// Marker offset on the map image, in percent of its box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPosition {
    /// Distance from the top edge
    pub top_pct: f32,
    /// Distance from the left edge
    pub left_pct: f32,
}

impl MarkerPosition {
    /// Inline style placing the (centred) marker.
    pub fn css(self) -> String {
        format!("top: {}%; left: {}%;", self.top_pct, self.left_pct)
    }
}

/// A fixed detection record.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Key this record answers to
    pub key: ScenarioKey,
    /// Where the pulsing dot goes on the map
    pub marker: MarkerPosition,
    /// Panel heading
    pub title: &'static str,
    /// Panel body
    pub message: &'static str,
    /// Human-readable lat/long
    pub coordinates: &'static str,
    /// Percentage string, e.g. "97%"
    pub confidence: &'static str,
    /// Vessel type or affected area
    pub detail: &'static str,
}

/// The three records, indexed by [`ScenarioKey::scenario`].
pub static SCENARIOS: [Scenario; 3] = [
    Scenario {
        key: ScenarioKey::Fishing,
        marker: MarkerPosition { top_pct: 45.0, left_pct: 60.0 },
        title: "ALERT: Illegal Fishing Vessel Detected",
        message: "A vessel has been detected operating in a restricted marine protected area.",
        coordinates: "14.123 N, 121.456 W",
        confidence: "97%",
        detail: "Trawler (unregistered)",
    },
    Scenario {
        key: ScenarioKey::Spill,
        marker: MarkerPosition { top_pct: 65.0, left_pct: 30.0 },
        title: "ALERT: Potential Oil Spill Detected",
        message: "An anomalous dark slick consistent with an oil spill has been identified.",
        coordinates: "13.887 N, 120.912 W",
        confidence: "94%",
        detail: "Estimated Area: 2.5 sq km",
    },
    Scenario {
        key: ScenarioKey::Reef,
        marker: MarkerPosition { top_pct: 30.0, left_pct: 75.0 },
        title: "ALERT: Coral Bleaching Event Detected",
        message: "Significant change in coral color detected, indicating a potential bleaching event.",
        coordinates: "15.054 N, 122.118 W",
        confidence: "91%",
        detail: "Affected Area: ~15 hectares",
    },
];

/// An activated scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    key: ScenarioKey,
    timestamp: String,
}

impl Alert {
    /// Stamp `key` with `timestamp` (a UTC string). Blank input falls back
    /// to [`FALLBACK_TIMESTAMP`].
    pub fn new(key: ScenarioKey, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        let timestamp = if timestamp.trim().is_empty() {
            FALLBACK_TIMESTAMP.to_string()
        } else {
            timestamp
        };
        Self { key, timestamp }
    }

    /// Which scenario fired.
    pub fn key(&self) -> ScenarioKey {
        self.key
    }

    /// The record behind this alert.
    pub fn scenario(&self) -> &'static Scenario {
        self.key.scenario()
    }

    /// When it fired.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
