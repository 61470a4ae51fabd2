//! Live demo widget: state machine behind the trigger buttons, the map marker
//! and the alert panel.
//!
//! ```text
//!            trigger(spill|reef|fishing*)          * baseline only
//!   Idle ─────────────────────────────────▶ Showing(alert)
//!    │ trigger(fishing), enhanced
//!    ▼
//!  Uploading ──begin_analysis──▶ Analyzing ──complete──▶ Detected(alert) | Clear | Failed
//!                                   ▲                               │
//!                                   └──────── begin_analysis ───────┘
//!
//!   reset() from anywhere ─▶ Idle
//! ```
//!
//! Uploads are not serialised: every [`DemoWidget::begin_analysis`] hands out
//! a fresh [`AnalysisTicket`], and only the newest ticket may complete.

use serde::{Deserialize, Serialize};

use crate::detection::Verdict;
use crate::error::ClassifierError;
use crate::scenario::{Alert, MarkerPosition, ScenarioKey};

/// Title shown before anything has been triggered.
pub const IDLE_TITLE: &str = "Awaiting Detection...";
/// Body shown before anything has been triggered.
pub const IDLE_MESSAGE: &str = "Select a scenario to begin simulation.";

/// Which flavour of the demo the page runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    /// All three buttons show canned records.
    #[default]
    Baseline,
    /// "Illegal Fishing" asks for a photo and runs the image classifier.
    Enhanced,
}

/// Where the widget is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DemoState {
    /// Nothing selected
    #[default]
    Idle,
    /// A canned scenario is on screen
    Showing(Alert),
    /// File picker revealed, waiting for a photo
    Uploading,
    /// Classifier running
    Analyzing,
    /// Classifier flagged the photo; the fishing record is on screen
    Detected(Alert),
    /// Classifier found nothing
    Clear,
    /// Classifier call failed
    Failed,
}

/// What a trigger button asks the page to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Scenario is displayed; nothing else to do
    Displayed(ScenarioKey),
    /// Reveal the file picker
    OpenUploader,
}

/// Identifies one classifier run. Completions with an outdated ticket are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// Visual tone of a [`Notification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Threat found
    Success,
    /// Nothing found
    Info,
    /// Something broke
    Error,
}

impl Tone {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "toast toast-success",
            Tone::Info => "toast toast-info",
            Tone::Error => "toast toast-error",
        }
    }
}

/// A transient toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Colour scheme
    pub tone: Tone,
    /// Bold first line
    pub title: String,
    /// Explanation
    pub body: String,
}

impl Notification {
    fn threat(label: &str, score: f32) -> Self {
        Self {
            tone: Tone::Success,
            title: "Illegal fishing activity detected".into(),
            body: format!(
                "The AI agent recognised \"{}\" ({:.0}% match) in your photo.",
                label,
                score * 100.0
            ),
        }
    }

    fn no_threat() -> Self {
        Self {
            tone: Tone::Info,
            title: "No threat detected".into(),
            body: "The uploaded image shows no signs of illegal fishing activity.".into(),
        }
    }

    fn failure() -> Self {
        Self {
            tone: Tone::Error,
            title: "Analysis failed".into(),
            body: "We couldn't analyze that image. Please try another photo.".into(),
        }
    }
}

/// Extra lines under an alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelDetails {
    /// Copied from the scenario record
    pub coordinates: &'static str,
    /// Copied from the scenario record
    pub confidence: &'static str,
    /// Copied from the scenario record
    pub detail: &'static str,
    /// When the alert fired
    pub timestamp: String,
}

/// Everything the map and the side panel display for the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Heading
    pub title: &'static str,
    /// Body
    pub message: &'static str,
    /// Present only while an alert is on screen
    pub details: Option<PanelDetails>,
    /// Present only while an alert is on screen
    pub marker: Option<MarkerPosition>,
}

impl Panel {
    fn text(title: &'static str, message: &'static str) -> Self {
        Self {
            title,
            message,
            details: None,
            marker: None,
        }
    }

    fn alert(alert: &Alert) -> Self {
        let s = alert.scenario();
        Self {
            title: s.title,
            message: s.message,
            details: Some(PanelDetails {
                coordinates: s.coordinates,
                confidence: s.confidence,
                detail: s.detail,
                timestamp: alert.timestamp().to_string(),
            }),
            marker: Some(s.marker),
        }
    }
}

/// The demo widget's whole local state.
#[derive(Clone, Debug, Default)]
pub struct DemoWidget {
    variant: DemoVariant,
    state: DemoState,
    latest_ticket: u64,
}

impl DemoWidget {
    /// Fresh widget in [`DemoState::Idle`].
    pub fn new(variant: DemoVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Variant chosen at construction.
    pub fn variant(&self) -> DemoVariant {
        self.variant
    }

    /// Current state.
    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// Scenario currently driving the panel, if any.
    pub fn active_scenario(&self) -> Option<ScenarioKey> {
        match &self.state {
            DemoState::Showing(alert) | DemoState::Detected(alert) => Some(alert.key()),
            _ => None,
        }
    }

    /// Busy indicator.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, DemoState::Analyzing)
    }

    /// Whether the file picker is on screen. It stays up after a negative or
    /// failed run so another photo can be tried.
    pub fn uploader_visible(&self) -> bool {
        matches!(
            self.state,
            DemoState::Uploading | DemoState::Analyzing | DemoState::Clear | DemoState::Failed
        )
    }

    /// A scenario button was pressed.
    pub fn trigger(&mut self, key: ScenarioKey, timestamp: &str) -> Trigger {
        // any in-flight run is now stale
        self.latest_ticket += 1;
        if key == ScenarioKey::Fishing && self.variant == DemoVariant::Enhanced {
            self.transition(DemoState::Uploading);
            return Trigger::OpenUploader;
        }
        self.transition(DemoState::Showing(Alert::new(key, timestamp)));
        Trigger::Displayed(key)
    }

    /// A photo was picked; the caller is about to run the classifier.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.latest_ticket += 1;
        self.transition(DemoState::Analyzing);
        AnalysisTicket(self.latest_ticket)
    }

    /// Feed back the classifier outcome for `ticket`.
    ///
    /// Returns the toast to show, or `None` if the ticket was superseded by a
    /// later upload, trigger or reset.
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<Verdict, ClassifierError>,
        timestamp: &str,
    ) -> Option<Notification> {
        if ticket.0 != self.latest_ticket || !self.is_busy() {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "stale analysis dropped");
            return None;
        }

        let (next, notification) = match outcome {
            Ok(Verdict::ThreatDetected { label, score }) => (
                DemoState::Detected(Alert::new(ScenarioKey::Fishing, timestamp)),
                Notification::threat(&label, score),
            ),
            Ok(Verdict::NoThreat) => (DemoState::Clear, Notification::no_threat()),
            Err(err) => {
                tracing::error!(error = %err, "image analysis failed");
                (DemoState::Failed, Notification::failure())
            }
        };
        self.transition(next);
        Some(notification)
    }

    /// Back to the initial display.
    pub fn reset(&mut self) {
        self.latest_ticket += 1;
        self.transition(DemoState::Idle);
    }

    /// What to draw.
    pub fn panel(&self) -> Panel {
        match &self.state {
            DemoState::Idle => Panel::text(IDLE_TITLE, IDLE_MESSAGE),
            DemoState::Showing(alert) | DemoState::Detected(alert) => Panel::alert(alert),
            DemoState::Uploading => Panel::text(
                "Upload a Photo for Analysis",
                "Choose an image of a vessel or coastline and our AI agent will inspect it.",
            ),
            DemoState::Analyzing => Panel::text(
                "Analyzing Image...",
                "The vision model is scanning your photo for fishing activity.",
            ),
            DemoState::Clear => Panel::text(
                "No Threat Detected",
                "The uploaded image shows no signs of illegal fishing activity.",
            ),
            DemoState::Failed => Panel::text(
                "Analysis Failed",
                "The image could not be analyzed. Try another photo.",
            ),
        }
    }

    fn transition(&mut self, next: DemoState) {
        tracing::debug!(from = ?self.state, to = ?next, "demo state");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::FALLBACK_TIMESTAMP;
    use pretty_assertions::assert_eq;

    const NOW: &str = "Mon, 19 Oct 2026 12:00:00 GMT";
    const LATER: &str = "Mon, 19 Oct 2026 12:05:00 GMT";

    fn fishing_boat() -> Result<Verdict, ClassifierError> {
        Ok(Verdict::ThreatDetected {
            label: "fishing boat".into(),
            score: 0.5,
        })
    }

    #[test]
    fn starts_idle() {
        let widget = DemoWidget::new(DemoVariant::Baseline);
        let panel = widget.panel();
        assert_eq!(panel.title, IDLE_TITLE);
        assert_eq!(panel.message, IDLE_MESSAGE);
        assert_eq!(panel.details, None);
        assert_eq!(panel.marker, None);
        assert!(!widget.is_busy());
        assert!(!widget.uploader_visible());
    }

    #[test]
    fn each_scenario_shows_its_record() {
        for key in ScenarioKey::ALL {
            let mut widget = DemoWidget::new(DemoVariant::Baseline);
            assert_eq!(widget.trigger(key, NOW), Trigger::Displayed(key));

            let s = key.scenario();
            let panel = widget.panel();
            assert_eq!(panel.title, s.title);
            assert_eq!(panel.message, s.message);
            assert_eq!(panel.marker, Some(s.marker));
            let details = panel.details.expect("details");
            assert_eq!(details.coordinates, s.coordinates);
            assert_eq!(details.confidence, s.confidence);
            assert_eq!(details.detail, s.detail);
            assert_eq!(details.timestamp, NOW);
            assert_eq!(widget.active_scenario(), Some(key));
        }
    }

    #[test]
    fn timestamp_is_never_empty() {
        let mut widget = DemoWidget::new(DemoVariant::Baseline);
        widget.trigger(ScenarioKey::Reef, "");
        let details = widget.panel().details.expect("details");
        assert_eq!(details.timestamp, FALLBACK_TIMESTAMP);
    }

    #[test]
    fn second_scenario_replaces_first() {
        let mut widget = DemoWidget::new(DemoVariant::Baseline);
        widget.trigger(ScenarioKey::Spill, NOW);
        widget.trigger(ScenarioKey::Reef, LATER);

        let expected = DemoWidget {
            variant: DemoVariant::Baseline,
            state: DemoState::Showing(Alert::new(ScenarioKey::Reef, LATER)),
            latest_ticket: 0,
        }
        .panel();
        assert_eq!(widget.panel(), expected);
        assert_eq!(widget.active_scenario(), Some(ScenarioKey::Reef));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        assert!(widget.uploader_visible());

        widget.reset();
        assert_eq!(widget.state(), &DemoState::Idle);
        assert_eq!(widget.panel().title, IDLE_TITLE);
        assert!(!widget.uploader_visible());
        assert_eq!(widget.active_scenario(), None);
    }

    #[test]
    fn baseline_fishing_is_canned() {
        let mut widget = DemoWidget::new(DemoVariant::Baseline);
        assert_eq!(
            widget.trigger(ScenarioKey::Fishing, NOW),
            Trigger::Displayed(ScenarioKey::Fishing)
        );
        assert!(!widget.uploader_visible());
    }

    #[test]
    fn enhanced_fishing_opens_uploader() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Spill, NOW);
        assert_eq!(widget.trigger(ScenarioKey::Fishing, NOW), Trigger::OpenUploader);
        assert_eq!(widget.state(), &DemoState::Uploading);
        assert_eq!(widget.panel().marker, None);

        // spill and reef stay canned in the enhanced variant
        assert_eq!(
            widget.trigger(ScenarioKey::Reef, NOW),
            Trigger::Displayed(ScenarioKey::Reef)
        );
    }

    #[test]
    fn positive_result_shows_fishing_scenario() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();
        assert!(widget.is_busy());

        let toast = widget
            .complete_analysis(ticket, fishing_boat(), LATER)
            .expect("notification");
        assert_eq!(toast.tone, Tone::Success);
        assert!(toast.body.contains("fishing boat"));
        assert!(toast.body.contains("50%"));

        assert!(!widget.is_busy());
        assert!(!widget.uploader_visible());
        assert_eq!(widget.active_scenario(), Some(ScenarioKey::Fishing));
        let panel = widget.panel();
        assert_eq!(panel.title, "ALERT: Illegal Fishing Vessel Detected");
        assert_eq!(panel.details.expect("details").timestamp, LATER);
    }

    #[test]
    fn negative_result_shows_no_marker() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();

        let toast = widget
            .complete_analysis(ticket, Ok(Verdict::NoThreat), NOW)
            .expect("notification");
        assert_eq!(toast.tone, Tone::Info);
        assert_eq!(toast.title, "No threat detected");
        assert_eq!(widget.state(), &DemoState::Clear);
        assert_eq!(widget.panel().marker, None);
        assert_eq!(widget.active_scenario(), None);
    }

    #[test]
    fn classifier_error_clears_busy_indicator() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();

        let toast = widget
            .complete_analysis(
                ticket,
                Err(ClassifierError::Inference("tensor shape mismatch".into())),
                NOW,
            )
            .expect("notification");
        assert_eq!(toast.tone, Tone::Error);
        assert_eq!(toast.title, "Analysis failed");
        assert!(!widget.is_busy());
        assert_eq!(widget.state(), &DemoState::Failed);
        assert!(widget.uploader_visible());
    }

    #[test]
    fn newer_upload_supersedes_older() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let first = widget.begin_analysis();
        let second = widget.begin_analysis();

        assert_eq!(widget.complete_analysis(first, fishing_boat(), NOW), None);
        assert!(widget.is_busy());

        let toast = widget.complete_analysis(second, Ok(Verdict::NoThreat), NOW);
        assert_eq!(toast.map(|t| t.tone), Some(Tone::Info));
    }

    #[test]
    fn completion_after_reset_is_dropped() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();
        widget.reset();

        assert_eq!(widget.complete_analysis(ticket, fishing_boat(), NOW), None);
        assert_eq!(widget.state(), &DemoState::Idle);
    }

    #[test]
    fn completion_after_trigger_is_dropped() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();
        widget.trigger(ScenarioKey::Spill, NOW);

        assert_eq!(widget.complete_analysis(ticket, fishing_boat(), NOW), None);
        assert_eq!(widget.active_scenario(), Some(ScenarioKey::Spill));
    }

    #[test]
    fn retry_after_failure() {
        let mut widget = DemoWidget::new(DemoVariant::Enhanced);
        widget.trigger(ScenarioKey::Fishing, NOW);
        let ticket = widget.begin_analysis();
        widget.complete_analysis(ticket, Err(ClassifierError::ModelLoad("offline".into())), NOW);

        let ticket = widget.begin_analysis();
        let toast = widget.complete_analysis(ticket, fishing_boat(), NOW);
        assert_eq!(toast.map(|t| t.tone), Some(Tone::Success));
    }
}
