//! Fishing heuristic over general-purpose image-classifier output.
//!
//! The model knows nothing about illegal fishing. We ask it for labels and
//! flag the image if any label mentions one of a handful of maritime terms
//! with a score above a (deliberately low) threshold.

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Terms searched for, case-insensitively, inside classifier labels.
pub const FISHING_KEYWORDS: [&str; 7] = ["fishing", "boat", "vessel", "ship", "trawler", "net", "fish"];

/// A label must score strictly above this to count.
pub const SCORE_THRESHOLD: f32 = 0.1;

/// One `{label, score}` pair returned by the classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class label, e.g. "fishing boat" or "speedboat, motorboat"
    pub label: String,
    /// Probability in `[0, 1]`
    pub score: f32,
}

impl Prediction {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Result of applying a [`DetectionPolicy`] to classifier output.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Some label matched a keyword above the threshold.
    ThreatDetected {
        /// The first matching label
        label: String,
        /// Its score
        score: f32,
    },
    /// Nothing matched.
    NoThreat,
}

impl Verdict {
    /// `true` for [`Verdict::ThreatDetected`].
    pub fn is_threat(&self) -> bool {
        matches!(self, Verdict::ThreatDetected { .. })
    }
}

/// Keyword list plus score threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionPolicy {
    /// Lowercase terms; a label matches if it contains any of them
    pub keywords: Vec<String>,
    /// Exclusive lower bound on the score
    pub threshold: f32,
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        Self {
            keywords: FISHING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            threshold: SCORE_THRESHOLD,
        }
    }
}

impl DetectionPolicy {
    /// Whether a single prediction counts as a hit.
    pub fn matches(&self, prediction: &Prediction) -> bool {
        if prediction.score <= self.threshold {
            return false;
        }
        let label = prediction.label.to_lowercase();
        self.keywords
            .iter()
            .any(|k| label.contains(k.to_lowercase().as_str()))
    }

    /// First prediction (in classifier order) that counts as a hit.
    pub fn first_match<'a>(&self, predictions: &'a [Prediction]) -> Option<&'a Prediction> {
        predictions.iter().find(|p| self.matches(p))
    }

    /// Reduce a prediction list to a binary verdict.
    pub fn assess(&self, predictions: &[Prediction]) -> Verdict {
        match self.first_match(predictions) {
            Some(hit) => Verdict::ThreatDetected {
                label: hit.label.clone(),
                score: hit.score,
            },
            None => Verdict::NoThreat,
        }
    }
}

/// The image the user picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    /// Original file name, for logs
    pub name: String,
    /// Something the classifier can load (blob or data URL)
    pub url: String,
}

impl ImageRef {
    /// Build a handle from a file name and a loadable URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Anything that turns an image into labelled scores.
///
/// The browser implementation calls into a JS vision pipeline; tests use
/// canned answers. Futures need not be `Send` (the page is single-threaded).
#[allow(async_fn_in_trait)]
pub trait Classifier {
    /// Run inference on `image`.
    async fn classify(&self, image: &ImageRef) -> Result<Vec<Prediction>, ClassifierError>;
}

/// Classify `image` and apply `policy` to the result.
pub async fn analyze<C: Classifier>(
    classifier: &C,
    image: &ImageRef,
    policy: &DetectionPolicy,
) -> Result<Verdict, ClassifierError> {
    if image.url.is_empty() {
        return Err(ClassifierError::UnsupportedInput(format!(
            "{} has no readable source",
            image.name
        )));
    }

    let predictions = classifier.classify(image).await?;
    tracing::debug!(image = %image.name, count = predictions.len(), "classifier returned");

    let verdict = policy.assess(&predictions);
    match &verdict {
        Verdict::ThreatDetected { label, score } => {
            tracing::info!(image = %image.name, %label, score, "fishing activity flagged")
        }
        Verdict::NoThreat => tracing::info!(image = %image.name, "no fishing labels above threshold"),
    }
    Ok(verdict)
}
