//! Runtime configuration for the landing page.
//!
//! The page works with no configuration at all. A host can override defaults
//! by embedding a JSON document in the HTML:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "variant": "enhanced", "detection": { "threshold": 0.25 } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::content::CONTACT_EMAIL;
use crate::demo::DemoVariant;
use crate::detection::DetectionPolicy;
use crate::error::ConfigError;

/// Element id the landing page reads the JSON document from.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Root configuration structure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address behind the contact button
    pub contact_email: String,
    /// Demo flavour
    pub variant: DemoVariant,
    /// How long a toast stays up
    pub notification_ms: u64,
    /// Keyword heuristic
    pub detection: DetectionPolicy,
    /// JS vision bridge
    pub classifier: ClassifierConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: CONTACT_EMAIL.to_string(),
            variant: DemoVariant::default(),
            notification_ms: 4000,
            detection: DetectionPolicy::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// How to reach the in-browser image classifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Global object exposing `pipeline(task, model)`
    pub bridge_global: String,
    /// Pipeline task name
    pub task: String,
    /// Pretrained model id handed to the pipeline
    pub model: String,
    /// How many labels to request per image
    pub top_k: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            bridge_global: "marineVision".into(),
            task: "image-classification".into(),
            model: "Xenova/vit-base-patch16-224".into(),
            top_k: 5,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_json`], but never fails: a missing, blank or
    /// broken document yields the defaults.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring site config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.contact_email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "contact_email {:?} is not an address",
                self.contact_email
            )));
        }
        if !(0.0..=1.0).contains(&self.detection.threshold) {
            return Err(ConfigError::Invalid(format!(
                "detection.threshold {} outside [0, 1]",
                self.detection.threshold
            )));
        }
        if self.detection.keywords.is_empty() {
            return Err(ConfigError::Invalid("detection.keywords is empty".into()));
        }
        // a blank keyword is a substring of every label
        if let Some(i) = self.detection.keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("detection.keywords[{i}] is blank")));
        }
        if self.classifier.bridge_global.is_empty() || self.classifier.model.is_empty() {
            return Err(ConfigError::Invalid("classifier bridge and model are required".into()));
        }
        if self.classifier.top_k == 0 {
            return Err(ConfigError::Invalid("classifier.top_k must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{FISHING_KEYWORDS, Prediction, SCORE_THRESHOLD};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_email, "contact@marineai.com");
        assert_eq!(config.variant, DemoVariant::Baseline);
        assert_eq!(config.detection.keywords, FISHING_KEYWORDS.to_vec());
        assert_eq!(config.detection.threshold, SCORE_THRESHOLD);
        assert_eq!(config.classifier.bridge_global, "marineVision");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "variant": "enhanced", "detection": { "threshold": 0.25 } }"#)
                .expect("parse");
        assert_eq!(config.variant, DemoVariant::Enhanced);
        assert_eq!(config.detection.threshold, 0.25);
        assert_eq!(config.detection.keywords.len(), FISHING_KEYWORDS.len());
        assert_eq!(config.notification_ms, 4000);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = SiteConfig::from_json(r#"{ "detection": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let err = SiteConfig::from_json(r#"{ "detection": { "keywords": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = SiteConfig::from_json(r#"{ "detection": { "keywords": ["", "boat"] } }"#).unwrap_err();
        assert!(err.to_string().contains("keywords[0]"));

        let err = SiteConfig::from_json(r#"{ "detection": { "keywords": ["boat", "  "] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_keyword_falls_back_to_default_policy() {
        let config = SiteConfig::load_or_default(Some(r#"{ "detection": { "keywords": ["", "boat"] } }"#));
        assert_eq!(config.detection, DetectionPolicy::default());
        assert!(!config.detection.matches(&Prediction::new("seashore, coast", 0.9)));
    }

    #[test]
    fn test_bad_email_rejected() {
        let err = SiteConfig::from_json(r#"{ "contact_email": "nobody" }"#).unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SiteConfig::from_json("{ variant: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
        assert_eq!(SiteConfig::load_or_default(Some("  \n")), SiteConfig::default());
        assert_eq!(SiteConfig::load_or_default(Some("not json")), SiteConfig::default());

        let config = SiteConfig::load_or_default(Some(r#"{ "contact_email": "ops@reefwatch.org" }"#));
        assert_eq!(config.contact_email, "ops@reefwatch.org");
    }
}
