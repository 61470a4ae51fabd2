//! # marine-core
//!
//! Framework-free building blocks for the Marine AI landing page.
//!
//! The page itself is rendered by the `landing` crate with Leptos; everything
//! that can be described without a DOM lives here so it can be tested natively:
//!
//! - [`content`] - compiled-in marketing copy (problem and feature cards, solution steps)
//! - [`navigation`] - section anchors and the collapsible mobile menu
//! - [`scenario`] - the three canned detection records shown by the live demo
//! - [`detection`] - the keyword heuristic applied to image-classifier output
//! - [`demo`] - the interactive widget's state machine
//! - [`config`] - optional runtime overrides read from the host page
//! - [`error`] - error types for the classifier bridge and config parsing
//!
//! ## Example
//!
//! ```rust
//! use marine_core::demo::{DemoVariant, DemoWidget};
//! use marine_core::scenario::ScenarioKey;
//!
//! let mut widget = DemoWidget::new(DemoVariant::Baseline);
//! widget.trigger(ScenarioKey::Spill, "Mon, 19 Oct 2026 12:00:00 GMT");
//!
//! let panel = widget.panel();
//! assert_eq!(panel.title, "ALERT: Potential Oil Spill Detected");
//! assert!(panel.marker.is_some());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod content;
pub mod demo;
pub mod detection;
pub mod error;
pub mod navigation;
pub mod scenario;

pub use config::SiteConfig;
pub use demo::{DemoState, DemoVariant, DemoWidget, Notification, Panel};
pub use detection::{Classifier, DetectionPolicy, ImageRef, Prediction, Verdict};
pub use error::{ClassifierError, ConfigError};
pub use navigation::{MobileMenu, Section};
pub use scenario::{Alert, Scenario, ScenarioKey};
