//! Image classification through a JavaScript vision pipeline.
//!
//! The host page exposes a global (default `window.marineVision`) with a
//! `pipeline(task, model)` function, e.g. transformers.js re-exported from a
//! module script. The pipeline resolves to a callable that takes an image URL
//! plus options and resolves to `[{ label, score }, ...]`.
//!
//! The resolved model is kept for the lifetime of the classifier, so only the
//! first upload pays for the download. A failed load is not cached.

use std::cell::RefCell;

use js_sys::{Function, Object, Promise, Reflect};
use marine_core::config::ClassifierConfig;
use marine_core::{Classifier, ClassifierError, ImageRef, Prediction};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// [`Classifier`] backed by the page's JS vision bridge.
pub struct BrowserClassifier {
    config: ClassifierConfig,
    model: RefCell<Option<Function>>,
}

impl BrowserClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            model: RefCell::new(None),
        }
    }

    /// The loaded model, resolving `pipeline(task, model)` on first use.
    async fn model(&self) -> Result<Function, ClassifierError> {
        if let Some(model) = self.model.borrow().as_ref() {
            return Ok(model.clone());
        }

        let bridge = self.bridge()?;
        let pipeline: Function = Reflect::get(&bridge, &JsValue::from_str("pipeline"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| ClassifierError::Unavailable("bridge has no pipeline()".into()))?;

        tracing::debug!(model = %self.config.model, "loading vision model");
        let loading = pipeline
            .call2(
                &bridge,
                &JsValue::from_str(&self.config.task),
                &JsValue::from_str(&self.config.model),
            )
            .map_err(|e| ClassifierError::ModelLoad(describe(&e)))?;
        let model: Function = settle(loading)
            .await
            .map_err(ClassifierError::ModelLoad)?
            .dyn_into()
            .map_err(|_| ClassifierError::ModelLoad("pipeline did not resolve to a callable".into()))?;

        *self.model.borrow_mut() = Some(model.clone());
        Ok(model)
    }

    fn bridge(&self) -> Result<JsValue, ClassifierError> {
        let window = web_sys::window()
            .ok_or_else(|| ClassifierError::Unavailable("no window object".into()))?;
        let bridge = Reflect::get(&window, &JsValue::from_str(&self.config.bridge_global))
            .map_err(|e| ClassifierError::Unavailable(describe(&e)))?;
        if bridge.is_undefined() || bridge.is_null() {
            tracing::warn!(global = %self.config.bridge_global, "vision bridge not loaded");
            return Err(ClassifierError::Unavailable(format!(
                "window.{} is not defined",
                self.config.bridge_global
            )));
        }
        Ok(bridge)
    }

    fn inference_options(&self) -> Result<JsValue, ClassifierError> {
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("top_k"),
            &JsValue::from_f64(self.config.top_k as f64),
        )
        .map_err(|e| ClassifierError::Inference(describe(&e)))?;
        Ok(options.into())
    }
}

impl Classifier for BrowserClassifier {
    async fn classify(&self, image: &ImageRef) -> Result<Vec<Prediction>, ClassifierError> {
        let model = self.model().await?;

        tracing::debug!(image = %image.name, "running inference");
        let output = model
            .call2(&JsValue::NULL, &JsValue::from_str(&image.url), &self.inference_options()?)
            .map_err(|e| ClassifierError::Inference(describe(&e)))?;
        let output = settle(output).await.map_err(ClassifierError::Inference)?;

        parse_predictions(output)
    }
}

/// Await `value` whether or not it is a promise.
async fn settle(value: JsValue) -> Result<JsValue, String> {
    JsFuture::from(Promise::resolve(&value))
        .await
        .map_err(|e| describe(&e))
}

/// Best-effort message out of a thrown JS value.
fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return e.message().into();
    }
    format!("{:?}", err)
}

/// Decode the pipeline's `[{label, score}]` output.
pub fn parse_predictions(output: JsValue) -> Result<Vec<Prediction>, ClassifierError> {
    serde_wasm_bindgen::from_value(output)
        .map_err(|e| ClassifierError::MalformedOutput(e.to_string()))
}
