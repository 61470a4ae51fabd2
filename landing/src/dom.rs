//! Thin wrappers over the browser APIs the sections need.
//!
//! All of them degrade to a no-op (plus a log line) when the DOM is not
//! what we expect; none of them can fail the page.

use marine_core::config::CONFIG_ELEMENT_ID;
use marine_core::content::mailto_href;
use marine_core::{ClassifierError, ImageRef, Section};
use web_sys::{Blob, ScrollBehavior, ScrollIntoViewOptions, Url};

/// Text of the inline `<script id="site-config">` element, if present.
pub fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Smooth-scroll to a section. Silently skipped if the anchor is absent.
pub fn scroll_to(section: Section) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));

    let Some(element) = target else {
        tracing::debug!(anchor = section.anchor(), "scroll target missing");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Hand off to the mail client.
pub fn open_mailto(address: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(&mailto_href(address)) {
        tracing::warn!(error = ?e, "mailto navigation refused");
    }
}

/// Blob URL the vision model can fetch. Pair with [`release_image`].
pub fn object_url(name: &str, blob: &Blob) -> Result<ImageRef, ClassifierError> {
    Url::create_object_url_with_blob(blob)
        .map(|url| ImageRef::new(name, url))
        .map_err(|e| ClassifierError::UnsupportedInput(format!("{name}: {e:?}")))
}

/// Revoke a URL from [`object_url`].
pub fn release_image(image: &ImageRef) {
    if let Err(e) = Url::revoke_object_url(&image.url) {
        tracing::warn!(error = ?e, image = %image.name, "object URL not revoked");
    }
}

/// Current time as `Date.prototype.toUTCString()` renders it.
pub fn utc_now() -> String {
    js_sys::Date::new_0().to_utc_string().into()
}
