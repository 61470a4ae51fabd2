//! Live demo: trigger buttons, ocean map with a pulsing marker, the alert
//! panel and (enhanced variant) the photo uploader.

use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use marine_core::content::DEMO;
use marine_core::demo::Trigger;
use marine_core::detection::analyze;
use marine_core::{DemoState, DemoWidget, Notification, ScenarioKey, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{object_url, release_image, utc_now};
use crate::vision::BrowserClassifier;

#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let widget = RwSignal::new(DemoWidget::new(config.variant));
    let toast = RwSignal::new(None::<Notification>);
    let toast_ms = config.notification_ms;
    let policy = StoredValue::new(config.detection);
    // one classifier per page so the model loads once
    let classifier = StoredValue::new_local(Rc::new(BrowserClassifier::new(config.classifier)));

    let notify = move |notification: Notification| {
        toast.set(Some(notification));
        set_timeout(move || toast.set(None), Duration::from_millis(toast_ms));
    };

    let on_trigger = move |key: ScenarioKey| {
        let now = utc_now();
        if let Some(Trigger::OpenUploader) = widget.try_update(|w| w.trigger(key, &now)) {
            tracing::debug!("uploader opened");
        }
    };

    let on_file = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        // allow picking the same file again
        input.set_value("");

        let Some(ticket) = widget.try_update(|w| w.begin_analysis()) else {
            return;
        };
        let policy = policy.get_value();
        let classifier = classifier.get_value();

        spawn_local(async move {
            let outcome = match object_url(&file.name(), &file) {
                Ok(image) => {
                    let outcome = analyze(classifier.as_ref(), &image, &policy).await;
                    release_image(&image);
                    outcome
                }
                Err(e) => Err(e),
            };
            let now = utc_now();
            if let Some(notification) = widget
                .try_update(|w| w.complete_analysis(ticket, outcome, &now))
                .flatten()
            {
                notify(notification);
            }
        });
    };

    let panel = Memo::new(move |_| widget.with(|w| w.panel()));

    view! {
        <section id="demo" class="demo">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">{DEMO.title}</h3>
                    <p class="section-description">{DEMO.subtitle}</p>
                </div>

                <div class="demo-triggers">
                    {ScenarioKey::ALL
                        .into_iter()
                        .map(|key| {
                            let class = match key {
                                ScenarioKey::Reef => "btn btn-success",
                                _ => "btn btn-warning",
                            };
                            let active = move || widget.with(|w| w.active_scenario() == Some(key));
                            view! {
                                <button
                                    class=class
                                    class:active=active
                                    on:click=move |_| on_trigger(key)
                                >
                                    {key.button_label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <Show when=move || widget.with(|w| !matches!(w.state(), DemoState::Idle))>
                        <button class="btn btn-ghost" on:click=move |_| widget.update(|w| w.reset())>
                            "Reset"
                        </button>
                    </Show>
                </div>

                <Show when=move || widget.with(|w| w.uploader_visible())>
                    <div class="demo-uploader">
                        <label class="uploader-label">
                            "Upload a photo of a vessel or coastline"
                            <input type="file" accept="image/*" on:change=on_file />
                        </label>
                        <Show when=move || widget.with(|w| w.is_busy())>
                            <span class="busy-indicator">"Analyzing..."</span>
                        </Show>
                    </div>
                </Show>

                <div class="demo-grid">
                    <div class="demo-map">
                        <div class="demo-map-inner">
                            <img src="assets/ocean-map.jpg" alt="Ocean surveillance map" />
                            {move || {
                                panel
                                    .get()
                                    .marker
                                    .map(|m| view! { <div class="pulse-dot" style=m.css()></div> })
                            }}
                        </div>
                    </div>

                    <div class="demo-panel">
                        <h4 class="demo-panel-title">{move || panel.get().title}</h4>
                        <p class="demo-panel-message">{move || panel.get().message}</p>
                        {move || {
                            panel
                                .get()
                                .details
                                .map(|d| {
                                    view! {
                                        <div class="demo-panel-details">
                                            <p><span class="label">"Coordinates: "</span>{d.coordinates}</p>
                                            <p><span class="label">"Confidence: "</span>{d.confidence}</p>
                                            <p><span class="label">"Details: "</span>{d.detail}</p>
                                            <p><span class="label">"Timestamp: "</span>{d.timestamp}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>

            {move || {
                toast
                    .get()
                    .map(|n| {
                        view! {
                            <div class=n.tone.class() role="status">
                                <strong>{n.title}</strong>
                                <p>{n.body}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
