use leptos::prelude::*;
use marine_core::content::{FEATURES, FEATURES_COPY};

use super::{HighlightCard, SectionHeader};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionHeader copy=FEATURES_COPY />
                <div class="highlight-grid grid-4">
                    {FEATURES
                        .iter()
                        .map(|card| view! { <HighlightCard card=*card /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
