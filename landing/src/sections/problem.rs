use leptos::prelude::*;
use marine_core::content::{PROBLEM, PROBLEMS};

use super::{HighlightCard, SectionHeader};

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id="problem" class="problem">
            <div class="container">
                <SectionHeader copy=PROBLEM />
                <div class="highlight-grid grid-3">
                    {PROBLEMS
                        .iter()
                        .map(|card| view! { <HighlightCard card=*card /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
