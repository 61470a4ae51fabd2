use leptos::prelude::*;
use marine_core::Section;
use marine_core::content::{HERO, HERO_CTA};

use crate::dom::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-content">
                <h2 class="hero-title">{HERO.title}</h2>
                <p class="hero-description">{HERO.subtitle}</p>
                <button class="btn btn-hero pulse" on:click=move |_| scroll_to(Section::Demo)>
                    {HERO_CTA}
                </button>
            </div>
        </section>
    }
}
