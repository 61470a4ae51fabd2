// Landing page sections, in page order

mod contact;
mod demo;
mod features;
mod footer;
mod header;
mod hero;
mod problem;
mod solution;

pub use contact::Contact;
pub use demo::InteractiveDemo;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use problem::Problem;
pub use solution::Solution;

use leptos::prelude::*;
use marine_core::content::{Highlight, SectionCopy};

/// Centered heading block shared by the grid sections.
#[component]
fn SectionHeader(copy: SectionCopy) -> impl IntoView {
    view! {
        <div class="section-header">
            <h3 class="section-title">{copy.title}</h3>
            <p class="section-description">{copy.subtitle}</p>
        </div>
    }
}

/// Emoji card used by the problem and feature grids.
#[component]
fn HighlightCard(card: Highlight) -> impl IntoView {
    view! {
        <article class="highlight-card">
            <div class="highlight-emoji">{card.emoji}</div>
            <h4 class="highlight-title">{card.title}</h4>
            <p class="highlight-description">{card.description}</p>
        </article>
    }
}
