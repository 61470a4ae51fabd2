use leptos::prelude::*;
use marine_core::SiteConfig;
use marine_core::content::CONTACT;

use crate::dom::open_mailto;

#[component]
pub fn Contact() -> impl IntoView {
    let address = use_context::<SiteConfig>()
        .unwrap_or_default()
        .contact_email;
    let label = address.clone();

    view! {
        <section id="contact" class="contact">
            <div class="container contact-content">
                <h3 class="section-title">{CONTACT.title}</h3>
                <p class="contact-pitch">{CONTACT.subtitle}</p>
                <button class="btn btn-hero" on:click=move |_| open_mailto(&address)>
                    {label}
                </button>
            </div>
        </section>
    }
}
