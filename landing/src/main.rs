// Marine AI landing page (Leptos 0.8, client-side rendered)

mod dom;
mod sections;
mod vision;

use leptos::prelude::*;
use marine_core::SiteConfig;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = SiteConfig::load_or_default(dom::inline_config().as_deref());
    tracing::info!(variant = ?config.variant, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Problem />
                <Solution />
                <InteractiveDemo />
                <Features />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
