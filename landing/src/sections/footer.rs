use leptos::prelude::*;
use marine_core::content::COPYRIGHT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
