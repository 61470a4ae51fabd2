use leptos::prelude::*;
use marine_core::content::BRAND;
use marine_core::navigation::NAV_LINKS;
use marine_core::{MobileMenu, Section};

use crate::dom::scroll_to;

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MobileMenu::default());

    // Scroll first, then close; the drawer closes even if the anchor is gone.
    let navigate = move |section: Section| {
        scroll_to(section);
        set_menu.update(|m| {
            m.select(section);
        });
    };

    view! {
        <header class="header">
            <nav class="nav-inner">
                <h1 class="nav-brand">{BRAND}</h1>

                // Desktop navigation
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            let class = if section == Section::Contact { "nav-cta" } else { "nav-link" };
                            view! {
                                <button class=class on:click=move |_| navigate(section)>
                                    {link.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                // Mobile menu button
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| set_menu.update(|m| {
                        m.toggle();
                    })
                >
                    "≡"
                </button>
            </nav>

            <Show when=move || menu.get().is_open()>
                <div class="nav-drawer">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <button class="nav-drawer-link" on:click=move |_| navigate(section)>
                                    {link.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </header>
    }
}
