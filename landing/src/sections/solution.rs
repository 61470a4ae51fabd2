use leptos::prelude::*;
use marine_core::content::{SOLUTION, SOLUTION_STEPS};

#[component]
pub fn Solution() -> impl IntoView {
    view! {
        <section id="solution" class="solution">
            <div class="container solution-grid">
                <div>
                    <h3 class="section-title">{SOLUTION.title}</h3>
                    <p class="solution-pitch">{SOLUTION.subtitle}</p>

                    <div class="how-it-works">
                        <h4>"How It Works"</h4>
                        <ol>
                            {SOLUTION_STEPS
                                .iter()
                                .map(|step| {
                                    view! {
                                        <li>
                                            <span class="step-label">{step.label}</span>
                                            " "
                                            {step.text}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    </div>
                </div>

                <div class="solution-visual">
                    <img src="assets/ai-dashboard.jpg" alt="AI Dashboard Interface" />
                </div>
            </div>
        </section>
    }
}
