//! Home Page

use leptos::prelude::*;
use mab_core::site::{routes, SITE_DESCRIPTION, SITE_NAME};
use mab_core::{format_currency, suggest_service, AnalyticsEvent, ServiceId};
use rust_decimal::Decimal;

use crate::analytics;
use crate::components::Stat;

#[component]
pub fn HomePage() -> impl IntoView {
    let (problem, set_problem) = signal(String::new());
    let suggestion = Memo::new(move |_| suggest_service(&problem.get()));
    let sink = analytics::sink();

    let services = ServiceId::ALL
        .into_iter()
        .map(|service| {
            view! {
                <div class="service-card">
                    <h3>{service.title()}</h3>
                    <p class="tagline">{service.tagline()}</p>
                    <p>{service.description()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <header class="hero">
                <div class="logo-mark">"MAB"</div>
                <h1>{SITE_NAME}</h1>
                <p class="tagline">{SITE_DESCRIPTION}</p>
                <div class="cta">
                    <a
                        href=routes::CONTACT
                        class="btn btn-primary"
                        on:click=move |_| sink.track(&AnalyticsEvent::ButtonClick {
                            button_name: "Scale Your Intelligence".into(),
                            location: "hero".into(),
                        })
                    >
                        "Scale Your Intelligence"
                    </a>
                </div>
            </header>

            <section class="stats">
                <Stat value="100+" label="Automations Deployed" />
                <Stat value=format!("{}+", format_currency(Decimal::from(2_000_000))) label="Client Savings Achieved" />
                <Stat value="24/7" label="AI Agent Uptime" />
            </section>

            <section class="solution-generator">
                <h2>"The Solution Generator"</h2>
                <p>"Tell us your challenge, and we'll recommend the perfect solution."</p>
                <label for="solution-input">"What business problem are you trying to solve?"</label>
                <input
                    id="solution-input"
                    type="text"
                    placeholder="e.g., 'I need to automate my customer onboarding process'"
                    prop:value=move || problem.get()
                    on:input=move |ev| set_problem.set(event_target_value(&ev))
                />
                {move || suggestion.get().map(|service| view! {
                    <div class="suggestion">
                        <p class="label">"We recommend:"</p>
                        <h3>{service.title()}</h3>
                        <p>{service.description()}</p>
                        <a href=routes::SERVICES class="btn">"Learn More"</a>
                    </div>
                })}
            </section>

            <section class="services-preview">
                <h2>"Our Services"</h2>
                <div class="grid">{services}</div>
                <a href=routes::SERVICES class="btn">"Explore All Services"</a>
            </section>

            <section class="cta-band">
                <h2>"Ready to Transform Your Business?"</h2>
                <a href=routes::CONTACT class="btn btn-primary">"Schedule Consultation"</a>
            </section>
        </div>
    }
}
