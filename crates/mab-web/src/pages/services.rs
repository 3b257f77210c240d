//! Services Page

use leptos::prelude::*;
use mab_core::site::routes;
use mab_core::{calculate_roi, format_currency, AnalyticsEvent, ServiceId, SliderRange};
use rust_decimal::Decimal;

use crate::analytics;
use crate::components::Slider;

/// Fixed team used for the quick estimate on this page
const TEAM_SIZE: u32 = 10;
const TEAM_SALARY: u32 = 75_000;

const INCLUDED: [&str; 4] = [
    "Fully customized solution tailored to your needs",
    "Dedicated implementation and support",
    "Comprehensive documentation and training",
    "Ongoing optimization and updates",
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let expanded = RwSignal::new(None::<ServiceId>);
    let hours = RwSignal::new(20_u32);
    let roi = Memo::new(move |_| {
        calculate_roi(TEAM_SIZE, Decimal::from(hours.get()), Decimal::from(TEAM_SALARY))
    });
    let sink = analytics::sink();

    let cards = ServiceId::ALL
        .into_iter()
        .map(|service| {
            let sink = sink.clone();
            let toggle = move |_| {
                if expanded.get_untracked() == Some(service) {
                    expanded.set(None);
                } else {
                    sink.track(&AnalyticsEvent::ServiceView {
                        service_name: service.title().into(),
                    });
                    expanded.set(Some(service));
                }
            };

            view! {
                <article class="service" id=service.slug()>
                    <h2>{service.title()}</h2>
                    <p class="tagline">{service.tagline()}</p>
                    <p>{service.description()}</p>
                    <button class="btn" on:click=toggle>
                        {move || if expanded.get() == Some(service) { "Show Less" } else { "Learn More" }}
                    </button>
                    <Show when=move || expanded.get() == Some(service)>
                        <ul class="included">
                            {INCLUDED.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    </Show>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="services">
            <header class="page-header">
                <h1>"The Arsenal"</h1>
                <p>"Four pillars of excellence, engineered to transform your business operations."</p>
            </header>

            <section class="service-list">{cards}</section>

            <section class="quick-roi">
                <h2>"Estimate Your Savings"</h2>
                <Slider
                    id="hours-slider"
                    label="Hours Saved Per Week"
                    range=SliderRange::HOURS_SAVED
                    value=hours
                    display=Signal::derive(move || hours.get().to_string())
                    on_input=move |value| hours.set(value)
                />
                <div class="results">
                    <div>
                        <div class="label">"Weekly Savings"</div>
                        <div class="value">{move || format_currency(roi.get().weekly)}</div>
                    </div>
                    <div>
                        <div class="label">"Annual Savings"</div>
                        <div class="value">{move || format_currency(roi.get().annual)}</div>
                    </div>
                    <div>
                        <div class="label">"Efficiency Boost"</div>
                        <div class="value">{move || format!("{}%", roi.get().efficiency_boost)}</div>
                    </div>
                </div>
                <p class="note">
                    {format!("Based on {TEAM_SIZE} employees at {} average salary.", format_currency(Decimal::from(TEAM_SALARY)))}
                </p>
                <a href=routes::ROI_CALCULATOR class="btn">"Open the Full ROI Calculator"</a>
            </section>
        </div>
    }
}
