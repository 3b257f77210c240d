//! ROI Calculator Page

use leptos::prelude::*;
use mab_core::site::routes;
use mab_core::roi::WEEKS_PER_YEAR;
use mab_core::{format_currency, format_number, AnalyticsEvent, RoiScenario, SliderRange};
use rust_decimal::Decimal;

use crate::analytics;
use crate::charts::{ComparisonChart, SavingsChart};
use crate::components::Slider;

const REPORT_TYPE: &str = "roi_analysis";

/// Team hours freed per year, e.g. "10,400 hrs"
fn hours_reclaimed(scenario: &RoiScenario) -> String {
    let hours = Decimal::from(scenario.employees) * Decimal::from(scenario.hours_saved_per_week) * WEEKS_PER_YEAR;
    format!("{} hrs", format_number(hours))
}

#[component]
pub fn RoiCalculatorPage() -> impl IntoView {
    let scenario = RwSignal::new(RoiScenario::default());
    let projection = Memo::new(move |_| scenario.get().clamped().projection());
    let sink = analytics::sink();

    let report_use = {
        let sink = sink.clone();
        move || {
            let current = scenario.get_untracked();
            sink.track(&AnalyticsEvent::RoiCalculatorUse {
                employees: current.employees,
                hours_saved: current.hours_saved_per_week,
                annual_savings: projection.get_untracked().result.annual,
            });
        }
    };

    let money = |value: u32| format_currency(Decimal::from(value));

    view! {
        <div class="roi-calculator">
            <header class="page-header">
                <h1>"ROI Calculator"</h1>
                <p>"Discover how much time and money you can save with MAB AI Strategies automation solutions."</p>
            </header>

            <section class="card inputs">
                <h3>"Calculate Your ROI"</h3>
                <Slider
                    id="employees"
                    label="Number of Employees"
                    range=SliderRange::EMPLOYEES
                    value=Signal::derive(move || scenario.get().employees)
                    display=Signal::derive(move || scenario.get().employees.to_string())
                    on_input=move |v| scenario.update(|s| s.employees = v)
                    on_commit=Box::new(report_use.clone())
                />
                <Slider
                    id="avg-salary"
                    label="Average Salary"
                    range=SliderRange::AVG_SALARY
                    value=Signal::derive(move || scenario.get().avg_salary)
                    display=Signal::derive(move || money(scenario.get().avg_salary))
                    on_input=move |v| scenario.update(|s| s.avg_salary = v)
                    on_commit=Box::new(report_use.clone())
                />
                <Slider
                    id="hours-saved"
                    label="Hours Saved Per Week"
                    range=SliderRange::HOURS_SAVED
                    value=Signal::derive(move || scenario.get().hours_saved_per_week)
                    display=Signal::derive(move || format!("{} hrs", scenario.get().hours_saved_per_week))
                    on_input=move |v| scenario.update(|s| s.hours_saved_per_week = v)
                    on_commit=Box::new(report_use.clone())
                />
                <Slider
                    id="software-overhead"
                    label="Annual Software Overhead"
                    range=SliderRange::SOFTWARE_OVERHEAD
                    value=Signal::derive(move || scenario.get().software_overhead)
                    display=Signal::derive(move || money(scenario.get().software_overhead))
                    on_input=move |v| scenario.update(|s| s.software_overhead = v)
                    on_commit=Box::new(report_use)
                />
            </section>

            <section class="results">
                <div class="card">
                    <div class="label">"Weekly Savings"</div>
                    <div class="value">{move || format_currency(projection.get().result.weekly)}</div>
                </div>
                <div class="card">
                    <div class="label">"Net Annual Savings"</div>
                    <div class="value">{move || format_currency(projection.get().net_annual)}</div>
                </div>
                <div class="card">
                    <div class="label">"Hours Reclaimed / Year"</div>
                    <div class="value">{move || hours_reclaimed(&scenario.get().clamped())}</div>
                </div>
                <div class="card">
                    <div class="label">"Efficiency Boost"</div>
                    <div class="value">{move || format!("+{}%", projection.get().result.efficiency_boost)}</div>
                </div>
                <div class="card">
                    <div class="label">"Break-Even"</div>
                    <div class="value">
                        {move || match projection.get().break_even_month() {
                            Some(month) => format!("Month {month}"),
                            None => "Beyond 12 months".to_string(),
                        }}
                    </div>
                </div>
            </section>

            <section class="card chart-card">
                <h3>"12-Month ROI Projection"</h3>
                {move || view! { <SavingsChart timeline=projection.get().timeline /> }}
            </section>

            <section class="card chart-card">
                <h3>"As-Is vs MAB-Optimized"</h3>
                <div class="legend">
                    <span class="as-is">"Current State"</span>
                    <span class="optimized">"MAB-Optimized"</span>
                </div>
                {move || view! { <ComparisonChart rows=projection.get().comparison /> }}
            </section>

            <PdfReport sink=sink />

            <section class="cta-band">
                <h2>"Ready to Realize These Savings?"</h2>
                <p>"Schedule a consultation to discuss how we can implement these solutions for your business."</p>
                <a href=routes::CONTACT class="btn btn-primary">"Schedule Consultation"</a>
                <a href=routes::SERVICES class="btn">"Explore Services"</a>
            </section>
        </div>
    }
}

/// Report download placeholder: captures an email and records the request
#[component]
fn PdfReport(sink: std::sync::Arc<dyn mab_core::AnalyticsSink>) -> impl IntoView {
    let capturing = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let requested = RwSignal::new(None::<String>);

    let generate = move |_| {
        let address = email.get_untracked();
        if address.trim().is_empty() {
            capturing.set(true);
            return;
        }
        sink.track(&AnalyticsEvent::PdfDownload {
            report_type: REPORT_TYPE.into(),
        });
        capturing.set(false);
        requested.set(Some(address));
    };

    view! {
        <section class="card pdf-report">
            <h3>"Download Full ROI Report"</h3>
            <p>"Get a comprehensive PDF report with detailed analysis and recommendations."</p>
            <Show when=move || capturing.get()>
                <label for="report-email">"Email Address"</label>
                <input
                    id="report-email"
                    type="email"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </Show>
            <button class="btn btn-primary" on:click=generate>"Generate PDF Report"</button>
            {move || requested.get().map(|address| view! {
                <p class="note">
                    {format!("PDF reports are coming soon. We'll send yours to {address} as soon as they're available.")}
                </p>
            })}
        </section>
    }
}
