//! UI Components

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use mab_core::site::{routes, RESPONSE_WINDOW, SITE_DESCRIPTION, SITE_EMAIL, SITE_NAME};
use mab_core::{AnalyticsEvent, ServiceId, SliderRange};

use crate::analytics;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("Services", routes::SERVICES),
    ("Portfolio", routes::PORTFOLIO),
    ("ROI Calculator", routes::ROI_CALCULATOR),
    ("Testimonials", routes::TESTIMONIALS),
    ("About", routes::ABOUT),
    ("Contact", routes::CONTACT),
];

/// Site header with navigation; the current page's link is highlighted
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();

    let links = NAV_ITEMS
        .into_iter()
        .map(|(label, path)| {
            let class = move || {
                if location.pathname.get() == path { "nav-link active" } else { "nav-link" }
            };
            view! { <a href=path class=class>{label}</a> }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a href=routes::HOME class="brand">
                <span class="logo">"MAB"</span>
                <span class="brand-name">{SITE_NAME}</span>
                <span class="brand-tagline">"Elite AI Solutions"</span>
            </a>
            <nav>{links}</nav>
            <a href=routes::CONTACT class="btn btn-primary">"Get Started"</a>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    let services = ServiceId::ALL
        .into_iter()
        .map(|service| view! { <li><a href=routes::SERVICES>{service.title()}</a></li> })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <h3>{SITE_NAME}</h3>
                <p>{SITE_DESCRIPTION}</p>
            </div>
            <div class="footer-links">
                <h4>"Services"</h4>
                <ul>{services}</ul>
            </div>
            <div class="footer-contact">
                <h4>"Contact"</h4>
                <MailLink link_name="footer_email" />
                <p>{format!("We respond within {RESPONSE_WINDOW}.")}</p>
            </div>
            <p class="copyright">{format!("© {year} {SITE_NAME}. All rights reserved.")}</p>
        </footer>
    }
}

fn mail_click(link_name: &str) -> AnalyticsEvent {
    AnalyticsEvent::ExternalLink {
        url: format!("mailto:{SITE_EMAIL}"),
        link_name: link_name.to_string(),
    }
}

/// Site email address; clicks are tracked as outbound links
#[component]
pub fn MailLink(link_name: &'static str) -> impl IntoView {
    let sink = analytics::sink();
    let on_click = move |_| sink.track(&mail_click(link_name));

    view! { <a href=format!("mailto:{SITE_EMAIL}") on:click=on_click>{SITE_EMAIL}</a> }
}

/// Headline figure with a caption
#[component]
pub fn Stat(#[prop(into)] value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Range input bound to one slider of the calculator.
///
/// `on_input` fires while dragging, `on_commit` once the thumb is released.
#[component]
pub fn Slider(
    id: &'static str,
    label: &'static str,
    range: SliderRange,
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] display: Signal<String>,
    on_input: impl Fn(u32) + Send + Sync + 'static,
    #[prop(optional)] on_commit: Option<Box<dyn Fn() + Send + Sync>>,
) -> impl IntoView {
    let commit = move |_| {
        if let Some(callback) = &on_commit {
            callback();
        }
    };

    view! {
        <div class="slider">
            <label for=id>
                {label} ": " <span class="slider-value">{move || display.get()}</span>
            </label>
            <input
                id=id
                type="range"
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(raw) = event_target_value(&ev).parse::<u32>() {
                        on_input(range.snap(raw));
                    }
                }
                on:change=commit
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_click_event() {
        let event = mail_click("footer_email");

        assert_eq!(event.name(), "external_link_click");
        assert_eq!(
            event,
            AnalyticsEvent::ExternalLink {
                url: "mailto:mark@mabaistrategies.com".into(),
                link_name: "footer_email".into(),
            }
        );
    }
}
