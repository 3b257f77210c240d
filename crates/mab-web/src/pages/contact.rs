//! Contact Page
//!
//! Validates in the browser with the same rules the server applies, then
//! posts to `/api/contact`. Field errors returned by the server replace the
//! local ones.

use std::collections::BTreeMap;

use leptos::prelude::*;
use mab_core::contact::{UNEXPECTED_ERROR, VALIDATION_FAILED};
use mab_core::site::RESPONSE_WINDOW;
use mab_core::{validate_contact_form, AnalyticsEvent, BudgetRange, ContactFormData, ServiceId};

use crate::components::MailLink;
use crate::{analytics, api};

const FORM_NAME: &str = "contact";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

/// Set a form field from its input value. Blank optional fields become `None`.
pub fn assign_field(form: &mut ContactFormData, field: &str, value: String) {
    let optional = |value: String| (!value.trim().is_empty()).then_some(value);

    match field {
        "name" => form.name = value,
        "email" => form.email = value,
        "message" => form.message = value,
        "phone" => form.phone = optional(value),
        "company" => form.company = optional(value),
        "service" => form.service = optional(value),
        "budget" => form.budget = optional(value),
        _ => {}
    }
}

/// Current input value of a form field
pub fn field_value(form: &ContactFormData, field: &str) -> String {
    let value = match field {
        "name" => Some(&form.name),
        "email" => Some(&form.email),
        "message" => Some(&form.message),
        "phone" => form.phone.as_ref(),
        "company" => form.company.as_ref(),
        "service" => form.service.as_ref(),
        "budget" => form.budget.as_ref(),
        _ => None,
    };
    value.cloned().unwrap_or_default()
}

#[component]
fn FieldError(errors: RwSignal<BTreeMap<String, String>>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).cloned())
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactFormData::default());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let status = RwSignal::new(Status::Idle);
    let started = RwSignal::new(false);

    let sink = analytics::sink();
    let start_sink = sink.clone();

    let update = move |field: &'static str, value: String| {
        form.update(|f| assign_field(f, field, value));
        errors.update(|e| {
            e.remove(field);
        });
    };

    let on_focus = move |_| {
        if !started.get_untracked() {
            started.set(true);
            start_sink.track(&AnalyticsEvent::FormStart {
                form_name: FORM_NAME.into(),
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == Status::Sending {
            return;
        }

        let mut data = form.get_untracked();
        let validation = validate_contact_form(&data);
        if !validation.is_valid {
            errors.set(validation.errors);
            sink.track(&AnalyticsEvent::FormSubmit {
                form_name: FORM_NAME.into(),
                success: false,
                error_message: Some(VALIDATION_FAILED.into()),
            });
            return;
        }

        data.source = api::current_path();
        status.set(Status::Sending);

        let sink = sink.clone();
        leptos::task::spawn_local(async move {
            let (next, error_message) = match api::submit_contact(&data).await {
                Ok(response) if response.success => {
                    form.set(ContactFormData::default());
                    errors.set(BTreeMap::new());
                    (Status::Sent(response.message.unwrap_or_default()), None)
                }
                Ok(response) => {
                    if let Some(field_errors) = response.errors {
                        errors.set(field_errors);
                    }
                    let message = response.error.unwrap_or_else(|| UNEXPECTED_ERROR.into());
                    (Status::Failed(message.clone()), Some(message))
                }
                Err(_) => (Status::Failed(UNEXPECTED_ERROR.into()), Some(UNEXPECTED_ERROR.into())),
            };

            sink.track(&AnalyticsEvent::FormSubmit {
                form_name: FORM_NAME.into(),
                success: error_message.is_none(),
                error_message,
            });
            status.set(next);
        });
    };

    let text_input = move |field: &'static str, label: &'static str, kind: &'static str, placeholder: &'static str| {
        view! {
            <div class="field">
                <label for=field>{label}</label>
                <input
                    id=field
                    name=field
                    type=kind
                    placeholder=placeholder
                    prop:value=move || form.with(|f| field_value(f, field))
                    on:input=move |ev| update(field, event_target_value(&ev))
                />
                <FieldError errors=errors field=field />
            </div>
        }
    };

    let form_view = move || {
        let service_options = ServiceId::ALL
            .into_iter()
            .map(|s| view! { <option value=s.slug()>{s.title()}</option> })
            .collect_view();

        let budget_options = BudgetRange::ALL
            .into_iter()
            .map(|b| view! { <option value=b.slug()>{b.label()}</option> })
            .collect_view();

        view! {
            <form class="contact-form" on:submit=on_submit.clone() on:focusin=on_focus.clone() novalidate=true>
                {text_input("name", "Name *", "text", "John Doe")}
                {text_input("email", "Email *", "email", "john@company.com")}
                {text_input("phone", "Phone", "tel", "+1 (555) 000-0000")}
                {text_input("company", "Company", "text", "Your Company Inc.")}

                <div class="field">
                    <label for="service">"Service Interest"</label>
                    <select
                        id="service"
                        name="service"
                        prop:value=move || form.with(|f| field_value(f, "service"))
                        on:change=move |ev| update("service", event_target_value(&ev))
                    >
                        <option value="">"Select a service..."</option>
                        {service_options}
                        <option value="not-sure">"Not Sure / General Inquiry"</option>
                    </select>
                </div>

                <div class="field">
                    <label for="budget">"Budget Range"</label>
                    <select
                        id="budget"
                        name="budget"
                        prop:value=move || form.with(|f| field_value(f, "budget"))
                        on:change=move |ev| update("budget", event_target_value(&ev))
                    >
                        <option value="">"Select range..."</option>
                        {budget_options}
                    </select>
                </div>

                <div class="field">
                    <label for="message">"Message *"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="6"
                        placeholder="Tell us about your project or challenge..."
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| update("message", event_target_value(&ev))
                    />
                    <FieldError errors=errors field="message" />
                </div>

                {move || match status.get() {
                    Status::Failed(message) => Some(view! { <p class="form-error">{message}</p> }),
                    _ => None,
                }}

                <button type="submit" class="btn btn-primary" disabled=move || status.get() == Status::Sending>
                    {move || if status.get() == Status::Sending { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        }
    };

    view! {
        <div class="contact">
            <header class="page-header">
                <h1>"Let's Connect"</h1>
                <p>"Ready to transform your business with AI? Start the conversation today."</p>
            </header>

            <div class="contact-layout">
                <aside class="contact-methods">
                    <div class="card">
                        <h3>"Direct Contact"</h3>
                        <MailLink link_name="contact_page_email" />
                    </div>
                    <div class="card">
                        <h3>"Schedule a Consultation"</h3>
                        <p>"Book a 30-minute strategy session to discuss your specific needs."</p>
                        <button class="btn" disabled=true>"View Calendar →"</button>
                        <p class="note">"Calendar booking coming soon"</p>
                    </div>
                    <div class="card">
                        <h3>"Response Time"</h3>
                        <p>{format!("We respond to all inquiries within {RESPONSE_WINDOW}.")}</p>
                    </div>
                </aside>

                <Show
                    when=move || matches!(status.get(), Status::Sent(_))
                    fallback=form_view
                >
                    <div class="form-success">
                        <h3>"Message Sent!"</h3>
                        <p>
                            {move || match status.get() {
                                Status::Sent(message) => message,
                                _ => String::new(),
                            }}
                        </p>
                        <button class="btn" on:click=move |_| status.set(Status::Idle)>
                            "Send Another Message"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
