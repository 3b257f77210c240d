//! Email bodies for contact notifications.
//!
//! User-supplied text is escaped before it reaches any HTML body.

use ammonia::clean_text;
use mab_core::site::{RESPONSE_WINDOW, SITE_NAME};
use mab_core::{BudgetRange, ContactFormData, ServiceId};

use super::Email;
use crate::config::MailConfig;

const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";

/// Confirmation sent to the person who filled in the form
pub fn contact_confirmation(form: &ContactFormData, config: &MailConfig, year: i32) -> Email {
    let name = form.name.trim();
    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>
      body {{ font-family: 'Inter', Arial, sans-serif; background-color: #000C1F; color: #F8F9FA; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 40px 20px; }}
      .header {{ text-align: center; margin-bottom: 40px; }}
      .logo {{ width: 80px; height: 80px; margin: 0 auto 20px; background: linear-gradient(135deg, #D4AF37, #FFD700); border-radius: 16px; }}
      .logo-text {{ font-size: 36px; font-weight: bold; color: #000C1F; font-family: 'Cinzel', serif; line-height: 80px; }}
      .title {{ font-size: 32px; font-weight: bold; color: #D4AF37; margin-bottom: 16px; }}
      .content {{ background: rgba(11, 26, 48, 0.5); border: 1px solid rgba(212, 175, 55, 0.3); border-radius: 12px; padding: 32px; }}
      .message {{ font-size: 16px; line-height: 1.6; margin-bottom: 24px; }}
      .footer {{ text-align: center; margin-top: 40px; color: rgba(248, 249, 250, 0.6); font-size: 14px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <div class="logo"><div class="logo-text">MAB</div></div>
        <h1 class="title">Thank You for Reaching Out</h1>
      </div>
      <div class="content">
        <p class="message">Hi {name},</p>
        <p class="message">Thank you for contacting {SITE_NAME}. We've received your message and will get back to you within {RESPONSE_WINDOW}.</p>
        <p class="message">In the meantime, feel free to explore our services and case studies at <a href="{site_url}">{site_url}</a>.</p>
        <p class="message">Best regards,<br><strong>Mark Anthony Barrameda</strong><br>{SITE_NAME}</p>
      </div>
      <div class="footer">
        <p>&copy; {year} {SITE_NAME}. All rights reserved.</p>
        <p>{contact}</p>
      </div>
    </div>
  </body>
</html>
"#,
        name = clean_text(name),
        site_url = clean_text(&config.site_url),
        contact = clean_text(&config.team_recipient),
    );

    let text = format!(
        "Hi {name},\n\n\
         Thank you for contacting {SITE_NAME}. We've received your message and will get back to you within {RESPONSE_WINDOW}.\n\n\
         In the meantime, feel free to explore our services and case studies at {site_url}.\n\n\
         Best regards,\nMark Anthony Barrameda\n{SITE_NAME}\n\n\
         (c) {year} {SITE_NAME}. {contact}\n",
        site_url = config.site_url,
        contact = config.team_recipient,
    );

    Email {
        to: form.email.trim().to_string(),
        to_name: name.to_string(),
        subject: format!("Thank you for contacting {SITE_NAME}"),
        html,
        text,
    }
}

/// Heads-up to the team inbox with every submitted field.
///
/// `source` is the resolved submission source, not the raw form field.
pub fn internal_notification(form: &ContactFormData, source: &str, config: &MailConfig) -> Email {
    let rows = [
        ("Name", form.name.trim().to_string()),
        ("Email", form.email.trim().to_string()),
        ("Phone", provided(form.phone.as_deref()).unwrap_or(NOT_PROVIDED).to_string()),
        ("Company", provided(form.company.as_deref()).unwrap_or(NOT_PROVIDED).to_string()),
        ("Service", service_label(form.service.as_deref())),
        ("Budget", budget_label(form.budget.as_deref())),
        ("Source", provided(Some(source)).unwrap_or(NOT_SPECIFIED).to_string()),
        ("Message", form.message.trim().to_string()),
    ];

    let html_rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                "      <tr><th align=\"left\">{label}</th><td>{}</td></tr>\n",
                clean_text(value)
            )
        })
        .collect();
    let html = format!(
        "<!DOCTYPE html>\n<html>\n  <body>\n    <h2>New contact form submission</h2>\n    <table>\n{html_rows}    </table>\n  </body>\n</html>\n"
    );

    let text: String = rows
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect();

    Email {
        to: config.team_recipient.clone(),
        to_name: "MAB Team".to_string(),
        subject: format!("New Contact Form Submission from {}", form.name.trim()),
        html,
        text,
    }
}

fn provided(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn service_label(slug: Option<&str>) -> String {
    match provided(slug) {
        None => NOT_SPECIFIED.to_string(),
        Some("not-sure") => "Not Sure / General Inquiry".to_string(),
        Some(slug) => slug
            .parse::<ServiceId>()
            .map_or_else(|_| slug.to_string(), |service| service.title().to_string()),
    }
}

fn budget_label(slug: Option<&str>) -> String {
    match provided(slug) {
        None => NOT_SPECIFIED.to_string(),
        Some(slug) => slug
            .parse::<BudgetRange>()
            .map_or_else(|_| slug.to_string(), |budget| budget.label().to_string()),
    }
}
