//! Analytics
//!
//! The event catalog tracked across the site and the sink it is reported to.
//! The sink is injected: a no-op by default, bound to a real backend at
//! startup.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

/// Event parameters as sent to the analytics backend
pub type EventParams = Map<String, Value>;

/// Destination for analytics events
pub trait AnalyticsSink: Send + Sync {
    fn report(&self, event_name: &str, params: &EventParams);

    /// Report a catalogued event
    fn track(&self, event: &AnalyticsEvent) {
        self.report(event.name(), &event.params());
    }
}

/// Sink that drops everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn report(&self, _event_name: &str, _params: &EventParams) {}
}

/// Events tracked by the site
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    PageView {
        path: String,
    },
    ButtonClick {
        button_name: String,
        location: String,
    },
    FormStart {
        form_name: String,
    },
    /// Client-side submit result
    FormSubmit {
        form_name: String,
        success: bool,
        error_message: Option<String>,
    },
    /// Server-side accepted submission
    FormSubmission {
        form_type: String,
        service_interest: Option<String>,
        budget_range: Option<String>,
    },
    ServiceView {
        service_name: String,
    },
    PortfolioView {
        project_name: String,
    },
    RoiCalculatorUse {
        employees: u32,
        hours_saved: u32,
        annual_savings: Decimal,
    },
    PdfDownload {
        report_type: String,
    },
    ExternalLink {
        url: String,
        link_name: String,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::ButtonClick { .. } => "button_click",
            Self::FormStart { .. } => "form_start",
            Self::FormSubmit { .. } => "form_submit",
            Self::FormSubmission { .. } => "form_submission",
            Self::ServiceView { .. } => "service_view",
            Self::PortfolioView { .. } => "portfolio_view",
            Self::RoiCalculatorUse { .. } => "roi_calculator_use",
            Self::PdfDownload { .. } => "pdf_download",
            Self::ExternalLink { .. } => "external_link_click",
        }
    }

    pub fn params(&self) -> EventParams {
        let value = match self {
            Self::PageView { path } => json!({ "page_path": path }),
            Self::ButtonClick { button_name, location } => {
                json!({ "button_name": button_name, "location": location })
            }
            Self::FormStart { form_name } => json!({ "form_name": form_name }),
            Self::FormSubmit { form_name, success, error_message } => json!({
                "form_name": form_name,
                "success": success,
                "error_message": error_message,
            }),
            Self::FormSubmission { form_type, service_interest, budget_range } => json!({
                "form_type": form_type,
                "service_interest": service_interest,
                "budget_range": budget_range,
            }),
            Self::ServiceView { service_name } => json!({ "service_name": service_name }),
            Self::PortfolioView { project_name } => json!({ "project_name": project_name }),
            Self::RoiCalculatorUse { employees, hours_saved, annual_savings } => json!({
                "employees": employees,
                "hours_saved": hours_saved,
                "annual_savings": annual_savings.round_dp(2).to_f64().unwrap_or_default(),
            }),
            Self::PdfDownload { report_type } => json!({ "report_type": report_type }),
            Self::ExternalLink { url, link_name } => json!({ "url": url, "link_name": link_name }),
        };

        match value {
            Value::Object(map) => map,
            _ => EventParams::new(),
        }
    }
}
