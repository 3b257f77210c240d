//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap},
    Json,
};
use mab_core::{ContactFormData, ContactResponse};
use mab_leads::IntakeOutcome;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Source recorded when neither the form nor the request names one
pub const UNKNOWN_SOURCE: &str = "unknown";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub site_url: String,
    pub lead_mode: &'static str,
    pub mail_mode: &'static str,
    pub analytics_enabled: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        site_url: state.site_url.to_string(),
        lead_mode: state.intake.leads().mode(),
        mail_mode: state.intake.notifier().mailer_name(),
        analytics_enabled: state.analytics_enabled,
    })
}

/// Contact form submission.
///
/// 400 with per-field errors when validation fails, 200 otherwise, even if
/// the lead service or email delivery failed. A body that cannot be read
/// (including one over the request size limit) or is not a contact form
/// object is an unexpected error.
#[tracing::instrument(skip_all, fields(intake_id = %uuid::Uuid::new_v4()))]
pub async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let body = body.map_err(|e| ApiError::Internal(format!("unreadable contact body: {e}")))?;
    let form: ContactFormData = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("unreadable contact body: {e}")))?;

    let source = resolve_source(&form, &headers);

    match state.intake.process(&form, &source).await {
        IntakeOutcome::Rejected(validation) => Err(ApiError::Validation(validation.errors)),
        IntakeOutcome::Accepted(report) => {
            tracing::info!(
                source = %report.source,
                failed_side_effects = report.failures().count(),
                "contact form accepted"
            );
            Ok(Json(ContactResponse::accepted()))
        }
    }
}

/// Explicit `source` field, else the `Referer` header, else `"unknown"`
fn resolve_source(form: &ContactFormData, headers: &HeaderMap) -> String {
    form.explicit_source()
        .or_else(|| {
            headers
                .get(header::REFERER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
        })
        .unwrap_or(UNKNOWN_SOURCE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::build_router;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
        Router,
    };
    use mab_core::NoopAnalytics;
    use mab_leads::{
        Email, LeadError, LeadIntake, LeadReceipt, LeadSink, MailConfig, Mailer, Notifier,
        Webform3Client, Webform3Config,
    };
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingSink {
        sources: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn submit(&self, _form: &ContactFormData, source: &str) -> LeadReceipt {
            self.sources.lock().unwrap().push(source.to_string());
            LeadReceipt::submitted(json!({ "id": "lead_1" }))
        }

        fn mode(&self) -> &'static str {
            "recording"
        }
    }

    struct CountingMailer {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for CountingMailer {
        async fn send(&self, _email: &Email) -> mab_leads::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LeadError::MailRejected("smtp down".into()))
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn app_with(leads: Arc<dyn LeadSink>, mailer: Arc<dyn Mailer>) -> Router {
        let intake = LeadIntake::new(
            leads,
            Notifier::new(mailer, MailConfig::default()),
            Arc::new(NoopAnalytics),
        );
        let state = AppState {
            intake: Arc::new(intake),
            site_url: Arc::from("https://mabaistrategies.com"),
            analytics_enabled: false,
        };
        build_router(state, Path::new("static"))
    }

    fn mailer(fail: bool) -> Arc<CountingMailer> {
        Arc::new(CountingMailer {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    fn post_contact(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+1 (555) 010-2000",
            "service": "custom-agents",
            "message": "We need an agent to handle scheduling."
        })
    }

    #[tokio::test]
    async fn test_valid_submission() {
        let sink = Arc::new(RecordingSink::default());
        let mailer = mailer(false);
        let app = app_with(sink.clone(), mailer.clone());

        let response = app.oneshot(post_contact(valid_body().to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": true,
                "message": "Thank you for contacting us! We will get back to you within 24 hours."
            })
        );
        assert_eq!(*sink.sources.lock().unwrap(), vec!["unknown".to_string()]);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unreachable_lead_service_still_succeeds() {
        let config = Webform3Config::live("http://127.0.0.1:9/leads", "test-key").unwrap();
        let leads = Arc::new(Webform3Client::new(config).unwrap());
        let app = app_with(leads, mailer(true));

        let response = app.oneshot(post_contact(valid_body().to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["success"], true);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_without_side_effects() {
        let sink = Arc::new(RecordingSink::default());
        let mailer = mailer(false);
        let app = app_with(sink.clone(), mailer.clone());

        let mut body = valid_body();
        body["message"] = json!("");
        let response = app.oneshot(post_contact(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["errors"]["message"], "Message is required");
        assert!(sink.sources.lock().unwrap().is_empty());
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_object_reports_required_fields() {
        let app = app_with(Arc::new(RecordingSink::default()), mailer(false));

        let response = app.oneshot(post_contact("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let errors = json_body(response).await["errors"].clone();
        assert_eq!(
            errors,
            json!({
                "name": "Name is required",
                "email": "Email is required",
                "message": "Message is required"
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_internal_error() {
        let app = app_with(Arc::new(RecordingSink::default()), mailer(false));

        let response = app.oneshot(post_contact("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": false,
                "error": "An unexpected error occurred. Please try again."
            })
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_internal_error() {
        let sink = Arc::new(RecordingSink::default());
        let app = app_with(sink.clone(), mailer(false));

        let mut body = valid_body();
        body["message"] = json!("x".repeat(3 * 1024 * 1024));
        let response = app.oneshot(post_contact(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": false,
                "error": "An unexpected error occurred. Please try again."
            })
        );
        assert!(sink.sources.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_source_resolution() {
        let sink = Arc::new(RecordingSink::default());
        let app = app_with(sink.clone(), mailer(false));

        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("referer", "https://mabaistrategies.com/services")
            .body(Body::from(valid_body().to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap();

        let mut body = valid_body();
        body["source"] = json!("/roi-calculator");
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("referer", "https://mabaistrategies.com/services")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap();

        assert_eq!(
            *sink.sources.lock().unwrap(),
            vec![
                "https://mabaistrategies.com/services".to_string(),
                "/roi-calculator".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(RecordingSink::default()), mailer(false));

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["lead_mode"], "recording");
        assert_eq!(body["mail_mode"], "counting");
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_error() {
        let response = crate::error::panic_response(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "An unexpected error occurred. Please try again.");
    }
}
