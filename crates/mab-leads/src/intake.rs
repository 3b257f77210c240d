//! Lead Intake Pipeline
//!
//! Validate, then attempt every side effect once. Side effects are
//! independent: each one's failure is recorded and logged, and none of them
//! can turn an accepted submission into a failure.

use std::fmt;
use std::sync::Arc;

use mab_core::{validate_contact_form, AnalyticsEvent, AnalyticsSink, ContactFormData, ValidationResult};
use serde::Serialize;

use crate::email::Notifier;
use crate::webform3::LeadSink;

/// Form name reported to analytics
pub const CONTACT_FORM: &str = "contact_form";

/// Best-effort operations run for an accepted submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    LeadSubmission,
    UserConfirmation,
    InternalNotification,
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeadSubmission => "Webform3 submission",
            Self::UserConfirmation => "Confirmation email",
            Self::InternalNotification => "Internal notification",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum SideEffectOutcome {
    Succeeded,
    Failed(String),
}

impl SideEffectOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// What happened to each side effect of one accepted submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntakeReport {
    pub source: String,
    pub outcomes: Vec<(SideEffect, SideEffectOutcome)>,
}

impl IntakeReport {
    pub fn outcome(&self, effect: SideEffect) -> Option<&SideEffectOutcome> {
        self.outcomes
            .iter()
            .find(|(e, _)| *e == effect)
            .map(|(_, outcome)| outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = (SideEffect, &str)> {
        self.outcomes.iter().filter_map(|(effect, outcome)| match outcome {
            SideEffectOutcome::Failed(reason) => Some((*effect, reason.as_str())),
            SideEffectOutcome::Succeeded => None,
        })
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }
}

/// Result of processing one submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Validation failed; nothing was attempted
    Rejected(ValidationResult),

    /// Validation passed; side effects were attempted
    Accepted(IntakeReport),
}

/// The contact intake pipeline
#[derive(Clone)]
pub struct LeadIntake {
    leads: Arc<dyn LeadSink>,
    notifier: Notifier,
    analytics: Arc<dyn AnalyticsSink>,
}

impl LeadIntake {
    pub fn new(leads: Arc<dyn LeadSink>, notifier: Notifier, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            leads,
            notifier,
            analytics,
        }
    }

    pub fn leads(&self) -> &dyn LeadSink {
        self.leads.as_ref()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Validate `form` and, if it passes, run every side effect once.
    pub async fn process(&self, form: &ContactFormData, source: &str) -> IntakeOutcome {
        let validation = validate_contact_form(form);
        if !validation.is_valid {
            tracing::info!(fields = ?validation.errors.keys().collect::<Vec<_>>(), "contact form rejected");
            return IntakeOutcome::Rejected(validation);
        }

        let (lead, confirmation, notification) = tokio::join!(
            self.leads.submit(form, source),
            self.notifier.send_contact_confirmation(form),
            self.notifier.send_internal_notification(form, source),
        );

        let lead = if lead.success {
            SideEffectOutcome::Succeeded
        } else {
            SideEffectOutcome::Failed(lead.error.unwrap_or_else(|| "Failed to submit lead".into()))
        };

        let report = IntakeReport {
            source: source.to_string(),
            outcomes: vec![
                (SideEffect::LeadSubmission, lead),
                (SideEffect::UserConfirmation, settle(confirmation)),
                (SideEffect::InternalNotification, settle(notification)),
            ],
        };

        for (effect, reason) in report.failures() {
            tracing::error!("{} failed: {}", effect, reason);
        }

        self.analytics.track(&AnalyticsEvent::FormSubmission {
            form_type: CONTACT_FORM.into(),
            service_interest: form.service.clone(),
            budget_range: form.budget.clone(),
        });

        IntakeOutcome::Accepted(report)
    }
}

fn settle(result: crate::Result<()>) -> SideEffectOutcome {
    match result {
        Ok(()) => SideEffectOutcome::Succeeded,
        Err(e) => SideEffectOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;
    use crate::email::{Email, Mailer};
    use crate::error::LeadError;
    use crate::webform3::LeadReceipt;
    use async_trait::async_trait;
    use mab_core::EventParams;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeSink {
        calls: AtomicUsize,
        healthy: bool,
    }

    impl FakeSink {
        fn new(healthy: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                healthy,
            })
        }
    }

    #[async_trait]
    impl LeadSink for FakeSink {
        async fn submit(&self, _form: &ContactFormData, _source: &str) -> LeadReceipt {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.healthy {
                LeadReceipt::submitted(serde_json::json!({}))
            } else {
                LeadReceipt::failed(&LeadError::Status("503 Service Unavailable".into()))
            }
        }

        fn mode(&self) -> &'static str {
            "fake"
        }
    }

    struct FakeMailer {
        calls: AtomicUsize,
        fail_for: Option<String>,
    }

    impl FakeMailer {
        fn new(fail_for: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_for: fail_for.map(String::from),
            })
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, email: &Email) -> crate::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_for {
                Some(to) if *to == email.to => Err(LeadError::MailRejected("mailbox full".into())),
                _ => Ok(()),
            }
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    #[derive(Default)]
    struct FakeAnalytics {
        events: Mutex<Vec<(String, EventParams)>>,
    }

    impl AnalyticsSink for FakeAnalytics {
        fn report(&self, event_name: &str, params: &EventParams) {
            self.events.lock().unwrap().push((event_name.to_string(), params.clone()));
        }
    }

    fn valid_form() -> ContactFormData {
        ContactFormData {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            message: "We want to automate our reporting.".into(),
            service: Some("custom-automations".into()),
            budget: Some("10k-25k".into()),
            ..Default::default()
        }
    }

    fn intake(sink: Arc<FakeSink>, mailer: Arc<FakeMailer>, analytics: Arc<FakeAnalytics>) -> LeadIntake {
        LeadIntake::new(sink, Notifier::new(mailer, MailConfig::default()), analytics)
    }

    #[tokio::test]
    async fn test_all_succeed() {
        let (sink, mailer, analytics) = (FakeSink::new(true), FakeMailer::new(None), Arc::new(FakeAnalytics::default()));
        let outcome = intake(sink.clone(), mailer.clone(), analytics.clone())
            .process(&valid_form(), "/contact")
            .await;

        let IntakeOutcome::Accepted(report) = outcome else {
            panic!("expected accepted outcome");
        };
        assert_eq!(report.attempted(), 3);
        assert_eq!(report.failures().count(), 0);
        assert_eq!(report.source, "/contact");
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 2);

        let events = analytics.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "form_submission");
        assert_eq!(events[0].1["form_type"], "contact_form");
        assert_eq!(events[0].1["service_interest"], "custom-automations");
        assert_eq!(events[0].1["budget_range"], "10k-25k");
    }

    #[tokio::test]
    async fn test_failures_do_not_block_acceptance() {
        // lead service down and the team inbox refuses mail
        let sink = FakeSink::new(false);
        let mailer = FakeMailer::new(Some("mark@mabaistrategies.com"));
        let analytics = Arc::new(FakeAnalytics::default());

        let outcome = intake(sink.clone(), mailer.clone(), analytics.clone())
            .process(&valid_form(), "unknown")
            .await;

        let IntakeOutcome::Accepted(report) = outcome else {
            panic!("expected accepted outcome");
        };
        assert_eq!(report.attempted(), 3);

        let failed: Vec<SideEffect> = report.failures().map(|(effect, _)| effect).collect();
        assert_eq!(failed, vec![SideEffect::LeadSubmission, SideEffect::InternalNotification]);
        assert_eq!(report.outcome(SideEffect::UserConfirmation), Some(&SideEffectOutcome::Succeeded));
        assert!(report
            .outcome(SideEffect::LeadSubmission)
            .is_some_and(|o| matches!(o, SideEffectOutcome::Failed(reason) if reason.contains("503"))));
        assert_eq!(analytics.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_attempts_nothing() {
        let (sink, mailer, analytics) = (FakeSink::new(true), FakeMailer::new(None), Arc::new(FakeAnalytics::default()));
        let form = ContactFormData {
            message: String::new(),
            ..valid_form()
        };

        let outcome = intake(sink.clone(), mailer.clone(), analytics.clone())
            .process(&form, "/contact")
            .await;

        let IntakeOutcome::Rejected(validation) = outcome else {
            panic!("expected rejected outcome");
        };
        assert_eq!(validation.error("message"), Some("Message is required"));
        assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
        assert!(analytics.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(SideEffectOutcome::Failed("timeout".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "error": "timeout"}));
    }
}
