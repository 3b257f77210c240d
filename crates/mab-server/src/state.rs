//! Application State

use std::sync::Arc;

use mab_leads::LeadIntake;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Contact intake pipeline (lead sink, notifier, analytics)
    pub intake: Arc<LeadIntake>,

    /// Public site URL
    pub site_url: Arc<str>,

    /// Whether analytics are bound to a real backend
    pub analytics_enabled: bool,
}
