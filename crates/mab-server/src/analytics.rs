//! Server-side analytics sink

use std::sync::Arc;

use mab_core::{AnalyticsSink, EventParams, NoopAnalytics};

/// Writes each event to the `analytics` log target, tagged with the GA4
/// measurement ID
pub struct TracingAnalytics {
    measurement_id: String,
}

impl TracingAnalytics {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }
}

impl AnalyticsSink for TracingAnalytics {
    fn report(&self, event_name: &str, params: &EventParams) {
        tracing::info!(
            target: "analytics",
            measurement_id = %self.measurement_id,
            event = event_name,
            params = %serde_json::Value::Object(params.clone()),
            "event"
        );
    }
}

/// Bind the analytics sink for this process
pub fn sink_for(measurement_id: Option<&str>) -> Arc<dyn AnalyticsSink> {
    match measurement_id {
        Some(id) => Arc::new(TracingAnalytics::new(id)),
        None => Arc::new(NoopAnalytics),
    }
}
