//! Browser analytics
//!
//! Events go to Google Analytics through the page's global `gtag` function.
//! When the tag script is missing or blocked, events are dropped.

use std::sync::Arc;

use leptos::prelude::use_context;
use mab_core::{AnalyticsSink, EventParams, NoopAnalytics};
use wasm_bindgen::{JsCast, JsValue};

/// Sink backed by `window.gtag`
#[derive(Clone, Copy, Debug)]
pub struct GtagSink {
    measurement_id: Option<&'static str>,
}

impl GtagSink {
    pub const fn new(measurement_id: Option<&'static str>) -> Self {
        Self { measurement_id }
    }

    /// Measurement ID baked in at build time from `GA_MEASUREMENT_ID`
    pub const fn from_build_env() -> Self {
        Self::new(option_env!("GA_MEASUREMENT_ID"))
    }

    /// `("config", id)` for page views when an ID is known, else `("event", name)`
    fn command<'a>(&'a self, event_name: &'a str) -> (&'static str, &'a str) {
        match self.measurement_id {
            Some(id) if event_name == "page_view" => ("config", id),
            _ => ("event", event_name),
        }
    }
}

impl AnalyticsSink for GtagSink {
    fn report(&self, event_name: &str, params: &EventParams) {
        let (command, target) = self.command(event_name);
        if let Err(err) = call_gtag(command, target, params) {
            web_sys::console::debug_1(&err);
        }
    }
}

fn call_gtag(command: &str, target: &str, params: &EventParams) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))?;
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };

    let json = serde_json::to_string(params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let params = js_sys::JSON::parse(&json)?;

    gtag.call3(&window, &JsValue::from_str(command), &JsValue::from_str(target), &params)?;
    Ok(())
}

/// The sink provided by `App`, or a no-op outside of it
pub fn sink() -> Arc<dyn AnalyticsSink> {
    use_context::<Arc<dyn AnalyticsSink>>().unwrap_or_else(|| Arc::new(NoopAnalytics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_uses_config_with_id() {
        let sink = GtagSink::new(Some("G-TEST123"));

        assert_eq!(sink.command("page_view"), ("config", "G-TEST123"));
        assert_eq!(sink.command("form_submit"), ("event", "form_submit"));
    }

    #[test]
    fn test_page_view_without_id_is_an_event() {
        let sink = GtagSink::new(None);

        assert_eq!(sink.command("page_view"), ("event", "page_view"));
    }
}
