//! External Lead Submission
//!
//! Forwards contact submissions to the Webform3 lead capture service.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use mab_core::{ContactFormData, LeadData};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{LeadMode, Webform3Config};
use crate::error::{LeadError, Result};

/// Label sent as `metadata.source` on every lead
pub const METADATA_SOURCE: &str = "MAB AI Strategies Website";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of handing a lead to the lead service.
///
/// Failures are values, not errors: the caller decides how much they matter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LeadReceipt {
    pub fn submitted(data: Value) -> Self {
        Self {
            success: true,
            message: Some("Lead submitted successfully".into()),
            error: None,
            data: Some(data),
        }
    }

    pub fn captured_locally(form: &ContactFormData, source: &str) -> Self {
        Self {
            success: true,
            message: Some("Development mode: Lead captured locally".into()),
            error: None,
            data: Some(serde_json::json!({ "formData": form, "source": source })),
        }
    }

    pub fn failed(error: &LeadError) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
            data: None,
        }
    }
}

/// Destination for captured leads (Strategy pattern)
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Submit a lead. Never fails past its own boundary.
    async fn submit(&self, form: &ContactFormData, source: &str) -> LeadReceipt;

    /// Short label for health output, e.g. `"live"`
    fn mode(&self) -> &'static str;
}

#[derive(Serialize)]
struct Webform3Payload<'a> {
    recipient: &'a str,
    lead: LeadData,
    metadata: LeadMetadata<'a>,
}

#[derive(Serialize)]
struct LeadMetadata<'a> {
    source: &'a str,
    page: &'a str,
}

/// Webform3 API client
pub struct Webform3Client {
    http: reqwest::Client,
    config: Webform3Config,
}

impl Webform3Client {
    pub fn new(config: Webform3Config) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    async fn post_lead(
        &self,
        endpoint: &Url,
        api_key: &str,
        form: &ContactFormData,
        source: &str,
    ) -> Result<Value> {
        let payload = Webform3Payload {
            recipient: &self.config.recipient,
            lead: LeadData::new(form, source, Utc::now()),
            metadata: LeadMetadata {
                source: METADATA_SOURCE,
                page: source,
            },
        };
        let body = serde_json::to_vec(&payload)?;

        let response = self
            .http
            .post(endpoint.clone())
            .bearer_auth(api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadError::Status(status.to_string()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl LeadSink for Webform3Client {
    async fn submit(&self, form: &ContactFormData, source: &str) -> LeadReceipt {
        let (endpoint, api_key) = match &self.config.mode {
            LeadMode::Live { endpoint, api_key } => (endpoint, api_key),
            LeadMode::Development => {
                tracing::warn!("Webform3 not configured. Skipping submission.");
                return LeadReceipt::captured_locally(form, source);
            }
        };

        match self.post_lead(endpoint, api_key, form, source).await {
            Ok(data) => {
                tracing::debug!(%source, "lead submitted to Webform3");
                LeadReceipt::submitted(data)
            }
            Err(e) => {
                tracing::error!("Webform3 submission error: {}", e);
                LeadReceipt::failed(&e)
            }
        }
    }

    fn mode(&self) -> &'static str {
        self.config.mode.label()
    }
}
