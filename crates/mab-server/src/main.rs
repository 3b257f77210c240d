//! MAB AI Strategies HTTP Server
//!
//! Serves the compiled web frontend and the contact intake API.

mod analytics;
mod config;
mod error;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mab_leads::{LeadIntake, Notifier, Webform3Client};

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Lead service
    let leads = Arc::new(Webform3Client::new(config.leads.clone())?);
    match &config.leads.mode {
        mab_leads::LeadMode::Live { endpoint, .. } => {
            tracing::info!("✓ Webform3 configured: {}", endpoint);
        }
        mab_leads::LeadMode::Development => {
            tracing::warn!("⚠ Webform3 not configured - leads captured locally");
            tracing::warn!("  Set WEBFORM3_ENDPOINT and WEBFORM3_API_KEY in .env");
        }
    }

    // Email
    let notifier = Notifier::from_config(config.mail.clone())?;
    if notifier.mailer_name() == "log" {
        tracing::warn!("⚠ SendGrid not configured - emails are logged only");
    } else {
        tracing::info!("✓ Email via {}", notifier.mailer_name());
    }

    // Analytics
    let analytics = analytics::sink_for(config.ga_measurement_id.as_deref());
    if config.ga_measurement_id.is_none() {
        tracing::info!("  GA_MEASUREMENT_ID unset - analytics disabled");
    }

    let state = AppState {
        intake: Arc::new(LeadIntake::new(leads, notifier, analytics)),
        site_url: Arc::from(config.site_url.as_str()),
        analytics_enabled: config.ga_measurement_id.is_some(),
    };

    let app = build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 mab-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/contact  - Contact form intake");
    tracing::info!("  GET  /*            - Web frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
