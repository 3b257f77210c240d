//! # mab-core
//!
//! Domain logic shared by the MAB AI Strategies server and web frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          mab-core                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │ ROI Engine  │  │   Contact    │  │  Service Catalog    │  │
//! │  │ + Projection│  │  Validation  │  │  + Suggestion       │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! │  ┌─────────────┐  ┌──────────────────────────────────────┐   │
//! │  │ Formatting  │  │  Analytics events + AnalyticsSink    │   │
//! │  └─────────────┘  └──────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//!            ▲                                   ▲
//!       mab-web (wasm)                  mab-server / mab-leads
//! ```
//!
//! Everything here is pure: no I/O, no clocks beyond what callers pass in.
//! Money is `rust_decimal::Decimal` throughout.

pub mod analytics;
pub mod contact;
pub mod error;
pub mod format;
pub mod projection;
pub mod roi;
pub mod services;
pub mod site;
pub mod validation;

pub use analytics::{AnalyticsEvent, AnalyticsSink, EventParams, NoopAnalytics};
pub use contact::{ContactFormData, ContactResponse, LeadData};
pub use error::{CoreError, Result};
pub use format::{format_currency, format_number};
pub use projection::{ComparisonRow, RoiProjection, RoiScenario, SliderRange, TimelinePoint};
pub use roi::{calculate_roi, RoiResult, EFFICIENCY_BOOST};
pub use services::{suggest_service, BudgetRange, ServiceId};
pub use validation::{validate_contact_form, ValidationResult};
