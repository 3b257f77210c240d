//! # mab-leads
//!
//! Everything that happens after a contact form passes validation.
//!
//! ## Intake flow
//!
//! ```text
//!               ┌──────────────────┐
//!  form ──────▶ │    validation    │──── invalid ───▶ Rejected(errors)
//!               └────────┬─────────┘
//!                        │ valid
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//!  ┌───────────┐  ┌──────────────┐  ┌──────────────┐
//!  │ LeadSink  │  │ confirmation │  │   internal   │   best effort,
//!  │ (Webform3)│  │    email     │  │ notification │   run together
//!  └─────┬─────┘  └──────┬───────┘  └──────┬───────┘
//!        └───────────────┼─────────────────┘
//!                        ▼
//!             analytics ─▶ Accepted(IntakeReport)
//! ```
//!
//! A failed side effect is logged and recorded in the [`IntakeReport`]; it
//! never turns an accepted submission into an error.
//!
//! ## Modes
//!
//! Both integrations are chosen from configuration at construction time:
//!
//! - [`LeadMode::Live`] posts to Webform3, [`LeadMode::Development`] records
//!   the lead locally without a network call.
//! - [`MailMode::SendGrid`] delivers through the SendGrid v3 API,
//!   [`MailMode::Log`] writes the email to the log.

pub mod config;
pub mod email;
pub mod error;
pub mod intake;
pub mod webform3;

pub use config::{LeadMode, MailConfig, MailMode, Webform3Config};
pub use email::{Email, LogMailer, Mailer, Notifier, SendGridMailer};
pub use error::{LeadError, Result};
pub use intake::{IntakeOutcome, IntakeReport, LeadIntake, SideEffect, SideEffectOutcome};
pub use webform3::{LeadReceipt, LeadSink, Webform3Client};
