//! Service Catalog
//!
//! The four offerings, budget ranges from the contact form, and the keyword
//! heuristic that points free text at a service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An offered service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    CustomAgents,
    CustomAutomations,
    CustomWebApps,
    KeynoteCoaching,
}

impl ServiceId {
    pub const ALL: [Self; 4] = [
        Self::CustomAgents,
        Self::CustomAutomations,
        Self::CustomWebApps,
        Self::KeynoteCoaching,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::CustomAgents => "custom-agents",
            Self::CustomAutomations => "custom-automations",
            Self::CustomWebApps => "custom-web-apps",
            Self::KeynoteCoaching => "keynote-coaching",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CustomAgents => "Custom Agents",
            Self::CustomAutomations => "Custom Automations",
            Self::CustomWebApps => "Custom Web Apps",
            Self::KeynoteCoaching => "Keynote Coaching",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::CustomAgents => "Autonomous employees that don't sleep",
            Self::CustomAutomations => "Eliminating the friction of existence",
            Self::CustomWebApps => "Digital infrastructure for the 1%",
            Self::KeynoteCoaching => "Speaking the language of the future",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CustomAgents => "AI-powered agents that work 24/7 to handle your business operations.",
            Self::CustomAutomations => "Streamline your workflows with intelligent automation solutions.",
            Self::CustomWebApps => "Bespoke web applications built to your exact specifications.",
            Self::KeynoteCoaching => {
                "Expert coaching to elevate your presentations and thought leadership."
            }
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ServiceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.slug() == s)
            .ok_or_else(|| CoreError::UnknownService(s.to_string()))
    }
}

/// Suggest a service from free text.
///
/// Keyword groups are checked in order and the first hit wins. Matching is
/// on lowercase substrings, so "ai" also hits inside longer words.
pub fn suggest_service(text: &str) -> Option<ServiceId> {
    const RULES: [(&[&str], ServiceId); 4] = [
        (&["automat", "workflow"], ServiceId::CustomAutomations),
        (&["agent", "ai"], ServiceId::CustomAgents),
        (&["website", "app"], ServiceId::CustomWebApps),
        (&["speak", "present"], ServiceId::KeynoteCoaching),
    ];

    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, service)| *service)
}

/// Budget bracket offered on the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BudgetRange {
    From10kTo25k,
    From25kTo50k,
    From50kTo100k,
    Over100k,
    NotSure,
}

impl BudgetRange {
    pub const ALL: [Self; 5] = [
        Self::From10kTo25k,
        Self::From25kTo50k,
        Self::From50kTo100k,
        Self::Over100k,
        Self::NotSure,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::From10kTo25k => "10k-25k",
            Self::From25kTo50k => "25k-50k",
            Self::From50kTo100k => "50k-100k",
            Self::Over100k => "100k+",
            Self::NotSure => "not-sure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::From10kTo25k => "$10K - $25K",
            Self::From25kTo50k => "$25K - $50K",
            Self::From50kTo100k => "$50K - $100K",
            Self::Over100k => "$100K+",
            Self::NotSure => "Not Sure",
        }
    }
}

impl FromStr for BudgetRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|budget| budget.slug() == s)
            .ok_or_else(|| CoreError::UnknownBudget(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest_service("Automate our invoicing"), Some(ServiceId::CustomAutomations));
        assert_eq!(suggest_service("a better WORKFLOW"), Some(ServiceId::CustomAutomations));
        assert_eq!(suggest_service("support agent"), Some(ServiceId::CustomAgents));
        assert_eq!(suggest_service("new website"), Some(ServiceId::CustomWebApps));
        assert_eq!(suggest_service("public speaking"), Some(ServiceId::KeynoteCoaching));
        assert_eq!(suggest_service("better presentations"), Some(ServiceId::KeynoteCoaching));
        assert_eq!(suggest_service("hello"), None);
        assert_eq!(suggest_service(""), None);
    }

    #[test]
    fn test_suggestion_order() {
        // automation keywords beat agent keywords
        assert_eq!(suggest_service("an AI workflow"), Some(ServiceId::CustomAutomations));
        // "ai" inside "email" still counts
        assert_eq!(suggest_service("email"), Some(ServiceId::CustomAgents));
    }

    #[test]
    fn test_service_slugs_round_trip() {
        for service in ServiceId::ALL {
            assert_eq!(service.slug().parse::<ServiceId>().unwrap(), service);
        }
        assert_eq!(
            "not-sure".parse::<ServiceId>(),
            Err(CoreError::UnknownService("not-sure".into()))
        );
    }

    #[test]
    fn test_budget_labels() {
        assert_eq!("100k+".parse::<BudgetRange>().unwrap().label(), "$100K+");
        assert!("1m".parse::<BudgetRange>().is_err());
    }
}
