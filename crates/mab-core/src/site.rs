//! Site Constants

pub const SITE_NAME: &str = "MAB AI Strategies";

pub const SITE_DESCRIPTION: &str =
    "Elite AI agents, custom automations, and web applications for discerning businesses.";

pub const DEFAULT_SITE_URL: &str = "https://mabaistrategies.com";

/// Public contact address, also the default lead and notification recipient
pub const SITE_EMAIL: &str = "mark@mabaistrategies.com";

/// Hours within which every enquiry is answered
pub const RESPONSE_WINDOW: &str = "24 hours";

pub mod routes {
    pub const HOME: &str = "/";
    pub const SERVICES: &str = "/services";
    pub const PORTFOLIO: &str = "/portfolio";
    pub const TESTIMONIALS: &str = "/testimonials";
    pub const ABOUT: &str = "/about";
    pub const CONTACT: &str = "/contact";
    pub const ROI_CALCULATOR: &str = "/roi-calculator";
}
