//! Page Components

mod about;
mod contact;
mod home;
mod portfolio;
mod roi_calculator;
mod services;
mod testimonials;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;
pub use roi_calculator::RoiCalculatorPage;
pub use services::ServicesPage;
pub use testimonials::TestimonialsPage;
