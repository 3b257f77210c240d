//! Main App Component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location, path};

use mab_core::{AnalyticsEvent, AnalyticsSink};

use crate::analytics::{self, GtagSink};
use crate::components::{Footer, Header};
use crate::pages::{
    AboutPage, ContactPage, HomePage, PortfolioPage, RoiCalculatorPage, ServicesPage,
    TestimonialsPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let sink: Arc<dyn AnalyticsSink> = Arc::new(GtagSink::from_build_env());
    provide_context(sink);

    view! {
        <Router>
            <PageViews />
            <Header />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/testimonials") view=TestimonialsPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/roi-calculator") view=RoiCalculatorPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Reports a page view on every navigation
#[component]
fn PageViews() -> impl IntoView {
    let location = use_location();
    let sink = analytics::sink();

    Effect::new(move |_| {
        let path = location.pathname.get();
        sink.track(&AnalyticsEvent::PageView { path });
    });
}
