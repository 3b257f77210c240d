//! Portfolio Page

use leptos::prelude::*;
use mab_core::site::routes;
use mab_core::AnalyticsEvent;

use crate::analytics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    All,
    Agents,
    Automations,
    WebApps,
}

impl Category {
    const FILTERS: [Self; 4] = [Self::All, Self::Agents, Self::Automations, Self::WebApps];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Agents => "AI Agents",
            Self::Automations => "Automations",
            Self::WebApps => "Web Apps",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub tagline: &'static str,
    pub description: &'static str,
    pub roi: &'static str,
    pub how_it_works: [&'static str; 4],
    pub why_it_matters: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "executive-liaison",
        title: "The Executive Liaison",
        category: Category::Agents,
        tagline: "AI agent that schedules, follows up, and never forgets",
        description: "An autonomous AI agent that manages executive calendars, handles meeting coordination, and provides intelligent follow-ups.",
        roi: "$150,000 annual savings in assistant costs",
        how_it_works: [
            "Natural language processing for email parsing",
            "Calendar API integration for real-time scheduling",
            "Context-aware response generation",
            "Automated follow-up sequencing",
        ],
        why_it_matters: "Executives gain back 15-20 hours per week, focusing on strategic decisions rather than administrative tasks.",
    },
    Project {
        id: "zero-touch-crm",
        title: "Zero-Touch CRM",
        category: Category::Automations,
        tagline: "Customer data flows seamlessly, no human intervention required",
        description: "Fully automated CRM system that captures, enriches, and routes customer data without manual entry.",
        roi: "87% reduction in data entry errors",
        how_it_works: [
            "Webhook integration with all customer touchpoints",
            "AI-powered data enrichment and validation",
            "Automated segmentation and tagging",
            "Real-time sync across platforms",
        ],
        why_it_matters: "Sales teams close deals faster with clean, accurate data always at their fingertips.",
    },
    Project {
        id: "real-estate-closer",
        title: "The Real Estate Closer",
        category: Category::Agents,
        tagline: "Multilingual agent that qualifies leads across 12 languages",
        description: "AI agent specialized in real estate lead qualification, operating in multiple languages with cultural awareness.",
        roi: "3x increase in qualified lead conversion",
        how_it_works: [
            "Multi-language NLP models (12 languages)",
            "Property database integration",
            "Qualification scoring algorithm",
            "Automated handoff to human agents",
        ],
        why_it_matters: "Capture global opportunities without hiring multilingual staff, operating 24/7 across time zones.",
    },
    Project {
        id: "auto-invoicing-engine",
        title: "Auto-Invoicing Engine",
        category: Category::Automations,
        tagline: "From project completion to payment, fully automated",
        description: "End-to-end invoicing automation that detects project milestones and generates invoices automatically.",
        roi: "Payment collection 45% faster",
        how_it_works: [
            "Project management tool integration",
            "Milestone detection algorithms",
            "Dynamic invoice generation",
            "Automated payment reminders",
        ],
        why_it_matters: "Improve cash flow dramatically while eliminating the tedious task of manual invoicing.",
    },
    Project {
        id: "ai-dashboard-platform",
        title: "AI-Powered Dashboard Platform",
        category: Category::WebApps,
        tagline: "Real-time business intelligence at your fingertips",
        description: "Custom web application providing real-time analytics and actionable insights for executive decision-making.",
        roi: "Decision-making time reduced by 60%",
        how_it_works: [
            "Data aggregation from multiple sources",
            "Real-time visualization",
            "AI-generated insight summaries",
            "Mobile-responsive architecture",
        ],
        why_it_matters: "Transform raw data into strategic advantage with instant access to the metrics that matter.",
    },
    Project {
        id: "client-portal-luxury",
        title: "Luxury Client Portal",
        category: Category::WebApps,
        tagline: "Premium experience for high-value clients",
        description: "Bespoke client portal with document sharing, secure messaging, and project tracking.",
        roi: "Client satisfaction score increased by 35%",
        how_it_works: [
            "End-to-end encryption for security",
            "Real-time project status updates",
            "Integrated payment gateway",
            "White-label branding",
        ],
        why_it_matters: "Elevate your brand with a client experience that matches your premium positioning.",
    },
];

/// Projects shown under a filter, in catalog order
pub fn projects_in(category: Category) -> impl Iterator<Item = &'static Project> {
    PROJECTS
        .iter()
        .filter(move |p| category == Category::All || p.category == category)
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let category = RwSignal::new(Category::All);
    let selected = RwSignal::new(None::<&'static Project>);
    let sink = analytics::sink();

    let filters = Category::FILTERS
        .into_iter()
        .map(|filter| {
            let class = move || {
                if category.get() == filter { "filter active" } else { "filter" }
            };
            view! {
                <button class=class on:click=move |_| category.set(filter)>{filter.label()}</button>
            }
        })
        .collect_view();

    let cards = move || {
        let sink = sink.clone();
        projects_in(category.get())
            .map(|project| {
                let sink = sink.clone();
                let open = move |_| {
                    sink.track(&AnalyticsEvent::PortfolioView {
                        project_name: project.title.into(),
                    });
                    selected.set(Some(project));
                };
                view! {
                    <article class="project-card" id=project.id on:click=open>
                        <span class="category">{project.category.label()}</span>
                        <h3>{project.title}</h3>
                        <p class="tagline">{project.tagline}</p>
                        <p>{project.description}</p>
                        <p class="roi">{project.roi}</p>
                    </article>
                }
            })
            .collect_view()
    };

    let detail = move || {
        selected.get().map(|project| {
            let steps = project
                .how_it_works
                .into_iter()
                .enumerate()
                .map(|(i, step)| view! { <li><span class="step">{i + 1}</span>{step}</li> })
                .collect_view();

            view! {
                <div class="modal" on:click=move |_| selected.set(None)>
                    <div class="modal-body" on:click=|ev| ev.stop_propagation()>
                        <button class="close" on:click=move |_| selected.set(None)>"×"</button>
                        <h2>{project.title}</h2>
                        <p class="tagline">{project.tagline}</p>
                        <p>{project.description}</p>
                        <h3>"The ROI"</h3>
                        <p class="roi">{project.roi}</p>
                        <h3>"How It Works"</h3>
                        <ol>{steps}</ol>
                        <h3>"Why It Matters"</h3>
                        <p>{project.why_it_matters}</p>
                        <a href=routes::CONTACT class="btn btn-primary">"Start a Similar Project"</a>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="portfolio">
            <header class="page-header">
                <h1>"The Proof"</h1>
                <p>"Real results from real implementations. See how we've transformed businesses with AI."</p>
            </header>
            <nav class="filters">{filters}</nav>
            <section class="projects">{cards}</section>
            {detail}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_every_project() {
        assert_eq!(projects_in(Category::All).count(), 6);
    }

    #[test]
    fn test_filter_by_category() {
        let agents: Vec<_> = projects_in(Category::Agents).map(|p| p.id).collect();
        assert_eq!(agents, vec!["executive-liaison", "real-estate-closer"]);

        assert!(projects_in(Category::WebApps).all(|p| p.category == Category::WebApps));
        assert_eq!(projects_in(Category::Automations).count(), 2);
    }
}
