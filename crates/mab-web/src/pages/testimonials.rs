//! Testimonials Page

use leptos::prelude::*;
use mab_core::site::routes;

use crate::components::Stat;

struct Testimonial {
    name: &'static str,
    title: &'static str,
    company: &'static str,
    quote: &'static str,
    metric: &'static str,
}

const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Martinez",
        title: "CEO",
        company: "TechVentures Inc.",
        quote: "MAB AI Strategies transformed our operations completely. The custom automation reduced our processing time by 80%, and we're now serving 3x more clients with the same team size.",
        metric: "80% time reduction",
    },
    Testimonial {
        name: "James Chen",
        title: "VP of Operations",
        company: "GlobalScale Partners",
        quote: "The AI agent implementation was seamless. What impressed me most was the ROI: we broke even in just 6 weeks and have saved over $200K annually since deployment.",
        metric: "$200K+ annual savings",
    },
    Testimonial {
        name: "Emily Rodriguez",
        title: "Founder",
        company: "Luxury Real Estate Group",
        quote: "Mark's keynote coaching elevated my presentation skills to a whole new level. I closed 3 major deals directly attributed to the confidence and polish I gained.",
        metric: "3 major deals closed",
    },
    Testimonial {
        name: "David Thompson",
        title: "CTO",
        company: "FinanceFlow Solutions",
        quote: "The custom web app MAB delivered was beyond our expectations. Beautiful design, flawless functionality, and our client satisfaction scores jumped 40%.",
        metric: "40% satisfaction increase",
    },
    Testimonial {
        name: "Lisa Park",
        title: "Director of Marketing",
        company: "Innovate Digital",
        quote: "Working with MAB was a game-changer. The automation workflows eliminated hours of manual work, letting our team focus on creativity and strategy.",
        metric: "25+ hours saved weekly",
    },
    Testimonial {
        name: "Michael Brown",
        title: "Managing Partner",
        company: "Prestige Consulting",
        quote: "I've worked with many consultants, but MAB's attention to detail and technical excellence is unmatched. Every solution is crafted with precision.",
        metric: "99.8% uptime achieved",
    },
];

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let cards = TESTIMONIALS
        .iter()
        .map(|t| {
            view! {
                <article class="testimonial">
                    <blockquote>{t.quote}</blockquote>
                    <span class="metric">{t.metric}</span>
                    <footer>
                        <div class="name">{t.name}</div>
                        <div class="role">{format!("{}, {}", t.title, t.company)}</div>
                    </footer>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="testimonials">
            <header class="page-header">
                <h1>"The Social Proof"</h1>
                <p>"Hear from the businesses we've transformed with AI-powered solutions."</p>
            </header>

            <section class="stats">
                <Stat value="100+" label="Projects Delivered" />
                <Stat value="98%" label="Client Satisfaction" />
                <Stat value="$5M+" label="Client Savings Generated" />
                <Stat value="24/7" label="AI Agent Availability" />
            </section>

            <section class="testimonial-grid">{cards}</section>

            <section class="video-testimonials">
                <h2>"Video Testimonials"</h2>
                <p>"Video testimonials coming soon"</p>
            </section>

            <section class="cta-band">
                <h2>"Join Our Success Stories"</h2>
                <a href=routes::CONTACT class="btn btn-primary">"Start Your Transformation"</a>
            </section>
        </div>
    }
}
