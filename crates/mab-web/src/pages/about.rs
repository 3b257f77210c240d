//! About Page

use leptos::prelude::*;
use mab_core::site::routes;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SkillGroup {
    Technical,
    Leadership,
}

struct Skill {
    name: &'static str,
    group: SkillGroup,
    case_title: &'static str,
    case_description: &'static str,
    outcome: &'static str,
}

static SKILLS: [Skill; 6] = [
    Skill {
        name: "AI Agent Development",
        group: SkillGroup::Technical,
        case_title: "Multilingual Customer Service Agent",
        case_description: "Built an AI agent capable of handling customer inquiries in 12 languages, processing 10,000+ conversations monthly.",
        outcome: "92% customer satisfaction rate, 60% reduction in response time",
    },
    Skill {
        name: "Process Automation",
        group: SkillGroup::Technical,
        case_title: "End-to-End Invoice Automation",
        case_description: "Designed a complete automation system from project completion detection to payment collection.",
        outcome: "$180K annual savings, 45% faster payment collection",
    },
    Skill {
        name: "Full-Stack Development",
        group: SkillGroup::Technical,
        case_title: "Real-Time Analytics Dashboard",
        case_description: "Created a dashboard processing 1M+ data points daily with sub-second response times.",
        outcome: "60% faster decision-making, 99.9% uptime",
    },
    Skill {
        name: "Cloud Architecture",
        group: SkillGroup::Technical,
        case_title: "Scalable GCP Infrastructure",
        case_description: "Architected and deployed a fully serverless solution on Google Cloud Platform.",
        outcome: "40% cost reduction, auto-scaling to 100K+ concurrent users",
    },
    Skill {
        name: "Keynote Speaking",
        group: SkillGroup::Leadership,
        case_title: "Executive Presentation Coaching",
        case_description: "Coached C-level executives on AI strategy presentations for board meetings.",
        outcome: "3 funding rounds secured, $15M+ raised",
    },
    Skill {
        name: "Strategic Consulting",
        group: SkillGroup::Leadership,
        case_title: "AI Transformation Roadmap",
        case_description: "Developed comprehensive AI adoption strategy for Fortune 500 company.",
        outcome: "18-month roadmap, $2M projected annual savings",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static Skill>);

    let skill_buttons = move |group: SkillGroup| {
        SKILLS
            .iter()
            .filter(move |s| s.group == group)
            .map(|skill| {
                view! {
                    <button class="skill" on:click=move |_| selected.set(Some(skill))>{skill.name}</button>
                }
            })
            .collect_view()
    };

    let case_study = move || {
        selected.get().map(|skill| {
            view! {
                <div class="modal" on:click=move |_| selected.set(None)>
                    <div class="modal-body" on:click=|ev| ev.stop_propagation()>
                        <button class="close" on:click=move |_| selected.set(None)>"×"</button>
                        <h2>{skill.name}</h2>
                        <h3>{skill.case_title}</h3>
                        <p>{skill.case_description}</p>
                        <p class="outcome">{skill.outcome}</p>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="about">
            <section class="founder">
                <div class="headshot">"MAB"</div>
                <div>
                    <h1>"The Architect"</h1>
                    <div class="name">"Mark Anthony Barrameda"</div>
                    <p class="role">"Founder & Chief AI Strategist"</p>
                    <p>
                        "With over a decade of experience in AI, automation, and full-stack development, Mark has transformed operations for businesses ranging from startups to Fortune 500 companies."
                    </p>
                    <p>
                        "His unique blend of technical expertise and strategic vision enables him to design solutions that don't just work; they transform."
                    </p>
                    <p class="quote">
                        "\"I don't build AI for the sake of AI. I build AI to eliminate friction and unlock human potential.\""
                    </p>
                    <a href=routes::CONTACT class="btn btn-primary">"Schedule Consultation"</a>
                </div>
            </section>

            <section class="story">
                <h2>"The MAB AI Strategies Story"</h2>
                <p>
                    "MAB AI Strategies was born from a simple observation: businesses were drowning in repetitive tasks, while powerful AI tools sat unused or misunderstood."
                </p>
                <p>
                    "After years of watching talented teams waste hours on work that could be automated, Mark founded MAB with a mission: to make enterprise-grade AI accessible, practical, and transformative for businesses of all sizes."
                </p>
                <p>
                    "Today, MAB AI Strategies serves as the bridge between cutting-edge AI technology and real-world business operations, delivering custom agents, automations, and web applications that generate measurable ROI."
                </p>
                <p class="motto">"We don't sell technology. We deliver transformation."</p>
            </section>

            <section class="resume">
                <h2>"The Interactive Resume"</h2>
                <p>"Click on any skill to see a real case study demonstrating that expertise."</p>
                <h3>"Technical Expertise"</h3>
                <div class="skills">{skill_buttons(SkillGroup::Technical)}</div>
                <h3>"Leadership & Strategy"</h3>
                <div class="skills">{skill_buttons(SkillGroup::Leadership)}</div>
            </section>

            {case_study}

            <section class="cta-band">
                <h2>"Let's Build Something Extraordinary"</h2>
                <a href=routes::CONTACT class="btn btn-primary">"Get in Touch"</a>
            </section>
        </div>
    }
}
