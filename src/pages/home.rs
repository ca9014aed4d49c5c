//! The single portfolio page: hero, about, projects, and contact sections,
//! each revealed as it scrolls into view.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;

/// Home page assembling all sections.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <Reveal>
                <h1>"Hi, I build things for the web."</h1>
                <p>"Full-stack developer with a soft spot for fast, small tools."</p>
            </Reveal>
        </section>

        <section id="about" class="about">
            <Reveal>
                <h2>"About"</h2>
                <p>
                    "I enjoy turning rough ideas into working software, and I care "
                    "about the details that make an interface feel effortless."
                </p>
            </Reveal>
        </section>

        <section id="projects" class="projects">
            <Reveal>
                <h2>"Projects"</h2>
                <div class="projects__grid">
                    <ProjectCard
                        title="Task Tracker"
                        blurb="A keyboard-driven task manager that stays out of the way."
                    />
                    <ProjectCard
                        title="Weather Dashboard"
                        blurb="Hour-by-hour forecasts with sensible defaults."
                    />
                    <ProjectCard
                        title="Recipe Box"
                        blurb="Collect, scale, and share recipes without the life story."
                    />
                </div>
            </Reveal>
        </section>

        <section id="contact" class="contact">
            <Reveal>
                <h2>"Get in touch"</h2>
                <ContactForm/>
            </Reveal>
        </section>
    }
}

/// A single project tile.
#[component]
fn ProjectCard(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3>{title}</h3>
            <p>{blurb}</p>
        </article>
    }
}
