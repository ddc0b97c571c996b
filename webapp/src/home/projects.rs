use dioxus::prelude::*;

use crate::{
    common::motion::{Motion, Reveal},
    components::{
        icons::{Code, ExternalLink, GitHub},
        section_heading::SectionHeading,
    },
    theme::{THEME, themed},
};
use api::{SECTION_PROJECTS, content::Project};
use folio_common::{STAGGER_STEP_MS, content::PROJECTS, stagger_delay};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let theme = THEME();

    let chip_class = if theme.is_dark() { "chip chip-dark" } else { "chip" };

    rsx! {
        article { class: themed("project-card", theme),
            if project.featured {
                span { class: "featured-badge", "Featured" }
            }

            div { class: "project-image-wrap",
                img { class: "project-image", src: project.image, alt: project.title }
                div { class: "project-overlay" }
            }

            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-desc", "{project.description}" }

                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: chip_class, "{tag}" }
                    }
                }

                div { class: "project-actions",
                    a {
                        class: "project-action live press",
                        href: project.live_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        ExternalLink { size: 16 }
                        span { "Live Demo" }
                    }
                    a {
                        class: "project-action press",
                        href: project.github_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        GitHub { size: 16 }
                        span { "Code" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let section_class = format!("section {}", themed("projects-section", THEME()));

    rsx! {
        section { id: SECTION_PROJECTS, class: section_class,
            div { class: "container",
                SectionHeading {
                    accent: "Projects",
                    subtitle: "A showcase of my latest work, featuring modern web applications built with cutting-edge technologies."
                        .to_owned(),
                    badge: rsx! { Code { size: 32 } },
                }

                div { class: "project-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{project.id}",
                            motion: Motion::Scale,
                            delay_ms: stagger_delay(0, index, STAGGER_STEP_MS),
                            class: "lift",
                            ProjectCard { project: *project }
                        }
                    }
                }

                Reveal { motion: Motion::Up, delay_ms: 300, class: "section-footer",
                    span { class: "coming-soon",
                        span { class: "pulse-dot" }
                        "More projects coming soon"
                    }
                }
            }
        }
    }
}
