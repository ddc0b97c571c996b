use dioxus::prelude::*;

use crate::{
    common::motion::{Motion, Reveal},
    components::{
        icons::{Briefcase, Building, Calendar, CheckCircle, MapPin},
        section_heading::SectionHeading,
    },
    theme::{THEME, themed},
};
use api::{SECTION_EXPERIENCE, content::ExperienceEntry};
use folio_common::{STAGGER_STEP_MS, content::EXPERIENCE, stagger_delay};

// entries alternate sides of the line on wide screens, starting on the left
fn timeline_side(index: usize) -> (&'static str, Motion) {
    if index % 2 == 0 {
        ("timeline-item left", Motion::Left)
    } else {
        ("timeline-item right", Motion::Right)
    }
}

#[derive(Clone, PartialEq, Props)]
struct TimelineCardProps {
    entry: ExperienceEntry,
}

#[component]
fn TimelineCard(props: TimelineCardProps) -> Element {
    let entry = props.entry;
    let theme = THEME();

    let chip_class = if theme.is_dark() { "chip chip-dark" } else { "chip" };

    rsx! {
        div { class: themed("timeline-card", theme),
            div { class: "timeline-head",
                img {
                    class: "company-logo",
                    src: entry.logo,
                    alt: "{entry.company} logo",
                }
                div {
                    h3 { class: "timeline-role", "{entry.role}" }
                    div { class: "timeline-company",
                        Building { size: 16 }
                        span { "{entry.company}" }
                    }
                }
            }

            div { class: "timeline-meta",
                span {
                    Calendar { size: 16 }
                    "{entry.duration}"
                }
                span {
                    MapPin { size: 16 }
                    "{entry.location}"
                }
            }

            ul { class: "timeline-highlights",
                for highlight in entry.highlights.iter() {
                    li { key: "{highlight}",
                        CheckCircle { size: 16 }
                        span { "{highlight}" }
                    }
                }
            }

            div { class: "timeline-tech",
                for tech in entry.technologies.iter() {
                    span { key: "{tech}", class: chip_class, "{tech}" }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    let section_class = format!("section {}", themed("experience-section", THEME()));

    rsx! {
        section { id: SECTION_EXPERIENCE, class: section_class,
            div { class: "container",
                SectionHeading {
                    accent: "Experience",
                    subtitle: "A journey through my professional experience, showcasing the projects and technologies I've worked with."
                        .to_owned(),
                    badge: rsx! { Briefcase { size: 32 } },
                }

                div { class: "timeline",
                    div { class: "timeline-line" }
                    for (index, entry) in EXPERIENCE.iter().enumerate() {
                        div { key: "{entry.company}", class: timeline_side(index).0,
                            div { class: "timeline-dot" }
                            Reveal {
                                motion: timeline_side(index).1,
                                delay_ms: stagger_delay(0, index, 2 * STAGGER_STEP_MS),
                                TimelineCard { entry: *entry }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_alternates() {
        assert_eq!(timeline_side(0), ("timeline-item left", Motion::Left));
        assert_eq!(timeline_side(1), ("timeline-item right", Motion::Right));
        assert_eq!(timeline_side(2).0, "timeline-item left");
    }
}
