use dioxus::prelude::*;

use crate::{
    common::motion::{Motion, Reveal},
    components::section_heading::SectionHeading,
};
use api::{
    SECTION_SKILLS,
    content::{Skill, SkillCategory},
};
use folio_common::{STAGGER_STEP_MS, content::skills_in, stagger_delay};

// the two category columns slide in from opposite sides
const COLUMN_MOTION: [Motion; 2] = [Motion::Left, Motion::Right];

#[derive(Clone, PartialEq, Props)]
struct SkillCardProps {
    skill: Skill,
    delay_ms: u32,
}

// the bar's width is driven from css once the card is in view, so it grows
// from zero the first time the reader scrolls to it
#[component]
fn SkillCard(props: SkillCardProps) -> Element {
    let skill = props.skill;
    let width = skill.bar_width();

    rsx! {
        Reveal { motion: Motion::Up, delay_ms: props.delay_ms, class: "skill-card",
            div { class: "skill-row",
                div { class: "skill-name",
                    img { src: skill.icon, alt: "" }
                    span { "{skill.name}" }
                }
                span { class: "skill-level", "{width}" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-bar-fill",
                    style: "--level: {width}; --skill-color: {skill.color};",
                }
            }
            p { class: "skill-desc", "{skill.description}" }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: SECTION_SKILLS, class: "section section-alt",
            div { class: "container",
                SectionHeading {
                    title: "My",
                    accent: "Skills",
                    subtitle: "Here are the technologies and tools I'm proficient with. I'm always expanding my skillset and learning new technologies."
                        .to_owned(),
                }

                div { class: "skills-grid",
                    for (category, motion) in SkillCategory::all().into_iter().zip(COLUMN_MOTION) {
                        Reveal {
                            key: "{category}",
                            motion,
                            delay_ms: 200,
                            h3 { class: "skill-column-title", {category.label()} }
                            div { class: "skill-list",
                                for (index, skill) in skills_in(category).enumerate() {
                                    SkillCard {
                                        key: "{skill.name}",
                                        skill: *skill,
                                        delay_ms: stagger_delay(0, index, STAGGER_STEP_MS),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
