use dioxus::prelude::*;

use crate::common::motion::{Motion, Reveal};

// "About <accent>Me</accent>" style heading shared by every section
//
// sections with a badge get the larger gradient treatment, the rest get a
// plain accent word and an underline rule
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    #[props(default, into)]
    title: String,
    #[props(into)]
    accent: String,
    #[props(default)]
    subtitle: Option<String>,
    #[props(default)]
    badge: Option<Element>,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let badged = props.badge.is_some();
    let heading_class = if badged { "section-heading badged" } else { "section-heading" };
    let accent_class = if badged { "section-accent gradient" } else { "section-accent" };

    rsx! {
        Reveal { motion: Motion::Up, class: heading_class,
            if let Some(badge) = props.badge {
                div { class: "section-badge", {badge} }
            }
            h2 { class: "section-title",
                if !props.title.is_empty() {
                    "{props.title} "
                }
                span { class: accent_class, "{props.accent}" }
            }
            if !badged {
                div { class: "section-rule" }
            }
            if let Some(subtitle) = props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
