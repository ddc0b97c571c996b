use dioxus::prelude::*;

use crate::{
    common::{
        motion::{Motion, Reveal},
        scroll::scroll_to_section,
    },
    components::{
        button::{ButtonSize, ButtonVariant, button_classes},
        icons::Download,
        section_heading::SectionHeading,
    },
};
use api::{SECTION_ABOUT, SECTION_CONTACT};
use folio_common::{
    config::SiteConfig,
    content::{ABOUT_HEADLINE, ABOUT_PARAGRAPHS, PROFILE_FACTS, images},
};

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();

    let hire_class = button_classes(ButtonVariant::Primary, ButtonSize::Large, false);
    let cv_class = button_classes(ButtonVariant::Outline, ButtonSize::Large, false);

    rsx! {
        section { id: SECTION_ABOUT, class: "section",
            div { class: "container",
                SectionHeading { title: "About", accent: "Me" }

                div { class: "about-grid",
                    Reveal { motion: Motion::Left, delay_ms: 200,
                        img {
                            class: "about-image",
                            src: images::ABOUT,
                            alt: "{config.site.owner} working",
                        }
                    }

                    Reveal { motion: Motion::Right, delay_ms: 400,
                        h3 { class: "about-headline", "{ABOUT_HEADLINE}" }
                        for paragraph in ABOUT_PARAGRAPHS.iter() {
                            p { class: "about-paragraph", "{paragraph}" }
                        }

                        div { class: "fact-grid",
                            for fact in PROFILE_FACTS.iter() {
                                div { key: "{fact.label}", class: "fact",
                                    span { class: "fact-dot" }
                                    span {
                                        strong { "{fact.label}:" }
                                        " {fact.value}"
                                    }
                                }
                            }
                        }

                        div { class: "about-actions",
                            a {
                                class: hire_class,
                                href: "#{SECTION_CONTACT}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    scroll_to_section(SECTION_CONTACT);
                                },
                                "Hire Me"
                            }
                            a {
                                class: cv_class,
                                href: images::RESUME,
                                download: "",
                                "Download CV"
                                span { class: "btn-icon", Download { size: 18 } }
                            }
                        }
                    }
                }
            }
        }
    }
}
