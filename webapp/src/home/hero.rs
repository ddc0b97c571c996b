use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::{
    common::{
        motion::{Motion, Reveal},
        scroll::scroll_to_section,
    },
    components::{
        button::{Button, ButtonSize, ButtonVariant},
        icons::{ArrowDown, ChevronRight},
    },
};
use api::{SECTION_ABOUT, SECTION_CONTACT, SECTION_HOME, SECTION_PROJECTS};
use folio_common::{
    config::SiteConfig,
    content::{HERO_GREETING, HERO_ROLES, images},
    typewriter::Typewriter,
};

// the typed role line; the task lives as long as the hero does
fn use_typewriter(config: &SiteConfig) -> Signal<String> {
    let mut typed = use_signal(String::new);
    let timing = config.hero.clone();

    use_future(move || {
        let timing = timing.clone();
        async move {
            let mut writer = Typewriter::new(HERO_ROLES, timing);
            loop {
                let delay = writer.tick();
                typed.set(writer.text());
                TimeoutFuture::new(delay).await;
            }
        }
    });

    typed
}

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let typed = use_typewriter(&config);

    rsx! {
        section { id: SECTION_HOME, class: "hero",
            div { class: "hero-backdrop" }

            div { class: "container",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        Reveal { immediate: true, delay_ms: 200,
                            h2 { class: "hero-greeting", "{HERO_GREETING}" }
                        }
                        Reveal { immediate: true, delay_ms: 300,
                            h1 { class: "hero-role",
                                "I'm a "
                                span { class: "section-accent gradient", "{typed}" }
                                span { class: "caret" }
                            }
                        }
                        Reveal { immediate: true, delay_ms: 400,
                            p { class: "hero-tagline", "{config.site.tagline}" }
                        }
                        Reveal { immediate: true, delay_ms: 500, class: "hero-actions",
                            Button {
                                size: ButtonSize::Large,
                                icon: rsx! { ChevronRight { size: 18 } },
                                onclick: move |_| scroll_to_section(SECTION_PROJECTS),
                                "View Projects"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Large,
                                onclick: move |_| scroll_to_section(SECTION_CONTACT),
                                "Contact Me"
                            }
                        }
                    }

                    Reveal { motion: Motion::Scale, immediate: true, delay_ms: 300, class: "hero-portrait",
                        div { class: "portrait-ring",
                            img { src: images::HERO, alt: "{config.site.owner}" }
                        }
                    }
                }
            }

            button {
                class: "scroll-cue",
                r#type: "button",
                "aria-label": "Scroll to about",
                onclick: move |_| scroll_to_section(SECTION_ABOUT),
                ArrowDown { size: 24 }
            }
        }
    }
}
