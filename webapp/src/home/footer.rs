use dioxus::prelude::*;

use crate::{
    common::{
        current_year,
        scroll::{scroll_to_section, scroll_to_top},
    },
    components::{icons::ArrowUp, social_links::SocialLinks},
};
use folio_common::{
    config::SiteConfig,
    content::{CONTACT_DETAILS, FOOTER_BLURB, QUICK_LINKS},
};

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        div { class: "footer-brand", "{config.site.brand}" }
                        p { class: "footer-blurb", "{FOOTER_BLURB}" }
                        SocialLinks {}
                    }

                    div {
                        h3 { class: "footer-heading", "Quick Links" }
                        ul { class: "footer-links",
                            for link in QUICK_LINKS.iter() {
                                li { key: "{link.anchor}",
                                    a {
                                        class: "footer-link",
                                        href: link.href(),
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            scroll_to_section(link.anchor);
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "footer-contact",
                        h3 { class: "footer-heading", "Contact" }
                        for detail in CONTACT_DETAILS.iter() {
                            p { key: "{detail.label}", "{detail.value}" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {year} {config.site.owner}. All rights reserved." }
                    button {
                        class: "back-to-top press",
                        r#type: "button",
                        "aria-label": "Back to top",
                        onclick: move |_| scroll_to_top(),
                        ArrowUp { size: 20 }
                    }
                }
            }
        }
    }
}
