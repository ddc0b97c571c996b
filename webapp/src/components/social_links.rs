use dioxus::prelude::*;

use crate::components::icons::LinkedIn;
use folio_common::content::{SOCIALS, social_icon_url};

// row of round social buttons used by the hero and the footer
//
// simpleicons dropped its linkedin glyph, so that one is drawn inline
#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div { class: "social-links",
            for social in SOCIALS.iter() {
                a {
                    key: "{social.name}",
                    class: "social-link press",
                    href: social.url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": social.name,
                    if social.name == "linkedin" {
                        LinkedIn {}
                    } else {
                        img { src: social_icon_url(social.name), alt: social.name }
                    }
                }
            }
        }
    }
}
