use dioxus::prelude::*;

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;

// the whole portfolio, top to bottom; section order matches the nav
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Hero {}
            About {}
            Projects {}
            Skills {}
            Experience {}
            Contact {}
        }
        Footer {}
    }
}
