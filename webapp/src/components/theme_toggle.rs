use dioxus::prelude::*;

use crate::components::icons::{Moon, Sun};
use crate::theme::{THEME, toggle_theme};

// both icons stay mounted and cross-fade, so the button never changes size
#[component]
pub fn ThemeToggle() -> Element {
    let theme = THEME();
    let dark = theme.is_dark();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": theme.toggle_label(),
            onclick: move |_| toggle_theme(),
            span { class: "theme-icon-stack",
                span { class: if dark { "theme-icon hidden" } else { "theme-icon" }, Sun {} }
                span { class: if dark { "theme-icon" } else { "theme-icon hidden" }, Moon {} }
            }
        }
    }
}
