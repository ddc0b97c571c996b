use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{
    Route,
    components::{
        button::{Button, ButtonSize, ButtonVariant, IconPosition, button_classes},
        icons::ArrowLeft,
    },
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_hook(|| debug!(path = path.as_str(), "no route"));

    let home_class = button_classes(ButtonVariant::Secondary, ButtonSize::Medium, false);

    rsx! {
        div { class: "not-found",
            div { class: "not-found-code", "404" }
            p { class: "not-found-text", "There's nothing here." }
            p { class: "not-found-path", "{path}" }
            Link { class: home_class, to: Route::Home {}, "Back to the portfolio" }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                icon: rsx! { ArrowLeft { size: 16 } },
                icon_position: IconPosition::Left,
                onclick: move |_| navigator().go_back(),
                "Previous page"
            }
        }
    }
}
