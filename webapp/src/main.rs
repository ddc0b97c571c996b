#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

use folio_common::config::{SiteConfig, read_config};

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod not_found;
use not_found::NotFound;

mod theme;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    let config = read_config().expect("failed to read site config");
    info!(owner = config.site.owner.as_str(), "portfolio starting up");

    LaunchBuilder::web().with_context(config).launch(App);
}

// the whole site is one page; everything else is a dead link
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();

    theme::use_theme_root();
    common::motion::use_reveal_observer();

    rsx! {
        document::Title { "{config.site.title}" }
        document::Meta { name: "description", content: "{config.site.description}" }
        style { "{common::style::SITE_STYLES}" }
        div { class: "app-root", Router::<Route> {} }
    }
}
