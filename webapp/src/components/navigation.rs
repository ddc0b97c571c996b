use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::scroll::{scroll_to_section, use_scrolled},
    components::{
        icons::{Close, Menu},
        theme_toggle::ThemeToggle,
    },
};
use api::{SECTION_HOME, content::NavItem};
use folio_common::{
    config::SiteConfig,
    content::NAV_ITEMS,
};

// every nav entry closes the mobile menu before scrolling, so the menu never
// stays open over the section it just jumped to
fn go_to(mut menu_open: Signal<bool>, anchor: &'static str) {
    menu_open.set(false);
    scroll_to_section(anchor);
}

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    item: NavItem,
    class: &'static str,
    menu_open: Signal<bool>,
}

// a real anchor so the links still work as links (new tab, copy address);
// the click itself is taken over for the smooth scroll
#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let item = props.item;
    let menu_open = props.menu_open;

    rsx! {
        a {
            class: props.class,
            href: item.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                go_to(menu_open, item.anchor);
            },
            "{item.label}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<SiteConfig>();

    let scrolled = use_scrolled(config.header.clone());
    let mut menu_open = use_signal(|| false);

    let header_class = if scrolled() { "site-header scrolled" } else { "site-header" };

    rsx! {
        header { class: header_class,
            div { class: "container",
                div { class: "header-inner",
                    button {
                        class: "brand press",
                        r#type: "button",
                        onclick: move |_| go_to(menu_open, SECTION_HOME),
                        "{config.site.brand}"
                    }

                    nav { class: "nav-desktop",
                        for item in NAV_ITEMS.iter() {
                            NavBarLink {
                                key: "{item.anchor}",
                                item: *item,
                                class: "nav-link",
                                menu_open,
                            }
                        }
                    }

                    div { class: "header-actions",
                        ThemeToggle {}
                        button {
                            class: "menu-toggle",
                            r#type: "button",
                            "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                            onclick: move |_| {
                                let open = menu_open();
                                menu_open.set(!open);
                            },
                            if menu_open() {
                                Close { size: 24 }
                            } else {
                                Menu { size: 24 }
                            }
                        }
                    }
                }

                if menu_open() {
                    div { class: "mobile-menu",
                        nav { class: "container",
                            for item in NAV_ITEMS.iter() {
                                NavBarLink {
                                    key: "{item.anchor}",
                                    item: *item,
                                    class: "mobile-nav-link",
                                    menu_open,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
