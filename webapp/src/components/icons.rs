use dioxus::prelude::*;

// inline stroke icons, 24x24 viewbox, drawn in currentColor so they pick up
// the surrounding text color in both themes

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    #[props(default = 20)]
    size: u32,
}

#[derive(Clone, PartialEq, Props)]
struct IconFrameProps {
    size: u32,
    children: Element,
}

#[component]
fn IconFrame(props: IconFrameProps) -> Element {
    let size = props.size;

    rsx! {
        svg {
            class: "icon",
            "xmlns": "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            {props.children}
        }
    }
}

#[component]
pub fn Sun(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub fn Moon(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn Menu(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        }
    }
}

#[component]
pub fn Close(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ArrowUp(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        }
    }
}

#[component]
pub fn ArrowLeft(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        }
    }
}

#[component]
pub fn ArrowDown(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M12 5v14" }
            path { d: "m19 12-7 7-7-7" }
        }
    }
}

#[component]
pub fn ChevronRight(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

#[component]
pub fn Send(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        }
    }
}

#[component]
pub fn Mail(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn Phone(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

#[component]
pub fn MapPin(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn ExternalLink(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

#[component]
pub fn GitHub(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        }
    }
}

#[component]
pub fn LinkedIn(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        }
    }
}

#[component]
pub fn Briefcase(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
            rect { x: "2", y: "6", width: "20", height: "14", rx: "2" }
        }
    }
}

#[component]
pub fn Code(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "m16 18 6-6-6-6" }
            path { d: "m8 6-6 6 6 6" }
        }
    }
}

#[component]
pub fn Building(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" }
            path { d: "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2" }
            path { d: "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2" }
            path { d: "M10 6h4" }
            path { d: "M10 10h4" }
            path { d: "M10 14h4" }
            path { d: "M10 18h4" }
        }
    }
}

#[component]
pub fn Calendar(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M3 10h18" }
        }
    }
}

#[component]
pub fn CheckCircle(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            path { d: "m9 11 3 3L22 4" }
        }
    }
}

#[component]
pub fn Download(props: IconProps) -> Element {
    rsx! {
        IconFrame { size: props.size,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "m7 10 5 5 5-5" }
            path { d: "M12 15V3" }
        }
    }
}
