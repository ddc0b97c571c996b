use dioxus::prelude::*;

// declarative entrance animations
//
// a Reveal wraps its children in a div that starts hidden and animates in.
// with `immediate` it plays on mount (the hero); otherwise it waits until the
// element scrolls into view, which the observer installed by
// use_reveal_observer() signals by adding the in-view class.  each element
// only ever animates once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Up,
    Left,
    Right,
    Scale,
    Fade,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::Up => "motion-up",
            Motion::Left => "motion-left",
            Motion::Right => "motion-right",
            Motion::Scale => "motion-scale",
            Motion::Fade => "motion-fade",
        }
    }
}

pub fn reveal_class(motion: Motion, immediate: bool, extra: &str) -> String {
    let trigger = if immediate { "enter" } else { "reveal" };
    format!("{trigger} {} {extra}", motion.class())
        .trim_end()
        .to_owned()
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default)]
    motion: Motion,
    #[props(default)]
    delay_ms: u32,
    #[props(default)]
    immediate: bool,
    #[props(default, into)]
    class: String,
    children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let class = reveal_class(props.motion, props.immediate, &props.class);
    let delay = props.delay_ms;

    rsx! {
        div { class: "{class}", style: "--motion-delay: {delay}ms;", {props.children} }
    }
}

const REVEAL_OBSERVER: &str = r#"
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            if (entry.isIntersecting) {
                entry.target.classList.add("in-view");
                observer.unobserve(entry.target);
            }
        }
    }, { threshold: 0.15 });

    const watch = () => document
        .querySelectorAll(".reveal:not(.in-view)")
        .forEach((el) => observer.observe(el));

    watch();
    new MutationObserver(watch).observe(document.body, { childList: true, subtree: true });
"#;

pub fn use_reveal_observer() {
    use_effect(|| {
        let _ = document::eval(REVEAL_OBSERVER);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(Motion::Up, false, ""), "reveal motion-up");
        assert_eq!(
            reveal_class(Motion::Left, true, "about-media"),
            "enter motion-left about-media"
        );
    }
}
