use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

// shared by Button and the few raw <button>s that need a type or disabled
// state, so every button on the page draws from the same classes
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let mut classes = format!("btn press {} {}", variant.class(), size.class());
    if full_width {
        classes.push_str(" btn-block");
    }
    classes
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    size: ButtonSize,
    #[props(default)]
    icon: Option<Element>,
    #[props(default)]
    icon_position: IconPosition,
    #[props(default)]
    full_width: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_classes(props.variant, props.size, props.full_width);
    let onclick = props.onclick;

    let (left, right) = match props.icon_position {
        IconPosition::Left => (props.icon, None),
        IconPosition::Right => (None, props.icon),
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            if let Some(icon) = left {
                span { class: "btn-icon", {icon} }
            }
            {props.children}
            if let Some(icon) = right {
                span { class: "btn-icon", {icon} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::default(), ButtonSize::default(), false),
            "btn press btn-primary btn-md"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Large, true),
            "btn press btn-outline btn-lg btn-block"
        );
    }
}
