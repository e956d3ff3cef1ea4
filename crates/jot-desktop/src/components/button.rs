//! Button component

use dioxus::prelude::*;

use crate::theme;

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default = String::new())] style: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let colors = theme::palette();

    let (background, color, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, "transparent"),
        ButtonVariant::Secondary => (colors.bg_secondary, colors.text_primary, colors.border),
        ButtonVariant::Ghost => ("transparent", colors.text_secondary, "transparent"),
    };
    let opacity = if disabled { "0.6" } else { "1" };

    rsx! {
        button {
            style: "
                padding: 6px 14px;
                border: 1px solid {border};
                border-radius: 6px;
                background: {background};
                color: {color};
                cursor: pointer;
                font-size: 13px;
                opacity: {opacity};
                {style}
            ",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
