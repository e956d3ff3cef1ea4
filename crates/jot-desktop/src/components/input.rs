//! Input component

use dioxus::prelude::*;

use crate::theme;

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    #[props(default = String::new())] style: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let colors = theme::palette();

    rsx! {
        input {
            style: "
                padding: 7px 10px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                font-size: 13px;
                outline: none;
                {style}
            ",
            r#type,
            placeholder,
            value,
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
