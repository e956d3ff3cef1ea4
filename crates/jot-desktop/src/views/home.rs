//! Landing view

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme;

/// Public landing screen; signed-in sessions go straight to the dashboard.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();

    if state.is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let colors = theme::palette();

    rsx! {
        div {
            class: "home-container",
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",

            div {
                style: "
                    width: 360px;
                    padding: 32px;
                    border: 1px solid {colors.border_light};
                    border-radius: 12px;
                    background: {colors.bg_secondary};
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                ",

                h1 {
                    style: "margin: 0; font-size: 28px;",
                    "Jot"
                }
                p {
                    style: "margin: 0; color: {colors.text_secondary};",
                    "Your notes, wherever you sign in."
                }

                div {
                    style: "display: flex; gap: 12px; justify-content: center;",
                    Button {
                        onclick: move |_| { nav.push(Route::SignIn {}); },
                        "Sign In"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| { nav.push(Route::SignUp {}); },
                        "Sign Up"
                    }
                }
            }
        }
    }
}
