//! Email confirmation view

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, Input};
use crate::state::AppState;
use crate::theme;

#[component]
pub fn ConfirmSignUp() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let colors = theme::palette();

    let mut code = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Confirmation needs the address collected at sign-up; without it there
    // is nothing to confirm.
    let Some(email_value) = (state.pending_confirmation_email)() else {
        nav.replace(Route::SignUp {});
        return rsx! {};
    };

    let email_for_submit = email_value.clone();
    let submit = move |_: MouseEvent| {
        if busy() {
            return;
        }
        error.set(None);

        let code_value = code().trim().to_string();
        if code_value.is_empty() {
            error.set(Some("Confirmation code is required.".to_string()));
            return;
        }
        let Some(service) = state.auth_service.read().clone() else {
            error.set(Some("Authentication is unavailable in this build.".to_string()));
            return;
        };

        busy.set(true);

        let email_value = email_for_submit.clone();
        let mut error_signal = error;
        let mut busy_signal = busy;
        spawn(async move {
            match service.confirm_sign_up(&email_value, &code_value).await {
                Ok(()) => {
                    // Clearing the carried email re-renders this view ahead
                    // of the route change; leave it set.
                    nav.push(Route::SignIn {});
                }
                Err(confirm_error) => {
                    tracing::error!("Confirmation failed: {}", confirm_error);
                    error_signal.set(Some(confirm_error.to_string()));
                }
            }
            busy_signal.set(false);
        });
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",

            div {
                class: "auth-panel",
                style: "
                    width: 340px;
                    padding: 28px;
                    border: 1px solid {colors.border_light};
                    border-radius: 12px;
                    background: {colors.bg_secondary};
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                ",

                h1 {
                    style: "margin: 0 0 6px 0; font-size: 22px;",
                    "Verify Your Account"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: {colors.text_secondary};",
                    "Enter the code we sent to {email_value}."
                }

                if let Some(error) = error() {
                    div {
                        class: "auth-error",
                        style: "font-size: 12px; color: {colors.error};",
                        "{error}"
                    }
                }

                Input {
                    placeholder: "Confirmation code",
                    value: code(),
                    disabled: busy(),
                    oninput: move |evt: FormEvent| code.set(evt.value()),
                }

                Button {
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Verifying..." } else { "Verify Account" }
                }
            }
        }
    }
}
