//! Sign-up view

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, ButtonVariant, Input};
use crate::state::AppState;
use crate::theme;

#[component]
pub fn SignUp() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let colors = theme::palette();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        if busy() {
            return;
        }
        error.set(None);

        let email_value = email().trim().to_string();
        let password_value = password();
        let confirm_value = confirm_password();
        if email_value.is_empty() || password_value.is_empty() || confirm_value.is_empty() {
            error.set(Some("Email and both password fields are required.".to_string()));
            return;
        }
        // Checked locally; no request leaves the client on a mismatch
        if password_value != confirm_value {
            error.set(Some("Passwords don't match!".to_string()));
            return;
        }
        let Some(service) = state.auth_service.read().clone() else {
            error.set(Some("Authentication is unavailable in this build.".to_string()));
            return;
        };

        busy.set(true);

        let mut pending_email_signal = state.pending_confirmation_email;
        let mut error_signal = error;
        let mut busy_signal = busy;
        spawn(async move {
            match service.sign_up(&email_value, &password_value).await {
                Ok(()) => {
                    // Carry the email to the confirmation step in memory only
                    pending_email_signal.set(Some(email_value));
                    nav.push(Route::ConfirmSignUp {});
                }
                Err(sign_up_error) => {
                    tracing::error!("Sign-up failed: {}", sign_up_error);
                    error_signal.set(Some(sign_up_error.to_string()));
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
                    "Sign Up"
                }

                if let Some(error) = error() {
                    div {
                        class: "auth-error",
                        style: "font-size: 12px; color: {colors.error};",
                        "{error}"
                    }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    disabled: busy(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    disabled: busy(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    disabled: busy(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Button {
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing Up..." } else { "Sign Up" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy(),
                    onclick: move |_| { nav.push(Route::SignIn {}); },
                    "Already have an account? Sign in"
                }
            }
        }
    }
}
