//! Main application component and routes

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::config::API_URL_ENV_VAR;
use jot_core::ClientConfig;

use crate::services::{AuthService, NotesApiService};
use crate::state::AppState;
use crate::theme;
use crate::views::{ConfirmSignUp, Dashboard, Home, SignIn, SignUp};

/// Application routes
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/confirm-signup")]
    ConfirmSignUp {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Services and restored session resolved once at startup.
struct Bootstrap {
    auth_service: Option<Arc<AuthService>>,
    notes_api: Option<Arc<NotesApiService>>,
    restored_token: Option<String>,
    error: Option<String>,
}

fn bootstrap() -> Bootstrap {
    let config = match ClientConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => {
            return Bootstrap {
                auth_service: None,
                notes_api: None,
                restored_token: None,
                error: Some(format!(
                    "{API_URL_ENV_VAR} is not set. Configure the notes API base URL and restart."
                )),
            }
        }
        Err(error) => {
            return Bootstrap {
                auth_service: None,
                notes_api: None,
                restored_token: None,
                error: Some(error.to_string()),
            }
        }
    };

    let auth_service = match AuthService::new(&config) {
        Ok(service) => Some(Arc::new(service)),
        Err(error) => {
            tracing::error!("Failed to build auth client: {}", error);
            None
        }
    };
    let notes_api = match NotesApiService::new(&config) {
        Ok(service) => Some(Arc::new(service)),
        Err(error) => {
            tracing::error!("Failed to build notes client: {}", error);
            None
        }
    };

    // A keyring read failure at startup means signed-out, not a hard error
    let restored_token = auth_service.as_ref().and_then(|service| {
        service.restore_session().unwrap_or_else(|error| {
            tracing::warn!("Failed to restore persisted session: {}", error);
            None
        })
    });

    let error = if auth_service.is_none() || notes_api.is_none() {
        Some("Failed to initialize the API client. See logs for details.".to_string())
    } else {
        None
    };

    Bootstrap {
        auth_service,
        notes_api,
        restored_token,
        error,
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let boot = use_hook(|| Arc::new(bootstrap()));

    let session = use_signal({
        let boot = boot.clone();
        move || boot.restored_token.clone()
    });
    let pending_confirmation_email = use_signal(|| None::<String>);
    let auth_service = use_signal({
        let boot = boot.clone();
        move || boot.auth_service.clone()
    });
    let notes_api = use_signal({
        let boot = boot.clone();
        move || boot.notes_api.clone()
    });
    let init_error = use_signal({
        let boot = boot.clone();
        move || boot.error.clone()
    });

    use_context_provider(|| AppState {
        session,
        pending_confirmation_email,
        auth_service,
        notes_api,
        init_error,
    });

    let colors = theme::palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            if let Some(error) = init_error() {
                div {
                    style: "
                        padding: 10px 16px;
                        background: {colors.bg_secondary};
                        color: {colors.error};
                        border-bottom: 1px solid {colors.border};
                    ",
                    "{error}"
                }
            }

            Router::<Route> {}
        }
    }
}
