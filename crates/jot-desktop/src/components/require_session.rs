//! Route guard for authenticated views.

use dioxus::prelude::*;

use crate::app::Route;
use crate::state::AppState;

/// Renders its children only when a session token is present.
///
/// Without one, the current history entry is replaced with the sign-in view
/// so back-navigation cannot return to the protected content.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();

    if (state.session)().is_none() {
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
