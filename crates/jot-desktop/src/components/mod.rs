//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod input;
mod note_card;
mod note_form;
mod require_session;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use require_session::RequireSession;
