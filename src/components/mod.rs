//! UI Components
//!
//! Behaviour attached to server-rendered markup.

mod delete_button;

pub use delete_button::bind_delete_buttons;
