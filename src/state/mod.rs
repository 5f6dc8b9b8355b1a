// State management module.
// Roving focus/selection, dialog visibility, and the activity console.

#![allow(dead_code)]

pub mod console;
pub mod dialog;
pub mod roving;

pub use console::{ConsoleLevel, ConsoleMessage, ConsoleState};
pub use dialog::{DialogEvent, DialogState};
pub use roving::{
    FocusNavigable, Orientation, RovingEvent, RovingState, Selectable, UnregisterPolicy,
};
