// Confirm dialog state.
// A visibility latch; always legal to show or hide, events fire on
// actual transitions only.

use std::collections::VecDeque;

/// Emitted when visibility actually changes, drained with
/// [`DialogState::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Shown,
    Hidden,
}

/// Visibility latch for the tab-switch confirm dialog.
#[derive(Debug, Default)]
pub struct DialogState {
    visible: bool,
    events: VecDeque<DialogEvent>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            tracing::debug!(message = "dialog.show");
            self.events.push_back(DialogEvent::Shown);
        }
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            tracing::debug!(message = "dialog.hide");
            self.events.push_back(DialogEvent::Hidden);
        }
    }

    /// Drain events accumulated since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<DialogEvent> {
        self.events.drain(..).collect()
    }
}
