// App state and main event loop.
// Wires the roving tab state, the confirm dialog, and the activity
// console together and routes keyboard input between them.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::config::Config;
use crate::state::{
    ConsoleState, DialogEvent, DialogState, FocusNavigable, Orientation, RovingEvent, RovingState,
    Selectable,
};
use crate::ui;

/// Content panel a tab stop renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Overview,
    Activity,
    Settings,
    Scratch,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Overview => "Overview",
            PanelKind::Activity => "Activity",
            PanelKind::Settings => "Settings",
            PanelKind::Scratch => "Scratch",
        }
    }
}

/// Main application state.
pub struct App {
    /// Tab registry plus the focus and selection pointers.
    pub tabs: RovingState<PanelKind>,
    /// Confirm dialog latch.
    pub dialog: DialogState,
    /// Activity log shown on the Activity panel.
    pub console: ConsoleState,
    /// Effective configuration.
    pub config: Config,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Id suffix for the next scratch tab.
    next_scratch: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut tabs = RovingState::new()
            .with_wrap(config.wrap)
            .with_manual(config.manual)
            .with_orientation(config.orientation)
            .with_unregister_policy(config.unregister_policy);
        if let Some(id) = &config.initial_tab {
            tabs = tabs.with_selected(id);
        }
        for (id, kind) in [
            ("tab1", PanelKind::Overview),
            ("tab2", PanelKind::Activity),
            ("tab3", PanelKind::Settings),
        ] {
            tabs.register(id, kind)
                .expect("default tab ids are non-empty");
        }

        Self {
            tabs,
            dialog: DialogState::new(),
            console: ConsoleState::new(),
            config,
            should_quit: false,
            next_scratch: 4,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_events();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(key.code);
                }
            }
        }
        Ok(())
    }

    /// Route one key press. Split from the event read so tests can
    /// drive the app with synthesized keys.
    pub fn on_key(&mut self, code: KeyCode) {
        if self.dialog.visible() {
            self.on_dialog_key(code);
        } else {
            self.on_browse_key(code);
        }
        self.drain_events();
    }

    /// The dialog traps input: only confirm/cancel keys do anything
    /// while it is open.
    fn on_dialog_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('y') => self.confirm_switch(),
            KeyCode::Esc | KeyCode::Char('n') => self.cancel_switch(),
            _ => {}
        }
    }

    fn on_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('o') => {
                let flipped = self.tabs.orientation().flipped();
                self.tabs.set_orientation(flipped);
            }
            KeyCode::Char('r') => self.tabs.reset(),
            KeyCode::Char('a') => self.add_scratch_tab(),
            KeyCode::Char('x') => self.close_focused_tab(),
            code => {
                let orientation = self.tabs.orientation();
                route_tab_key(&mut self.tabs, code, orientation);
            }
        }
    }

    /// Activation intent on the focused tab. A pending discrepancy
    /// between focus and selection opens the confirm dialog; otherwise
    /// there is nothing to commit.
    fn activate(&mut self) {
        if self.tabs.current_id().is_none() {
            return;
        }
        if self.tabs.selected_id() != self.tabs.current_id() {
            self.dialog.show();
        }
    }

    /// Confirm path: hide the dialog, run the save stub, then promote
    /// the focused tab to the committed selection.
    fn confirm_switch(&mut self) {
        self.dialog.hide();
        self.save();
        commit_pending_switch(&mut self.tabs);
    }

    /// Cancel path: hide the dialog only. Focus stays on the discarded
    /// tab unless the revert policy is enabled.
    fn cancel_switch(&mut self) {
        self.dialog.hide();
        if self.config.revert_focus_on_cancel {
            revert_pending_switch(&mut self.tabs);
        }
    }

    /// Saving is not implemented; the confirm flow only announces it.
    fn save(&mut self) {
        tracing::warn!("save requested but not implemented");
        self.console.warn("save is not implemented yet");
    }

    fn add_scratch_tab(&mut self) {
        let id = format!("tab{}", self.next_scratch);
        self.next_scratch += 1;
        if let Ok(true) = self.tabs.register(&id, PanelKind::Scratch) {
            self.tabs.move_to(&id);
        }
    }

    fn close_focused_tab(&mut self) {
        let Some(id) = self.tabs.current_id().map(str::to_string) else {
            return;
        };
        self.tabs.unregister(&id);
    }

    /// Drain state events into the activity console and run the one
    /// coordination effect: focus is re-affirmed whenever the dialog
    /// transitions to hidden.
    fn drain_events(&mut self) {
        loop {
            let events = self.tabs.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.on_roving_event(event);
            }
        }
        for event in self.dialog.take_events() {
            match event {
                DialogEvent::Shown => self.console.info("confirm dialog opened"),
                DialogEvent::Hidden => {
                    self.console.info("confirm dialog closed");
                    self.reaffirm_focus();
                }
            }
        }
    }

    fn on_roving_event(&mut self, event: RovingEvent) {
        match event {
            RovingEvent::Registered { id } => self.console.info(format!("registered {id}")),
            RovingEvent::Unregistered { id } => self.console.info(format!("closed {id}")),
            RovingEvent::FocusChanged { to: Some(id), .. } => {
                if !self.tabs.is_manual() {
                    self.tabs.select(id.clone());
                }
                self.console.info(format!("focus on {id}"));
            }
            RovingEvent::FocusChanged { to: None, .. } => self.console.info("focus cleared"),
            RovingEvent::SelectionChanged { to: Some(id), .. } => {
                self.console.info(format!("selected {id}"));
            }
            RovingEvent::SelectionChanged { to: None, .. } => {
                self.console.info("selection cleared");
            }
            RovingEvent::FocusReset => self.console.info("focus reset"),
            RovingEvent::OrientationChanged(orientation) => self
                .console
                .info(format!("orientation set to {}", orientation.display())),
        }
    }

    /// A same-id move is a state no-op, so this never disturbs the
    /// pointers; it exists to put focus restoration on the record after
    /// the dialog closes.
    fn reaffirm_focus(&mut self) {
        if let Some(id) = self.tabs.current_id().map(str::to_string) {
            self.tabs.move_to(&id);
            tracing::debug!(message = "app.reaffirm_focus", id = id.as_str());
        }
    }
}

/// Keyboard routing for the tab list. Needs only the navigation surface
/// of the tab state. Returns whether the key was a navigation key.
fn route_tab_key(
    tabs: &mut impl FocusNavigable,
    code: KeyCode,
    orientation: Orientation,
) -> bool {
    match code {
        KeyCode::Tab => {
            tabs.next();
        }
        KeyCode::BackTab => {
            tabs.previous();
        }
        KeyCode::Right if orientation.is_horizontal() => {
            tabs.next();
        }
        KeyCode::Left if orientation.is_horizontal() => {
            tabs.previous();
        }
        KeyCode::Down if orientation.is_vertical() => {
            tabs.next();
        }
        KeyCode::Up if orientation.is_vertical() => {
            tabs.previous();
        }
        KeyCode::Home => {
            tabs.first();
        }
        KeyCode::End => {
            tabs.last();
        }
        _ => return false,
    }
    true
}

/// Promote the focused stop to the committed selection.
fn commit_pending_switch(tabs: &mut (impl FocusNavigable + Selectable)) {
    if let Some(id) = tabs.current_id().map(str::to_string) {
        tabs.select(&id);
    }
}

/// Snap focus back to the committed selection.
fn revert_pending_switch(tabs: &mut (impl FocusNavigable + Selectable)) {
    if let Some(id) = tabs.selected_id().map(str::to_string) {
        tabs.move_to(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ConsoleLevel, UnregisterPolicy};

    fn manual_app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_starts_on_initial_tab() {
        let app = manual_app();
        assert_eq!(app.tabs.current_id(), Some("tab1"));
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
        assert_eq!(app.tabs.len(), 3);
    }

    #[test]
    fn test_tab_switch_requires_confirmation() {
        let mut app = manual_app();
        app.on_key(KeyCode::Right);
        assert_eq!(app.tabs.current_id(), Some("tab2"));
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
        assert!(!app.dialog.visible());

        app.on_key(KeyCode::Enter);
        assert!(app.dialog.visible());
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
    }

    #[test]
    fn test_confirm_commits_selection() {
        let mut app = manual_app();
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);
        app.on_key(KeyCode::Char('y'));

        assert!(!app.dialog.visible());
        assert_eq!(app.tabs.selected_id(), Some("tab2"));
        assert_eq!(app.tabs.current_id(), Some("tab2"));
    }

    #[test]
    fn test_cancel_keeps_selection_and_focus() {
        let mut app = manual_app();
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);
        app.on_key(KeyCode::Esc);

        assert!(!app.dialog.visible());
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
        // Focus stays on the discarded tab under the default policy.
        assert_eq!(app.tabs.current_id(), Some("tab2"));
    }

    #[test]
    fn test_cancel_with_revert_policy_snaps_focus_back() {
        let mut app = App::new(Config {
            revert_focus_on_cancel: true,
            ..Config::default()
        });
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);
        app.on_key(KeyCode::Char('n'));

        assert_eq!(app.tabs.selected_id(), Some("tab1"));
        assert_eq!(app.tabs.current_id(), Some("tab1"));
    }

    #[test]
    fn test_activate_without_discrepancy_is_quiet() {
        let mut app = manual_app();
        app.on_key(KeyCode::Enter);
        assert!(!app.dialog.visible());
    }

    #[test]
    fn test_dialog_traps_other_keys() {
        let mut app = manual_app();
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);

        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Char('q'));
        assert!(app.dialog.visible());
        assert!(!app.should_quit);
        assert_eq!(app.tabs.current_id(), Some("tab2"));
    }

    #[test]
    fn test_selection_follows_focus_when_not_manual() {
        let mut app = App::new(Config {
            manual: false,
            ..Config::default()
        });
        app.on_key(KeyCode::Right);
        assert_eq!(app.tabs.selected_id(), Some("tab2"));

        // Nothing pending, so activation never opens the dialog.
        app.on_key(KeyCode::Enter);
        assert!(!app.dialog.visible());
    }

    #[test]
    fn test_tab_key_roves_regardless_of_orientation() {
        let mut app = App::new(Config {
            orientation: Orientation::Vertical,
            ..Config::default()
        });
        app.on_key(KeyCode::Right);
        assert_eq!(app.tabs.current_id(), Some("tab1"));

        app.on_key(KeyCode::Down);
        assert_eq!(app.tabs.current_id(), Some("tab2"));

        app.on_key(KeyCode::Tab);
        assert_eq!(app.tabs.current_id(), Some("tab3"));
    }

    #[test]
    fn test_orientation_toggle_remaps_arrows() {
        let mut app = manual_app();
        app.on_key(KeyCode::Char('o'));
        assert!(app.tabs.orientation().is_vertical());

        app.on_key(KeyCode::Right);
        assert_eq!(app.tabs.current_id(), Some("tab1"));
        app.on_key(KeyCode::Down);
        assert_eq!(app.tabs.current_id(), Some("tab2"));
    }

    #[test]
    fn test_home_end_jump() {
        let mut app = manual_app();
        app.on_key(KeyCode::End);
        assert_eq!(app.tabs.current_id(), Some("tab3"));
        app.on_key(KeyCode::Home);
        assert_eq!(app.tabs.current_id(), Some("tab1"));
    }

    #[test]
    fn test_reset_key_clears_focus() {
        let mut app = manual_app();
        app.on_key(KeyCode::Char('r'));
        assert_eq!(app.tabs.current_id(), None);
        assert_eq!(app.tabs.selected_id(), Some("tab1"));

        // Stepping from nowhere lands on the first tab.
        app.on_key(KeyCode::Right);
        assert_eq!(app.tabs.current_id(), Some("tab1"));
    }

    #[test]
    fn test_add_scratch_tab_focuses_it() {
        let mut app = manual_app();
        app.on_key(KeyCode::Char('a'));

        assert_eq!(app.tabs.len(), 4);
        assert_eq!(app.tabs.current_id(), Some("tab4"));
        assert_eq!(app.tabs.handle("tab4"), Some(&PanelKind::Scratch));
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
    }

    #[test]
    fn test_close_focused_tab_leaves_selection_dangling() {
        let mut app = manual_app();
        app.on_key(KeyCode::Char('x'));

        assert_eq!(app.tabs.len(), 2);
        assert!(!app.tabs.contains("tab1"));
        // Default policy keeps the pointers on the closed tab.
        assert_eq!(app.tabs.current_id(), Some("tab1"));
        assert_eq!(app.tabs.selected_id(), Some("tab1"));
        assert!(app.tabs.selected_handle().is_none());
    }

    #[test]
    fn test_close_with_reassign_policy_repoints() {
        let mut app = App::new(Config {
            unregister_policy: UnregisterPolicy::Reassign,
            ..Config::default()
        });
        app.on_key(KeyCode::Char('x'));

        assert_eq!(app.tabs.current_id(), Some("tab2"));
        assert_eq!(app.tabs.selected_id(), Some("tab2"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = manual_app();
        app.on_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_console_records_activity() {
        let mut app = manual_app();
        app.drain_events();
        let before = app.console.len();

        app.on_key(KeyCode::Right);
        assert!(app.console.len() > before);
    }

    #[test]
    fn test_confirm_logs_save_warning() {
        let mut app = manual_app();
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);
        app.on_key(KeyCode::Char('y'));

        assert!(
            app.console
                .messages()
                .any(|m| m.level == ConsoleLevel::Warn && m.message.contains("not implemented"))
        );
    }
}
