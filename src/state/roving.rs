// Roving focus and selection state.
// Ordered registry of focus stops with a focus pointer, an independent
// selection pointer, and wrap-aware navigation.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::{Result, TabgateError};

/// A single focusable/selectable item in the registry.
#[derive(Debug, Clone)]
pub struct Stop<R> {
    /// Stable identifier, unique within the registry.
    id: String,
    /// Opaque handle to whatever the stop focuses. Never used for
    /// ordering or equality.
    handle: R,
}

impl<R> Stop<R> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handle(&self) -> &R {
        &self.handle
    }
}

/// Axis hint for directional navigation. The state machine itself never
/// enforces it; consumers decide which keys map to which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn display(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        *self == Orientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        *self == Orientation::Vertical
    }
}

/// What happens to the focus/selection pointers when the stop they
/// reference is unregistered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnregisterPolicy {
    /// Leave the pointers dangling. Navigation from a dangling focus
    /// yields no movement; a dangling selection resolves to no handle.
    #[default]
    Keep,
    /// Clear whichever pointers referenced the removed stop.
    Clear,
    /// Retarget pointers to the stop now occupying the removed index,
    /// falling back to the new last stop, then to none.
    Reassign,
}

impl UnregisterPolicy {
    pub fn display(&self) -> &'static str {
        match self {
            UnregisterPolicy::Keep => "keep",
            UnregisterPolicy::Clear => "clear",
            UnregisterPolicy::Reassign => "reassign",
        }
    }
}

/// Emitted after every logical state change, drained with
/// [`RovingState::take_events`]. Calls that change nothing emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RovingEvent {
    Registered {
        id: String,
    },
    Unregistered {
        id: String,
    },
    FocusChanged {
        from: Option<String>,
        to: Option<String>,
    },
    SelectionChanged {
        from: Option<String>,
        to: Option<String>,
    },
    FocusReset,
    OrientationChanged(Orientation),
}

/// Navigation surface of the tab state, consumed by input routing.
pub trait FocusNavigable {
    type Handle;

    fn register(&mut self, id: &str, handle: Self::Handle) -> Result<bool>;
    fn unregister(&mut self, id: &str) -> Option<Self::Handle>;
    fn move_to(&mut self, id: &str) -> bool;
    fn next(&mut self) -> bool;
    fn previous(&mut self) -> bool;
    fn first(&mut self) -> bool;
    fn last(&mut self) -> bool;
    fn current_id(&self) -> Option<&str>;
}

/// Selection surface of the tab state, consumed by the confirm/cancel
/// handlers.
pub trait Selectable {
    fn select(&mut self, id: &str);
    fn selected_id(&self) -> Option<&str>;
}

/// Roving-focus/selection state machine over an ordered stop registry.
///
/// Focus (`current_id`) and selection (`selected_id`) are independent:
/// navigation moves focus freely while the consumer decides when a
/// focused stop becomes the committed selection.
#[derive(Debug)]
pub struct RovingState<R> {
    /// Registered stops, insertion order = navigation order.
    stops: Vec<Stop<R>>,
    /// Stop currently holding keyboard focus.
    current_id: Option<String>,
    /// Most recent stop focused via a successful move.
    past_id: Option<String>,
    /// Stop the application treats as the committed choice.
    selected_id: Option<String>,
    /// Whether navigation wraps past either end.
    wrap: bool,
    /// Whether selection requires explicit activation. Carried for the
    /// consumer; no mutator here reads it.
    manual: bool,
    /// Incremented on every successful focus move.
    move_count: u64,
    orientation: Orientation,
    unregister_policy: UnregisterPolicy,
    events: VecDeque<RovingEvent>,
}

impl<R> Default for RovingState<R> {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            current_id: None,
            past_id: None,
            selected_id: None,
            wrap: true,
            manual: false,
            move_count: 0,
            orientation: Orientation::default(),
            unregister_policy: UnregisterPolicy::default(),
            events: VecDeque::new(),
        }
    }
}

impl<R> RovingState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_unregister_policy(mut self, policy: UnregisterPolicy) -> Self {
        self.unregister_policy = policy;
        self
    }

    /// Seed both selection and focus with an id before any stop
    /// registers. Not validated; the id resolves once registered.
    pub fn with_selected(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.current_id = Some(id.clone());
        self.selected_id = Some(id);
        self
    }

    /// Append a stop to the registry. Registering an id twice is a
    /// silent no-op (`Ok(false)`); an empty id is the one input that
    /// errors.
    pub fn register(&mut self, id: impl Into<String>, handle: R) -> Result<bool> {
        let id = id.into();
        if id.is_empty() {
            return Err(TabgateError::EmptyStopId);
        }
        if self.contains(&id) {
            return Ok(false);
        }
        tracing::debug!(message = "roving.register", id = id.as_str());
        self.stops.push(Stop {
            id: id.clone(),
            handle,
        });
        self.events.push_back(RovingEvent::Registered { id });
        Ok(true)
    }

    /// Remove a stop, returning its handle. Unknown ids are a no-op.
    /// Pointer repair follows the configured [`UnregisterPolicy`];
    /// `past_id` is history and is never repaired.
    pub fn unregister(&mut self, id: &str) -> Option<R> {
        let index = self.stops.iter().position(|stop| stop.id == id)?;
        let stop = self.stops.remove(index);
        tracing::debug!(message = "roving.unregister", id);
        self.events.push_back(RovingEvent::Unregistered { id: id.to_string() });
        self.repair_pointers(id, index);
        Some(stop.handle)
    }

    /// Move focus to a registered stop. Returns false without any state
    /// change when the id is unknown or already focused; the same-id
    /// no-op is what lets callers re-affirm focus without bumping the
    /// move counter.
    pub fn move_to(&mut self, id: &str) -> bool {
        if self.current_id.as_deref() == Some(id) {
            return false;
        }
        if !self.contains(id) {
            return false;
        }
        let from = self.current_id.clone();
        self.current_id = Some(id.to_string());
        self.past_id = Some(id.to_string());
        self.move_count += 1;
        tracing::debug!(
            message = "roving.move",
            from = from.as_deref(),
            to = id,
            moves = self.move_count
        );
        self.events.push_back(RovingEvent::FocusChanged {
            from,
            to: Some(id.to_string()),
        });
        true
    }

    /// Set the selection. Membership is deliberately not checked;
    /// this is the only mutator that can introduce a dangling pointer.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.selected_id.as_deref() == Some(id.as_str()) {
            return;
        }
        tracing::debug!(
            message = "roving.select",
            from = self.selected_id.as_deref(),
            to = id.as_str()
        );
        let from = self.selected_id.replace(id.clone());
        self.events.push_back(RovingEvent::SelectionChanged {
            from,
            to: Some(id),
        });
    }

    /// Advance focus one stop forward in registry order.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Advance focus one stop backward in registry order.
    pub fn previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Move focus to the first stop. No-op on an empty registry.
    pub fn first(&mut self) -> bool {
        let Some(id) = self.stops.first().map(|stop| stop.id.clone()) else {
            return false;
        };
        self.move_to(&id)
    }

    /// Move focus to the last stop. No-op on an empty registry.
    pub fn last(&mut self) -> bool {
        let Some(id) = self.stops.last().map(|stop| stop.id.clone()) else {
            return false;
        };
        self.move_to(&id)
    }

    /// Clear focus and its history. Selection and the move counter are
    /// untouched.
    pub fn reset(&mut self) {
        if self.current_id.is_none() && self.past_id.is_none() {
            return;
        }
        self.current_id = None;
        self.past_id = None;
        self.events.push_back(RovingEvent::FocusReset);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        self.events
            .push_back(RovingEvent::OrientationChanged(orientation));
    }

    /// Drain events accumulated since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<RovingEvent> {
        self.events.drain(..).collect()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn past_id(&self) -> Option<&str> {
        self.past_id.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn unregister_policy(&self) -> UnregisterPolicy {
        self.unregister_policy
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|stop| stop.id == id)
    }

    pub fn stops(&self) -> &[Stop<R>] {
        &self.stops
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.id.as_str())
    }

    pub fn handle(&self, id: &str) -> Option<&R> {
        self.stops.iter().find(|stop| stop.id == id).map(Stop::handle)
    }

    /// Handle of the selected stop, if the selection resolves.
    pub fn selected_handle(&self) -> Option<&R> {
        self.selected_id.as_deref().and_then(|id| self.handle(id))
    }

    /// Shared traversal for next/previous. With no focus the call acts
    /// as `first()`; a stale focus (id no longer registered) yields no
    /// movement; wrap folds the index with a negative-safe modulo.
    fn step(&mut self, direction: isize) -> bool {
        let Some(current) = self.current_id.clone() else {
            return self.first();
        };
        let Some(index) = self.stops.iter().position(|stop| stop.id == current) else {
            return false;
        };
        let len = self.stops.len() as isize;
        let mut next_index = index as isize + direction;
        if self.wrap {
            next_index = ((next_index % len) + len) % len;
        }
        if (0..len).contains(&next_index) {
            let id = self.stops[next_index as usize].id.clone();
            self.move_to(&id)
        } else {
            false
        }
    }

    fn repair_pointers(&mut self, removed: &str, removed_index: usize) {
        match self.unregister_policy {
            UnregisterPolicy::Keep => {}
            UnregisterPolicy::Clear => {
                if self.current_id.as_deref() == Some(removed) {
                    let from = self.current_id.take();
                    self.events
                        .push_back(RovingEvent::FocusChanged { from, to: None });
                }
                if self.selected_id.as_deref() == Some(removed) {
                    let from = self.selected_id.take();
                    self.events
                        .push_back(RovingEvent::SelectionChanged { from, to: None });
                }
            }
            UnregisterPolicy::Reassign => {
                let replacement = self
                    .stops
                    .get(removed_index)
                    .or_else(|| self.stops.last())
                    .map(|stop| stop.id.clone());
                if self.current_id.as_deref() == Some(removed) {
                    let from = std::mem::replace(&mut self.current_id, replacement.clone());
                    self.events.push_back(RovingEvent::FocusChanged {
                        from,
                        to: replacement.clone(),
                    });
                }
                if self.selected_id.as_deref() == Some(removed) {
                    let from = std::mem::replace(&mut self.selected_id, replacement.clone());
                    self.events.push_back(RovingEvent::SelectionChanged {
                        from,
                        to: replacement,
                    });
                }
            }
        }
    }
}

impl<R> FocusNavigable for RovingState<R> {
    type Handle = R;

    fn register(&mut self, id: &str, handle: R) -> Result<bool> {
        RovingState::register(self, id, handle)
    }

    fn unregister(&mut self, id: &str) -> Option<R> {
        RovingState::unregister(self, id)
    }

    fn move_to(&mut self, id: &str) -> bool {
        RovingState::move_to(self, id)
    }

    fn next(&mut self) -> bool {
        RovingState::next(self)
    }

    fn previous(&mut self) -> bool {
        RovingState::previous(self)
    }

    fn first(&mut self) -> bool {
        RovingState::first(self)
    }

    fn last(&mut self) -> bool {
        RovingState::last(self)
    }

    fn current_id(&self) -> Option<&str> {
        RovingState::current_id(self)
    }
}

impl<R> Selectable for RovingState<R> {
    fn select(&mut self, id: &str) {
        RovingState::select(self, id);
    }

    fn selected_id(&self) -> Option<&str> {
        RovingState::selected_id(self)
    }
}
