//! Observers: the presentation-side consumers of game events.

use super::event::GameEvent;

/// Receives every game event, in order, as it happens.
///
/// Implementations must not assume any wall-clock pacing; they queue or
/// animate events at their own speed.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Observer that records events for later replay.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}
