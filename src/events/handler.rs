//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// Default interval between ticks.
const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Turns crossterm input into application events, emitting `Event::Tick`
/// whenever nothing arrives within the tick interval.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    /// Use a custom tick interval. Zero falls back to the default.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        let tick_rate = match tick_rate_ms {
            0 => DEFAULT_TICK_RATE,
            ms => Duration::from_millis(ms),
        };
        Self { tick_rate }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Block for at most one tick and return the next event.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(translate(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a raw crossterm event. Key releases and repeats (reported on
/// Windows) and events the table ignores become ticks.
fn translate(raw: CrosstermEvent) -> Event {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_tick_rates() {
        assert_eq!(EventHandler::new().tick_rate(), DEFAULT_TICK_RATE);
        assert_eq!(
            EventHandler::with_tick_rate(50).tick_rate(),
            Duration::from_millis(50)
        );
        assert_eq!(EventHandler::with_tick_rate(0).tick_rate(), DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_translate_key_press() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(translate(CrosstermEvent::Key(key)), Event::Key(key));
    }

    #[test]
    fn test_translate_key_release_is_tick() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(translate(CrosstermEvent::Key(key)), Event::Tick);
    }

    #[test]
    fn test_translate_resize_and_focus() {
        assert_eq!(translate(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(translate(CrosstermEvent::FocusGained), Event::Tick);
    }
}
