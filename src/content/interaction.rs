//! Local, ephemeral state behind the interactive blocks.
//!
//! These are plain state machines; the components own one each in a signal
//! and drive it from click handlers and timers.

use std::time::Duration;

/// How long the "copied" acknowledgment stays up after a copy.
pub const COPY_ACK_DELAY: Duration = Duration::from_millis(2000);

/// Which accordion item is expanded. At most one at a time, none initially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Opens `index`, closing whatever was open, or closes it if it already
    /// was. Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

/// The active tab of a tabbed block. Defaults to the first declared tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    ids: Vec<String>,
    active: Option<String>,
}

impl TabState {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = ids.first().cloned();
        Self { ids, active }
    }

    /// Switches to `id`. Unknown ids leave the current tab in place and
    /// return false.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.ids.iter().any(|known| known == id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }
}

/// The "copied" acknowledgment of a code block.
///
/// Every press starts a new generation and the timer armed for it carries that
/// generation back to [`CopyAck::expire`]. Only the newest generation can hide
/// the acknowledgment, so a second press inside the window restarts it instead
/// of letting the first timer cut it short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyAck {
    generation: u64,
    shown: bool,
}

impl CopyAck {
    /// Shows the acknowledgment and returns the generation its timer must
    /// hand back.
    pub fn press(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.shown = true;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.shown = false;
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_starts_closed() {
        let state = AccordionState::new(3);
        assert_eq!(state.open_index(), None);
        assert!((0..3).all(|i| !state.is_open(i)));
    }

    #[test]
    fn test_accordion_single_open() {
        let mut state = AccordionState::new(3);
        state.toggle(0);
        assert!(state.is_open(0));

        state.toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
        assert_eq!((0..3).filter(|i| state.is_open(*i)).count(), 1);

        // clicking the open item again closes it
        state.toggle(2);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_accordion_ignores_out_of_range() {
        let mut state = AccordionState::new(2);
        state.toggle(1);
        state.toggle(5);
        assert_eq!(state.open_index(), Some(1));

        let mut empty = AccordionState::new(0);
        empty.toggle(0);
        assert_eq!(empty.open_index(), None);
    }

    #[test]
    fn test_tabs_default_to_first() {
        let state = TabState::new(["t1", "t2", "t3"]);
        assert_eq!(state.active(), Some("t1"));
        assert!(state.is_active("t1"));
        assert!(!state.is_active("t2"));
        assert!(!state.is_active("t3"));
    }

    #[test]
    fn test_tabs_select() {
        let mut state = TabState::new(["t1", "t2", "t3"]);
        assert!(state.select("t3"));
        assert!(state.is_active("t3"));
        assert!(!state.is_active("t1"));
        assert!(!state.is_active("t2"));

        assert!(!state.select("t9"));
        assert_eq!(state.active(), Some("t3"));
    }

    #[test]
    fn test_tabs_empty() {
        let mut state = TabState::new(Vec::<String>::new());
        assert_eq!(state.active(), None);
        assert!(!state.select("anything"));
    }

    #[test]
    fn test_copy_delay_is_two_seconds() {
        assert_eq!(COPY_ACK_DELAY.as_millis(), 2000);
    }

    #[test]
    fn test_copy_ack_press_and_expire() {
        let mut ack = CopyAck::default();
        assert!(!ack.is_shown());

        let generation = ack.press();
        assert!(ack.is_shown());

        ack.expire(generation);
        assert!(!ack.is_shown());
    }

    /// Drives a `CopyAck` with a fake clock the way the component drives it
    /// with a restartable timeout.
    struct FakeTimer {
        now: Duration,
        pending: Option<(Duration, u64)>,
    }

    impl FakeTimer {
        fn new() -> Self {
            Self {
                now: Duration::ZERO,
                pending: None,
            }
        }

        fn click(&mut self, ack: &mut CopyAck) {
            let generation = ack.press();
            // restart, never stack
            self.pending = Some((self.now + COPY_ACK_DELAY, generation));
        }

        fn advance(&mut self, by: Duration, ack: &mut CopyAck) {
            self.now += by;
            if let Some((due, generation)) = self.pending {
                if due <= self.now {
                    self.pending = None;
                    ack.expire(generation);
                }
            }
        }
    }

    #[test]
    fn test_copy_ack_reverts_after_delay() {
        let mut ack = CopyAck::default();
        let mut timer = FakeTimer::new();

        timer.click(&mut ack);
        timer.advance(Duration::from_millis(1999), &mut ack);
        assert!(ack.is_shown());
        timer.advance(Duration::from_millis(1), &mut ack);
        assert!(!ack.is_shown());
    }

    #[test]
    fn test_copy_ack_second_click_restarts_window() {
        let mut ack = CopyAck::default();
        let mut timer = FakeTimer::new();

        timer.click(&mut ack);
        timer.advance(Duration::from_millis(1500), &mut ack);
        timer.click(&mut ack);

        // first window would have closed at 2000ms
        timer.advance(Duration::from_millis(1000), &mut ack);
        assert!(ack.is_shown());

        timer.advance(Duration::from_millis(1000), &mut ack);
        assert!(!ack.is_shown());
    }

    #[test]
    fn test_stale_generation_cannot_hide() {
        let mut ack = CopyAck::default();
        let first = ack.press();
        let second = ack.press();
        ack.expire(first);
        assert!(ack.is_shown());
        ack.expire(second);
        assert!(!ack.is_shown());
    }
}
