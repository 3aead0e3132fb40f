//! Once-per-second session timer driven by the frame loop.
//!
//! The frame loop feeds elapsed milliseconds; the ticker turns them into
//! whole-second ticks. A cancelled ticker drops its partial second and yields
//! nothing until started again, so pausing or ending a game never leaves a
//! pending tick behind.

use crate::types::SECOND_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondTicker {
    accum_ms: u32,
    running: bool,
}

impl SecondTicker {
    /// A running ticker.
    pub fn new() -> Self {
        Self {
            accum_ms: 0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) counting from zero.
    pub fn start(&mut self) {
        self.accum_ms = 0;
        self.running = true;
    }

    /// Stop ticking and discard the partial second.
    pub fn cancel(&mut self) {
        self.accum_ms = 0;
        self.running = false;
    }

    /// Milliseconds collected towards the next tick
    pub fn pending_ms(&self) -> u32 {
        self.accum_ms
    }

    /// Feed elapsed time; returns how many whole ticks are due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accum_ms = self.accum_ms.saturating_add(elapsed_ms);
        let ticks = self.accum_ms / SECOND_MS;
        self.accum_ms %= SECOND_MS;
        ticks
    }
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_frames_into_seconds() {
        let mut ticker = SecondTicker::new();
        let mut ticks = 0;
        for _ in 0..62 {
            ticks += ticker.advance(16);
        }
        assert_eq!(ticks, 0);
        ticks += ticker.advance(16);
        assert_eq!(ticks, 1);
        assert_eq!(ticker.pending_ms(), 8);
    }

    #[test]
    fn test_large_gap_yields_several_ticks() {
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.advance(3500), 3);
        assert_eq!(ticker.pending_ms(), 500);
    }

    #[test]
    fn test_cancel_stops_and_discards() {
        let mut ticker = SecondTicker::new();
        ticker.advance(900);
        ticker.cancel();
        assert!(!ticker.is_running());
        assert_eq!(ticker.advance(5000), 0);

        ticker.start();
        assert_eq!(ticker.advance(200), 0);
        assert_eq!(ticker.pending_ms(), 200);
    }
}
