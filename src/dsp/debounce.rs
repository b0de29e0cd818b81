//! Digit debouncing over per-window symbol decisions.
//!
//! A single key press spans many analysis windows, and a noisy line
//! drops the occasional window. The debouncer turns the raw window
//! stream into press events: a digit is reported once after
//! `hits_to_begin` consecutive windows agree on it, and the press ends
//! only after `misses_to_end` consecutive windows fail to confirm it.

use super::tones::Symbol;

/// Windows that must agree before a digit is reported.
pub const HITS_TO_BEGIN: usize = 2;
/// Non-confirming windows that end an active press.
pub const MISSES_TO_END: usize = 2;

#[derive(Debug, Clone)]
pub struct Debouncer {
    hits_to_begin: usize,
    misses_to_end: usize,
    /// The digit currently being reported, NONE when idle.
    sent: Symbol,
    /// The digit accumulating hits toward a report.
    candidate: Symbol,
    hits: usize,
    misses: usize,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(HITS_TO_BEGIN, MISSES_TO_END)
    }
}

impl Debouncer {
    pub fn new(hits_to_begin: usize, misses_to_end: usize) -> Self {
        Debouncer {
            hits_to_begin: hits_to_begin.max(1),
            misses_to_end: misses_to_end.max(1),
            sent: Symbol::NONE,
            candidate: Symbol::NONE,
            hits: 0,
            misses: 0,
        }
    }

    /// Feed one window's decision; returns a digit the moment its
    /// press is confirmed, at most once per press.
    pub fn push(&mut self, sym: Symbol) -> Option<Symbol> {
        if !self.sent.is_none() {
            return self.push_while_active(sym);
        }

        if sym.is_none() {
            self.candidate = Symbol::NONE;
            self.hits = 0;
            return None;
        }
        if sym == self.candidate {
            self.hits += 1;
        } else {
            self.candidate = sym;
            self.hits = 1;
        }
        if self.hits >= self.hits_to_begin {
            self.sent = sym;
            self.hits = 0;
            self.misses = 0;
            return Some(sym);
        }
        None
    }

    fn push_while_active(&mut self, sym: Symbol) -> Option<Symbol> {
        if sym == self.sent {
            self.misses = 0;
            self.candidate = sym;
            self.hits = 0;
            return None;
        }

        self.misses += 1;
        if !sym.is_none() && sym == self.candidate {
            self.hits += 1;
        } else if sym.is_none() {
            self.candidate = Symbol::NONE;
            self.hits = 0;
        } else {
            self.candidate = sym;
            self.hits = 1;
        }

        if self.misses >= self.misses_to_end {
            self.sent = Symbol::NONE;
            self.misses = 0;
            // A different digit may already have enough hits to start
            // its own press the moment the old one ends.
            if !self.candidate.is_none() && self.hits >= self.hits_to_begin {
                self.sent = self.candidate;
                self.hits = 0;
                return Some(self.sent);
            }
        }
        None
    }

    /// Forget all press state.
    pub fn reset(&mut self) {
        self.sent = Symbol::NONE;
        self.candidate = Symbol::NONE;
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(deb: &mut Debouncer, codes: &[u8]) -> Vec<u8> {
        codes
            .iter()
            .filter_map(|&c| deb.push(Symbol(c)))
            .map(|s| s.0)
            .collect()
    }

    #[test]
    fn reports_after_two_hits_once_per_press() {
        let mut deb = Debouncer::default();
        assert_eq!(feed(&mut deb, &[1, 1, 1, 1, 1]), vec![1]);
    }

    #[test]
    fn single_window_blip_is_ignored() {
        let mut deb = Debouncer::default();
        assert_eq!(feed(&mut deb, &[7, 0, 0, 0]), Vec::<u8>::new());
    }

    #[test]
    fn release_then_repeat_reports_again() {
        let mut deb = Debouncer::default();
        let out = feed(&mut deb, &[4, 4, 4, 0, 0, 4, 4]);
        assert_eq!(out, vec![4, 4]);
    }

    #[test]
    fn one_dropped_window_does_not_end_press() {
        let mut deb = Debouncer::default();
        let out = feed(&mut deb, &[9, 9, 0, 9, 9, 9]);
        assert_eq!(out, vec![9], "a single miss inside a press re-reports nothing");
    }

    #[test]
    fn digit_change_rolls_over() {
        let mut deb = Debouncer::default();
        let out = feed(&mut deb, &[1, 1, 2, 2, 2]);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn hits_to_begin_one_reports_immediately() {
        let mut deb = Debouncer::new(1, 2);
        assert_eq!(feed(&mut deb, &[3, 3]), vec![3]);
    }

    #[test]
    fn reset_clears_active_press() {
        let mut deb = Debouncer::default();
        assert_eq!(feed(&mut deb, &[5, 5]), vec![5]);
        deb.reset();
        assert_eq!(feed(&mut deb, &[5, 5]), vec![5]);
    }
}
