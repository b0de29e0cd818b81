//! Two-tone synthesis for keypad digits and call-progress signals.
//!
//! Produces raw sample buffers only; feeding them to an audio device
//! is the caller's problem. Samples come out at 16-bit integer scale
//! so they can be decoded with the default thresholds or written
//! straight to a 16-bit WAV.

use std::f64::consts::PI;

use super::tones::{Symbol, SymbolMap, ToneTable};

/// North American dial tone.
pub const DIAL_TONES: (u32, u32) = (350, 440);
/// Busy signal.
pub const BUSY_TONES: (u32, u32) = (480, 620);
/// Ringback.
pub const RING_TONES: (u32, u32) = (440, 480);

/// Sum of two equal-amplitude sinusoids. `amplitude` is per component.
pub fn two_tone(f1: u32, f2: u32, sample_rate: u32, n: usize, amplitude: f64) -> Vec<f64> {
    let step = 1.0 / sample_rate as f64;
    (0..n)
        .map(|i| {
            let t = step * i as f64;
            amplitude * (2.0 * PI * f1 as f64 * t).sin()
                + amplitude * (2.0 * PI * f2 as f64 * t).sin()
        })
        .collect()
}

/// The (low, high) pair for a keypad symbol, at equal amplitude.
///
/// Returns `None` for Symbol::NONE or any code outside the standard map.
pub fn dtmf_tone(symbol: Symbol, sample_rate: u32, n: usize, amplitude: f64) -> Option<Vec<f64>> {
    let (low, high) = symbol_pair(symbol)?;
    Some(two_tone(low, high, sample_rate, n, amplitude))
}

/// Reverse-lookup the frequency pair for a symbol in the standard map.
pub fn symbol_pair(symbol: Symbol) -> Option<(u32, u32)> {
    if symbol.is_none() {
        return None;
    }
    let table = ToneTable::standard();
    let map = SymbolMap::standard();
    for &low in table.low_group() {
        for &high in table.high_group() {
            if map.lookup(low, high) == symbol {
                return Some((low, high));
            }
        }
    }
    None
}

/// A repeating on/off cadence over a two-tone signal, e.g. the 2 s on /
/// 4 s off ringback or the 0.5 s/0.5 s busy cadence. A zero `off_len`
/// plays continuously (dial tone).
#[derive(Debug, Clone)]
pub struct CadencedTone {
    cycle: Vec<f64>,
    on_len: usize,
    off_len: usize,
    pos: usize,
}

impl CadencedTone {
    pub fn new(
        (f1, f2): (u32, u32),
        sample_rate: u32,
        amplitude: f64,
        on_len: usize,
        off_len: usize,
    ) -> Self {
        // Call-progress frequencies are all multiples of 10 Hz, so one
        // tenth of a second of samples tiles seamlessly.
        let bufsize = (sample_rate / 10).max(1) as usize;
        CadencedTone {
            cycle: two_tone(f1, f2, sample_rate, bufsize, amplitude),
            on_len,
            off_len,
            pos: 0,
        }
    }

    pub fn dial(sample_rate: u32, amplitude: f64) -> Self {
        CadencedTone::new(DIAL_TONES, sample_rate, amplitude, usize::MAX, 0)
    }

    pub fn busy(sample_rate: u32, amplitude: f64) -> Self {
        let half = sample_rate as usize / 2;
        CadencedTone::new(BUSY_TONES, sample_rate, amplitude, half, half)
    }

    pub fn ringback(sample_rate: u32, amplitude: f64) -> Self {
        let sr = sample_rate as usize;
        CadencedTone::new(RING_TONES, sample_rate, amplitude, 2 * sr, 4 * sr)
    }

    /// Render the next `n` samples of the cadence.
    pub fn take_samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_sample()).collect()
    }

    fn next_sample(&mut self) -> f64 {
        if self.off_len == 0 {
            let s = self.cycle[self.pos % self.cycle.len()];
            self.pos = self.pos.wrapping_add(1);
            return s;
        }
        let period = self.on_len + self.off_len;
        let phase = self.pos % period;
        self.pos = (self.pos + 1) % period;
        if phase < self.on_len {
            self.cycle[phase % self.cycle.len()]
        } else {
            0.0
        }
    }
}
