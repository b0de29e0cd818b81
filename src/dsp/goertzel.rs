//! Single-bin Goertzel magnitude estimation.
//!
//! Computes the squared magnitude of one frequency component over a
//! fixed-length window in O(N), which beats a full spectral transform
//! when only a handful of candidate frequencies matter.

use std::f64::consts::PI;

/// Compute the Goertzel coefficient for a target frequency.
///
/// `k = floor(0.5 + N*f/fs)` snaps the target to the nearest DFT bin
/// (round-half-up, matching integer truncation of `0.5 + x` for
/// positive values). The coefficient is `2*cos(2*pi*k/N)`.
///
/// Pure and idempotent: the same `(freq, sample_rate, window_len)`
/// triple always yields a bit-identical result. Callers should compute
/// it once per triple and reuse it across windows.
pub fn coefficient(freq: f64, sample_rate: u32, window_len: usize) -> f64 {
    let n = window_len as f64;
    let k = (0.5 + n * freq / sample_rate as f64).floor();
    let w = 2.0 * PI * k / n;
    2.0 * w.cos()
}

/// Squared-magnitude estimate of one frequency component in a window.
///
/// Runs the standard three-accumulator recurrence over the samples in
/// order, then folds the final two states into a power value.
pub fn magnitude(samples: &[f64], coeff: f64) -> f64 {
    let mut q1 = 0.0;
    let mut q2 = 0.0;
    for &sample in samples {
        let q0 = coeff * q1 - q2 + sample;
        q2 = q1;
        q1 = q0;
    }
    q1 * q1 + q2 * q2 - q1 * q2 * coeff
}

/// Streaming Goertzel state for callers that feed samples one at a time.
///
/// Equivalent to [`magnitude`] over the samples pushed so far.
#[derive(Debug, Clone)]
pub struct Goertzel {
    coeff: f64,
    q1: f64,
    q2: f64,
}

impl Goertzel {
    pub fn new(coeff: f64) -> Self {
        Goertzel {
            coeff,
            q1: 0.0,
            q2: 0.0,
        }
    }

    /// Consume one sample.
    pub fn push(&mut self, sample: f64) {
        let q0 = self.coeff * self.q1 - self.q2 + sample;
        self.q2 = self.q1;
        self.q1 = q0;
    }

    /// Squared-magnitude estimate over the samples pushed so far.
    pub fn magnitude(&self) -> f64 {
        self.q1 * self.q1 + self.q2 * self.q2 - self.q1 * self.q2 * self.coeff
    }

    /// Reset state for the next window, keeping the coefficient.
    pub fn reset(&mut self) {
        self.q1 = 0.0;
        self.q2 = 0.0;
    }
}
