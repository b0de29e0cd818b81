//! Windowed DTMF decoding.
//!
//! One `WindowDecoder` holds the tone table, symbol map, thresholds,
//! and the Goertzel coefficients precomputed once for a given sample
//! rate. Each window decode is pure and independent; windows could be
//! evaluated in parallel, though `scan` reports them in order.

use serde::{Deserialize, Serialize};

use crate::config::{DecoderConfig, TailPolicy};
use crate::error::{ConfigError, DtmfError};

use super::goertzel;
use super::tones::{Symbol, SymbolMap, ToneTable, NUM_FREQS};

/// One decoded analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSymbol {
    /// Index of the window's first sample in the input sequence.
    pub window: usize,
    pub symbol: Symbol,
}

/// A DTMF decoder for a fixed sample rate and configuration.
#[derive(Debug, Clone)]
pub struct WindowDecoder {
    table: ToneTable,
    map: SymbolMap,
    config: DecoderConfig,
    coeffs: [f64; NUM_FREQS],
}

impl WindowDecoder {
    /// Build a decoder, precomputing one Goertzel coefficient per
    /// candidate frequency.
    pub fn new(
        table: ToneTable,
        map: SymbolMap,
        config: DecoderConfig,
        sample_rate: u32,
    ) -> Result<Self, DtmfError> {
        config.validate()?;
        if !map.is_unambiguous() {
            return Err(ConfigError::AmbiguousSymbolMap.into());
        }
        let mut coeffs = [0.0; NUM_FREQS];
        for (i, &freq) in table.freqs().iter().enumerate() {
            coeffs[i] = goertzel::coefficient(freq as f64, sample_rate, config.chunk_size);
        }
        Ok(WindowDecoder {
            table,
            map,
            config,
            coeffs,
        })
    }

    /// A decoder with the standard table, map, and default config.
    pub fn standard(sample_rate: u32) -> Result<Self, DtmfError> {
        WindowDecoder::new(
            ToneTable::standard(),
            SymbolMap::standard(),
            DecoderConfig::default(),
            sample_rate,
        )
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Goertzel magnitude estimates for all candidate frequencies over
    /// one window, in table order.
    pub fn magnitudes(&self, window: &[f64]) -> [f64; NUM_FREQS] {
        let mut mags = [0.0; NUM_FREQS];
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            mags[i] = goertzel::magnitude(window, coeff);
        }
        mags
    }

    /// Decode one analysis window.
    ///
    /// A frequency counts as active when its magnitude clears both the
    /// relative threshold (`max / peak_ratio`) and the absolute floor.
    /// Exactly one active low-group plus one active high-group
    /// frequency decodes to a symbol; anything else (silence, a lone
    /// tone, three-plus tones, the guard bin firing) is Symbol::NONE.
    /// Never an error.
    pub fn decode_window(&self, window: &[f64]) -> Symbol {
        let mags = self.magnitudes(window);
        let peak = mags.iter().fold(0.0f64, |m, &v| m.max(v));
        let threshold = peak / self.config.peak_ratio;

        let mut active = [0u32; NUM_FREQS];
        let mut count = 0;
        for (i, &mag) in mags.iter().enumerate() {
            if mag > threshold && mag > self.config.magnitude_floor {
                active[count] = self.table.freqs()[i];
                count += 1;
            }
        }

        if count != 2 {
            return Symbol::NONE;
        }
        // Table order puts the low group first, so active[0] is the
        // low candidate and active[1] the high one.
        self.map.lookup(active[0], active[1])
    }

    /// Slide over `samples` at `window_interval` strides, yielding one
    /// `(window_start, symbol)` per step, lazily.
    pub fn scan<'a>(&'a self, samples: &'a [f64]) -> Scan<'a> {
        Scan {
            decoder: self,
            samples,
            pos: 0,
        }
    }
}

/// Lazy sliding-window iterator over a sample sequence. Restart by
/// calling [`WindowDecoder::scan`] again.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    decoder: &'a WindowDecoder,
    samples: &'a [f64],
    pos: usize,
}

impl<'a> Iterator for Scan<'a> {
    type Item = WindowSymbol;

    fn next(&mut self) -> Option<WindowSymbol> {
        let chunk = self.decoder.config.chunk_size;
        let stride = self.decoder.config.window_interval;
        loop {
            if self.pos >= self.samples.len() {
                return None;
            }
            let start = self.pos;
            let end = (start + chunk).min(self.samples.len());
            self.pos = start.saturating_add(stride);

            let window = &self.samples[start..end];
            if window.len() == chunk {
                return Some(WindowSymbol {
                    window: start,
                    symbol: self.decoder.decode_window(window),
                });
            }
            match self.decoder.config.tail {
                TailPolicy::Skip => continue,
                TailPolicy::ZeroPad => {
                    let mut padded = window.to_vec();
                    padded.resize(chunk, 0.0);
                    return Some(WindowSymbol {
                        window: start,
                        symbol: self.decoder.decode_window(&padded),
                    });
                }
            }
        }
    }
}
