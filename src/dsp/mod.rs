//! DSP core — pure Rust DTMF detection and tone synthesis.
//!
//! All signal processing is deterministic and allocation-light so the
//! same code serves native callers and the browser (via WASM). Nothing
//! here touches an audio device or the filesystem.

pub mod debounce;
pub mod decoder;
pub mod goertzel;
pub mod synth;
pub mod tones;
