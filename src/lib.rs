pub mod config;
pub mod dsp;
pub mod error;
pub mod wav;

use crate::dsp::debounce::Debouncer;
use crate::dsp::decoder::{WindowDecoder, WindowSymbol};
use crate::error::DtmfError;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the dialtone-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Scan a sample sequence with the standard decoder, one entry per
/// analysis window.
pub fn decode_samples(samples: &[f64], sample_rate: u32) -> Result<Vec<WindowSymbol>, DtmfError> {
    let decoder = WindowDecoder::standard(sample_rate)?;
    Ok(decoder.scan(samples).collect())
}

/// Scan, debounce, and render the dialed digits as a string.
pub fn decode_digits(samples: &[f64], sample_rate: u32) -> Result<String, DtmfError> {
    let decoder = WindowDecoder::standard(sample_rate)?;
    let mut debouncer = Debouncer::default();
    let mut digits = String::new();
    for ws in decoder.scan(samples) {
        if let Some(sym) = debouncer.push(ws.symbol) {
            if let Some(ch) = sym.as_char() {
                digits.push(ch);
            }
        }
    }
    Ok(digits)
}

/// WASM-exposed: decode a 16-bit PCM WAV (as bytes) into an array of
/// `{ window, symbol }` records, one per analysis window.
#[wasm_bindgen]
pub fn decode_wav_windows(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let audio = wav::read_mono(bytes).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let windows = decode_samples(&audio.samples, audio.sample_rate)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&windows).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: decode a 16-bit PCM WAV (as bytes) into the dialed
/// digit string.
#[wasm_bindgen]
pub fn decode_wav_digits(bytes: &[u8]) -> Result<String, JsValue> {
    let audio = wav::read_mono(bytes).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    decode_digits(&audio.samples, audio.sample_rate).map_err(|e| JsValue::from_str(&format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::synth::dtmf_tone;
    use crate::dsp::tones::Symbol;

    const FS: u32 = 8000;
    const CHUNK: usize = 1000;

    /// A digit held for `windows` analysis windows.
    fn held_digit(code: u8, windows: usize) -> Vec<f64> {
        dtmf_tone(Symbol(code), FS, CHUNK * windows, 8000.0).expect("mapped symbol")
    }

    #[test]
    fn decode_samples_reports_every_window() {
        let mut samples = held_digit(1, 2);
        samples.extend(vec![0.0; CHUNK * 2]);
        let windows = decode_samples(&samples, FS).expect("decode");
        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0].symbol, Symbol(1));
        assert_eq!(windows[1].symbol, Symbol(1));
        assert_eq!(windows[2].symbol, Symbol::NONE);
        assert_eq!(windows[3].symbol, Symbol::NONE);
    }

    #[test]
    fn decode_digits_debounces_held_keys() {
        let silence = vec![0.0; CHUNK * 2];
        let mut samples = Vec::new();
        for code in [Symbol::STAR.0, 8, Symbol::ZERO.0, Symbol::ZERO.0] {
            samples.extend(held_digit(code, 3));
            samples.extend(&silence);
        }
        let digits = decode_digits(&samples, FS).expect("decode");
        assert_eq!(digits, "*800");
    }

    #[test]
    fn wav_pipeline_decodes_digits() {
        let silence = vec![0.0; CHUNK * 2];
        let mut samples = held_digit(5, 3);
        samples.extend(&silence);
        samples.extend(held_digit(5, 3));
        samples.extend(&silence);

        let bytes = wav::write_mono(&samples, FS).expect("encode wav");
        let audio = wav::read_mono(&bytes).expect("decode wav");
        let digits = decode_digits(&audio.samples, audio.sample_rate).expect("decode");
        assert_eq!(digits, "55");
    }
}
