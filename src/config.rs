//! Decoder configuration.
//!
//! These values map directly to the JSON config schema used by the
//! companion tooling. All thresholds are empirical calibration values,
//! not derived quantities; retuning them requires new capture data.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How to treat a trailing window shorter than `chunk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPolicy {
    /// Drop the partial window; only full windows are decoded.
    Skip,
    /// Extend the partial window with zero samples to `chunk_size`.
    ZeroPad,
}

/// Windowing and threshold parameters for a decode run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Analysis window length in samples.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Stride between successive window starts, in samples. May be
    /// smaller than `chunk_size` (overlap) or larger (gaps).
    #[serde(default = "default_window_interval")]
    pub window_interval: usize,
    /// Absolute magnitude floor a bin must clear to count as active.
    /// Rejects background noise that is locally dominant but globally
    /// quiet. Calibrated for samples at 16-bit integer scale.
    #[serde(default = "default_magnitude_floor")]
    pub magnitude_floor: f64,
    /// A bin must also exceed `max(magnitudes) / peak_ratio`.
    #[serde(default = "default_peak_ratio")]
    pub peak_ratio: f64,
    /// Trailing partial-window policy.
    #[serde(default = "default_tail")]
    pub tail: TailPolicy,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_window_interval() -> usize {
    1000
}

fn default_magnitude_floor() -> f64 {
    // e^28.5, the original field calibration
    (28.5f64).exp()
}

fn default_peak_ratio() -> f64 {
    8.0
}

fn default_tail() -> TailPolicy {
    TailPolicy::Skip
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            chunk_size: default_chunk_size(),
            window_interval: default_window_interval(),
            magnitude_floor: default_magnitude_floor(),
            peak_ratio: default_peak_ratio(),
            tail: default_tail(),
        }
    }
}

impl DecoderConfig {
    /// Reject configurations the decoder cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.window_interval == 0 {
            return Err(ConfigError::ZeroWindowInterval);
        }
        if !self.magnitude_floor.is_finite() || self.magnitude_floor < 0.0 {
            return Err(ConfigError::BadMagnitudeFloor {
                value: self.magnitude_floor,
            });
        }
        if !self.peak_ratio.is_finite() || self.peak_ratio <= 0.0 {
            return Err(ConfigError::BadPeakRatio {
                value: self.peak_ratio,
            });
        }
        Ok(())
    }

    /// Parse a config from its JSON form; absent fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = DecoderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.chunk_size, 1000);
        assert_eq!(cfg.window_interval, 1000);
        assert_eq!(cfg.peak_ratio, 8.0);
        assert_eq!(cfg.tail, TailPolicy::Skip);
        assert!((cfg.magnitude_floor.ln() - 28.5).abs() < 1e-12);
    }

    #[test]
    fn zero_sizes_rejected() {
        let mut cfg = DecoderConfig::default();
        cfg.chunk_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroChunkSize));

        let mut cfg = DecoderConfig::default();
        cfg.window_interval = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWindowInterval));
    }

    #[test]
    fn bad_thresholds_rejected() {
        let mut cfg = DecoderConfig::default();
        cfg.magnitude_floor = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadMagnitudeFloor { .. })
        ));

        let mut cfg = DecoderConfig::default();
        cfg.peak_ratio = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::BadPeakRatio { value: 0.0 })
        );
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let cfg = DecoderConfig::from_json(r#"{ "chunk_size": 512, "tail": "zeropad" }"#)
            .expect("parse");
        assert_eq!(cfg.chunk_size, 512);
        assert_eq!(cfg.window_interval, 1000);
        assert_eq!(cfg.tail, TailPolicy::ZeroPad);

        let json = cfg.to_json().expect("serialize");
        let back = DecoderConfig::from_json(&json).expect("reparse");
        assert_eq!(back, cfg);
    }
}
