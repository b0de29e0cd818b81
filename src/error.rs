use std::fmt;

#[derive(Debug)]
pub enum DtmfError {
    Config(ConfigError),
    Wav(WavError),
}

/// Rejected decoder configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ZeroChunkSize,
    ZeroWindowInterval,
    BadMagnitudeFloor { value: f64 },
    BadPeakRatio { value: f64 },
    AmbiguousSymbolMap,
}

/// Failure reading or writing a WAV file.
#[derive(Debug)]
pub enum WavError {
    Codec(hound::Error),
    UnsupportedBitDepth { bits: u16 },
}

impl fmt::Display for DtmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DtmfError::Config(e) => write!(f, "Config error: {e}"),
            DtmfError::Wav(e) => write!(f, "WAV error: {e}"),
        }
    }
}

impl std::error::Error for DtmfError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroChunkSize => write!(f, "chunk_size must be nonzero"),
            ConfigError::ZeroWindowInterval => write!(f, "window_interval must be nonzero"),
            ConfigError::BadMagnitudeFloor { value } => {
                write!(f, "magnitude_floor must be finite and non-negative, got {value}")
            }
            ConfigError::BadPeakRatio { value } => {
                write!(f, "peak_ratio must be finite and positive, got {value}")
            }
            ConfigError::AmbiguousSymbolMap => {
                write!(f, "symbol map must assign each pair a unique symbol")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl fmt::Display for WavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WavError::Codec(e) => write!(f, "{e}"),
            WavError::UnsupportedBitDepth { bits } => {
                write!(f, "Unsupported bit depth: {bits} (expected 16-bit PCM)")
            }
        }
    }
}

impl std::error::Error for WavError {}

impl From<ConfigError> for DtmfError {
    fn from(e: ConfigError) -> Self {
        DtmfError::Config(e)
    }
}

impl From<WavError> for DtmfError {
    fn from(e: WavError) -> Self {
        DtmfError::Wav(e)
    }
}

impl From<hound::Error> for WavError {
    fn from(e: hound::Error) -> Self {
        WavError::Codec(e)
    }
}

impl From<hound::Error> for DtmfError {
    fn from(e: hound::Error) -> Self {
        DtmfError::Wav(WavError::Codec(e))
    }
}
