//! WAV file front-end.
//!
//! Readers return the first channel as f64 at 16-bit integer scale
//! (no normalization): the decoder's default magnitude floor is
//! calibrated against full-scale ±32768 input, so scaling down here
//! would silently break detection.

use std::io::Cursor;
use std::path::Path;

use crate::error::WavError;

/// Samples plus their rate, as read from a WAV source.
#[derive(Debug, Clone, PartialEq)]
pub struct MonoAudio {
    pub sample_rate: u32,
    pub samples: Vec<f64>,
}

/// Read the first channel of a 16-bit PCM WAV from memory.
pub fn read_mono(bytes: &[u8]) -> Result<MonoAudio, WavError> {
    read_from(hound::WavReader::new(Cursor::new(bytes))?)
}

/// Read the first channel of a 16-bit PCM WAV file.
pub fn read_mono_file(path: impl AsRef<Path>) -> Result<MonoAudio, WavError> {
    read_from(hound::WavReader::open(path)?)
}

fn read_from<R: std::io::Read>(mut reader: hound::WavReader<R>) -> Result<MonoAudio, WavError> {
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(WavError::UnsupportedBitDepth {
            bits: spec.bits_per_sample,
        });
    }

    let channels = spec.channels as usize;
    let mut samples = Vec::with_capacity(reader.len() as usize / channels.max(1));
    for (i, sample) in reader.samples::<i16>().enumerate() {
        // Keep channel 0, drop the rest
        if i % channels == 0 {
            samples.push(sample? as f64);
        }
    }
    Ok(MonoAudio {
        sample_rate: spec.sample_rate,
        samples,
    })
}

/// Encode samples (at 16-bit integer scale) to a mono 16-bit PCM WAV
/// byte buffer. Out-of-range values clamp rather than wrap.
pub fn write_mono(samples: &[f64], sample_rate: u32) -> Result<Vec<u8>, WavError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &s in samples {
            writer.write_sample(s.clamp(i16::MIN as f64, i16::MAX as f64) as i16)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Write samples to a mono 16-bit PCM WAV file.
pub fn write_mono_file(
    path: impl AsRef<Path>,
    samples: &[f64],
    sample_rate: u32,
) -> Result<(), WavError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample(s.clamp(i16::MIN as f64, i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let samples: Vec<f64> = (0..256).map(|i| (i as f64 - 128.0) * 100.0).collect();
        let bytes = write_mono(&samples, 8000).expect("encode");
        let audio = read_mono(&bytes).expect("decode");
        assert_eq!(audio.sample_rate, 8000);
        assert_eq!(audio.samples, samples);
    }

    #[test]
    fn out_of_range_samples_clamp() {
        let bytes = write_mono(&[1e9, -1e9], 8000).expect("encode");
        let audio = read_mono(&bytes).expect("decode");
        assert_eq!(audio.samples, vec![i16::MAX as f64, i16::MIN as f64]);
    }

    #[test]
    fn stereo_reads_first_channel() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("writer");
            for i in 0..8i16 {
                writer.write_sample(i).expect("left");
                writer.write_sample(-i).expect("right");
            }
            writer.finalize().expect("finalize");
        }
        let audio = read_mono(&cursor.into_inner()).expect("decode");
        assert_eq!(
            audio.samples,
            (0..8).map(|i| i as f64).collect::<Vec<_>>()
        );
    }

    #[test]
    fn non_16_bit_input_rejected() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("writer");
            writer.write_sample(0i32).expect("sample");
            writer.finalize().expect("finalize");
        }
        let err = read_mono(&cursor.into_inner());
        assert!(matches!(
            err,
            Err(WavError::UnsupportedBitDepth { bits: 32 })
        ));
    }

    #[test]
    fn garbage_bytes_surface_codec_error() {
        assert!(matches!(
            read_mono(b"not a wav file"),
            Err(WavError::Codec(_))
        ));
    }
}
