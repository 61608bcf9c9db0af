// Transcription Adapter - Audio Loading
//
// Decodes a WAV file into the mono 16 kHz f32 samples whisper.cpp expects.

use hound::SampleFormat;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use std::path::Path;

use super::types::TranscriptionError;

/// Sample rate whisper.cpp operates at.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Load the WAV file at `path` as mono f32 samples at 16 kHz.
pub fn load_audio(path: &Path) -> Result<Vec<f32>, TranscriptionError> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| TranscriptionError::AudioLoad(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TranscriptionError::AudioLoad(e.to_string()))?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|sample| sample as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TranscriptionError::AudioLoad(e.to_string()))?
        }
    };

    let mono = downmix_to_mono(&samples, spec.channels);

    if spec.sample_rate == WHISPER_SAMPLE_RATE {
        return Ok(mono);
    }

    log::debug!(
        "Resampling {} samples from {} Hz to {} Hz",
        mono.len(),
        spec.sample_rate,
        WHISPER_SAMPLE_RATE
    );
    resample(&mono, spec.sample_rate, WHISPER_SAMPLE_RATE)
}

/// Average interleaved channels down to mono.
fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Sinc resampling via rubato. One shot over the whole clip; memos are short
/// enough that chunked processing is not worth the bookkeeping.
fn resample(input: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, TranscriptionError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, input.len(), 1)
        .map_err(|e| TranscriptionError::AudioLoad(format!("resampler init: {}", e)))?;

    let waves_in = vec![input.to_vec()];
    let mut waves_out = resampler
        .process(&waves_in, None)
        .map_err(|e| TranscriptionError::AudioLoad(format!("resampling: {}", e)))?;

    Ok(waves_out.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::tempdir;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: usize) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for i in 0..frames {
            for _ in 0..channels {
                let sample = ((i % 100) as i16 - 50) * 100;
                writer.write_sample(sample).unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn loads_mono_16k_without_resampling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, WHISPER_SAMPLE_RATE, 1, 1600);

        let samples = load_audio(&path).unwrap();
        assert_eq!(samples.len(), 1600);
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn downmixes_stereo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, WHISPER_SAMPLE_RATE, 2, 800);

        let samples = load_audio(&path).unwrap();
        assert_eq!(samples.len(), 800);
    }

    #[test]
    fn resamples_to_16k() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cd.wav");
        write_wav(&path, 44_100, 1, 44_100);

        let samples = load_audio(&path).unwrap();
        // One second of audio should land near 16000 samples.
        assert!((samples.len() as i64 - 16_000).abs() < 200, "got {}", samples.len());
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let err = load_audio(Path::new("/nonexistent/clip.wav")).unwrap_err();
        assert!(matches!(err, TranscriptionError::AudioLoad(_)));
    }
}
