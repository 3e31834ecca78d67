//! Raw PCM packing and headroom normalization.

use crate::{Error, Result};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use shepard_io::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
/// assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Pack samples as little-endian 32-bit PCM.
pub fn pack_pcm_le(samples: &[i32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Unpack little-endian 32-bit PCM.
pub fn unpack_pcm_le(bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::TruncatedPcm(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Largest absolute sample value.
pub fn peak(samples: &[i32]) -> u32 {
    samples
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap_or(0)
}

/// Rescale so the peak sits `headroom_db` below 32-bit full scale.
///
/// Silence is returned unchanged. Samples are rounded half away from zero
/// and clamped to the `i32` range.
///
/// # Example
/// ```rust
/// use shepard_io::{normalize, peak};
///
/// let loud = normalize(&[0, 1000, -2000], 0.0).unwrap();
/// assert_eq!(peak(&loud), i32::MAX as u32);
/// ```
pub fn normalize(samples: &[i32], headroom_db: f64) -> Result<Vec<i32>> {
    if !headroom_db.is_finite() || headroom_db < 0.0 {
        return Err(Error::InvalidHeadroom(headroom_db));
    }

    let current = peak(samples);
    if current == 0 {
        return Ok(samples.to_vec());
    }

    let target = i32::MAX as f64 * db_to_linear(-headroom_db);
    let gain = target / current as f64;

    tracing::debug!(peak = current, target, gain, "normalizing");

    Ok(samples
        .iter()
        .map(|&s| (s as f64 * gain).round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
        .collect())
}
