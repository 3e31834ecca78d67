//! Sample export for Shepard loops.
//!
//! This crate provides:
//!
//! - **PCM packing**: [`pack_pcm_le`] / [`unpack_pcm_le`] for raw little-endian 32-bit samples
//! - **Normalization**: [`normalize`] rescales the peak to a headroom below full scale
//! - **WAV file I/O**: [`write_wav`], [`read_wav`] and [`read_wav_info`]
//! - **Export**: [`export`] ties the above together and names the output file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shepard_core::{SynthParams, synthesize};
//! use shepard_io::{ExportFormat, ExportOptions, export};
//!
//! let waveform = synthesize(SynthParams::default())?;
//! let path = export(&waveform, &ExportOptions::default())?;
//! println!("saved {}", path.display());
//! ```

mod export;
mod pcm;
mod wav;

pub use export::{
    DEFAULT_HEADROOM_DB, ExportFormat, ExportOptions, export, output_file_name, unix_timestamp,
    write_raw,
};
pub use pcm::{db_to_linear, normalize, pack_pcm_le, peak, unpack_pcm_le};
pub use wav::{WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for sample export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested bit depth is not supported.
    #[error("Unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// Headroom was negative or not finite.
    #[error("Invalid headroom: {0} dB (must be finite and >= 0)")]
    InvalidHeadroom(f64),

    /// The file is not mono integer PCM.
    #[error("Unsupported WAV layout: {0}")]
    UnsupportedLayout(String),

    /// Raw PCM byte length is not a whole number of samples.
    #[error("Raw PCM length {0} is not a multiple of 4 bytes")]
    TruncatedPcm(usize),
}

/// Convenience result type for sample export operations.
pub type Result<T> = std::result::Result<T, Error>;
