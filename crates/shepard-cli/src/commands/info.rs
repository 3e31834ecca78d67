//! Display metadata and level of an exported loop.

use clap::Args;
use shepard_io::{peak, read_wav, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let format_str = if info.is_float { "IEEE Float" } else { "PCM" };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );

    // Level is only meaningful for the mono integer files the exporter writes
    if info.channels == 1 && !info.is_float {
        let (samples, _) = read_wav(&args.file)?;
        println!("Peak:        {}", format_peak(peak(&samples)));
    }

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}

fn format_peak(peak: u32) -> String {
    if peak == 0 {
        return "silent".to_string();
    }
    let dbfs = 20.0 * (peak as f64 / i32::MAX as f64).log10();
    format!("{:.2} dBFS", dbfs)
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(960_044), "937.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn formats_peak_level() {
        assert_eq!(format_peak(0), "silent");
        assert_eq!(format_peak(i32::MAX as u32), "0.00 dBFS");
        assert_eq!(format_peak((i32::MAX as f64 * 0.316_227_766) as u32), "-10.00 dBFS");
    }
}
