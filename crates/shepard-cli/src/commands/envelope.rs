//! Envelope inspection command.

use clap::Args;
use shepard_core::{DEFAULT_BASE_FREQUENCY, DEFAULT_DYNAMIC_RANGE, Envelope};

const DEFAULT_FACTORS: [f64; 12] = [
    1.0, 1.3, 1.8, 2.0, 2.1, 4.0, 7.9, 8.0, 8.1, 12.0, 15.0, 16.0,
];

/// Print the amplitude envelope at multiples of the base frequency.
#[derive(Args)]
pub struct EnvelopeArgs {
    /// Base frequency in Hz
    #[arg(long, default_value_t = DEFAULT_BASE_FREQUENCY)]
    freq: f64,

    /// Largest overtone multiplier
    #[arg(long, default_value = "8")]
    max_overtone: u32,

    /// Dynamic range ratio (1000 = 60 dB)
    #[arg(long, default_value_t = DEFAULT_DYNAMIC_RANGE)]
    dynamic_range: f64,

    /// Multiples of the base frequency to evaluate (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FACTORS)]
    factors: Vec<f64>,
}

/// Run the envelope command.
pub fn run(args: EnvelopeArgs) -> anyhow::Result<()> {
    if !args.freq.is_finite() || args.freq <= 0.0 {
        anyhow::bail!("Base frequency must be positive, got {}", args.freq);
    }
    if args.max_overtone == 0 {
        anyhow::bail!("Largest overtone must be at least 1");
    }
    if !args.dynamic_range.is_finite() || args.dynamic_range < 1.0 {
        anyhow::bail!("Dynamic range must be >= 1, got {}", args.dynamic_range);
    }

    let env = Envelope::new(args.freq, args.max_overtone, args.dynamic_range);

    println!(
        "Envelope: F0 = {} Hz, Fmax = {} Hz, range = {}:1",
        env.base_frequency(),
        env.max_frequency(),
        env.dynamic_range()
    );
    println!();
    println!("{:>8}  {:>10}  {:>10}  {:>9}", "factor", "Hz", "amplitude", "dB");
    println!("{}", "-".repeat(43));

    for factor in args.factors {
        let hz = args.freq * factor;
        let amp = env.amplitude(hz);
        let db = if amp > 0.0 {
            format!("{:.2}", 20.0 * amp.log10())
        } else {
            "-inf".to_string()
        };
        println!("{:>8.3}  {:>10.2}  {:>10.6}  {:>9}", factor, hz, amp, db);
    }

    Ok(())
}
