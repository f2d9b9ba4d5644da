//! `caesar` - break Caesar shift ciphers from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use caesar_cryptanalysis::chart::render_frequency_chart;
use caesar_cryptanalysis::config::CaesarConfig;
use caesar_cryptanalysis::constants::{ALPHABET_LEN, ENGLISH_FREQUENCIES, SAMPLE_CIPHERTEXTS};
use caesar_cryptanalysis::export::save_frequency_csv;
use caesar_cryptanalysis::{
    alphabetic_len, analyze_frequency, brute_force, infer_shift_by_frequency, looks_like_english,
    most_frequent_letter, CaesarKey, Decryptor, Encryptor,
};

#[derive(Parser, Debug)]
#[command(
    name = "caesar",
    version,
    about = "Caesar cipher cryptanalysis: brute force and letter-frequency attacks",
    after_help = "\
Examples:
  caesar                                   Run the demo on the configured ciphertext
  caesar decrypt --shift 3 \"WKLV LV D VHFUHW PHVVDJH\"
  caesar brute-force --likely \"KHOOR ZRUOG\"
  caesar analyze --top 5 \"FDHVDU FLSKHU LV HDV WR FUDFN\"
  caesar chart -o chart.png"
)]
struct Cli {
    /// Config file (ignored when missing)
    #[arg(long, global = true, default_value = "caesar.toml")]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Brute force, frequency analysis and CSV export in one go
    Demo { ciphertext: Option<String> },

    /// Encrypt text; picks a random key when --shift is omitted
    Encrypt {
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,
        text: String,
    },

    /// Decrypt text with a known key
    Decrypt {
        #[arg(long, short, allow_negative_numbers = true)]
        shift: i64,
        text: String,
    },

    /// Try every key, marking candidates that read like English
    BruteForce {
        /// Only print the first N shifts
        #[arg(long)]
        limit: Option<usize>,

        /// Only print candidates that read like English
        #[arg(long)]
        likely: bool,

        text: Option<String>,
    },

    /// Compare letter frequencies against English and guess the key
    Analyze {
        #[arg(long, default_value = "10")]
        top: usize,

        text: Option<String>,
    },

    /// Write English and ciphertext frequencies to CSV
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,

        text: Option<String>,
    },

    /// List the bundled sample ciphertexts with both attacks' verdicts
    Samples,

    /// Render a bar chart of English vs ciphertext frequencies to PNG
    Chart {
        #[arg(long, short)]
        output: Option<PathBuf>,

        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = CaesarConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    debug!(?config, "configuration loaded");

    match cli.command {
        None => run_demo(&config, &config.ciphertext),
        Some(Commands::Demo { ciphertext }) => {
            run_demo(&config, ciphertext.as_deref().unwrap_or(&config.ciphertext))
        }
        Some(Commands::Encrypt { shift, text }) => {
            let key = match shift {
                Some(amount) => CaesarKey::new(amount),
                None => {
                    let key = CaesarKey::random(&mut rand::thread_rng());
                    println!("Random shift: {}", key.shift());
                    key
                }
            };
            println!("{}", key.encrypt(&text));
            Ok(())
        }
        Some(Commands::Decrypt { shift, text }) => {
            println!("{}", CaesarKey::new(shift).decrypt(&text));
            Ok(())
        }
        Some(Commands::BruteForce {
            limit,
            likely,
            text,
        }) => {
            let text = text.as_deref().unwrap_or(&config.ciphertext);
            print_brute_force(text, limit.unwrap_or(ALPHABET_LEN), likely);
            Ok(())
        }
        Some(Commands::Analyze { top, text }) => {
            print_analysis(text.as_deref().unwrap_or(&config.ciphertext), top);
            Ok(())
        }
        Some(Commands::Export { output, text }) => {
            let path = output.unwrap_or_else(|| config.csv_path.clone());
            let observed = analyze_frequency(text.as_deref().unwrap_or(&config.ciphertext));
            save_frequency_csv(&path, &ENGLISH_FREQUENCIES, &observed)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Frequency analysis data saved to: {}", path.display());
            Ok(())
        }
        Some(Commands::Samples) => {
            print_samples();
            Ok(())
        }
        Some(Commands::Chart { output, text }) => {
            let path = output.unwrap_or_else(|| config.chart_path.clone());
            let observed = analyze_frequency(text.as_deref().unwrap_or(&config.ciphertext));
            render_frequency_chart(
                &path,
                &ENGLISH_FREQUENCIES,
                &observed,
                &config.chart_options(),
            )
            .with_context(|| format!("rendering {}", path.display()))?;
            println!("Frequency chart saved to: {}", path.display());
            Ok(())
        }
    }
}

fn run_demo(config: &CaesarConfig, ciphertext: &str) -> Result<()> {
    println!("=== CAESAR CIPHER DECRYPTION ===\n");
    println!("Encrypted message: {ciphertext}");

    println!("\n1. BRUTE FORCE ATTACK:");
    println!("{}", "-".repeat(30));
    print_brute_force(ciphertext, config.preview, false);

    println!("\n2. FREQUENCY ANALYSIS:");
    println!("{}", "-".repeat(30));
    let guess = infer_shift_by_frequency(ciphertext);
    println!(
        "Most frequent letter analysis suggests shift: {}",
        guess.shift
    );
    println!("Decrypted message: {}", guess.plaintext);

    let observed = analyze_frequency(ciphertext);
    save_frequency_csv(&config.csv_path, &ENGLISH_FREQUENCIES, &observed)
        .with_context(|| format!("writing {}", config.csv_path.display()))?;
    println!(
        "\nFrequency analysis data saved to: {}",
        config.csv_path.display()
    );

    println!("\n3. STATISTICS:");
    println!("{}", "-".repeat(30));
    println!("Ciphertext length: {} characters", ciphertext.chars().count());
    println!("Alphabetic characters: {}", alphabetic_len(ciphertext));
    println!(
        "Most frequent letter in ciphertext: {}",
        most_frequent_letter(ciphertext)
    );
    println!("Total possible shifts to try: {ALPHABET_LEN}");

    Ok(())
}

fn print_brute_force(ciphertext: &str, limit: usize, likely_only: bool) {
    for candidate in brute_force(ciphertext).into_iter().take(limit) {
        let readable = looks_like_english(&candidate.text);
        if likely_only && !readable {
            continue;
        }
        let marker = if readable { " *" } else { "" };
        println!("Shift {:2}: {}{}", candidate.shift, candidate.text, marker);
    }
}

fn print_analysis(ciphertext: &str, top: usize) {
    let observed = analyze_frequency(ciphertext);

    println!("Ciphertext frequencies:");
    for (letter, value) in observed.ranked(top) {
        println!("  {letter}  {value:6.2}%");
    }

    println!("Expected English frequencies:");
    for (letter, value) in ENGLISH_FREQUENCIES.ranked(top) {
        println!("  {letter}  {value:6.2}%");
    }

    let guess = infer_shift_by_frequency(ciphertext);
    println!("Most frequent letter in cipher: {}", guess.letter);
    println!(
        "Assuming this represents 'E', suggested shift: {}",
        guess.shift
    );
    println!("Suggested decryption: {}", guess.plaintext);
}

fn print_samples() {
    for (ciphertext, description) in SAMPLE_CIPHERTEXTS {
        println!("{description}: {ciphertext}");
        let guess = infer_shift_by_frequency(ciphertext);
        println!("  frequency guess (shift {}): {}", guess.shift, guess.plaintext);
        for candidate in brute_force(ciphertext) {
            if looks_like_english(&candidate.text) {
                println!("  readable at shift {}: {}", candidate.shift, candidate.text);
            }
        }
    }
}
