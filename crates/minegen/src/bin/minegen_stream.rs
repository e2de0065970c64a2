//! # Minegen Column Streamer
//!
//! Generates terrain columns on a fixed interval and reports what it made.
//!
//! ## Usage
//!
//! ```bash
//! minegen_stream [CONFIG_PATH] --seed 1234 --duration 10
//! ```

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use minegen::{ColumnStreamer, StreamConfig, StreamResult};

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         MINEGEN COLUMN STREAMER                                  ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    // Parse command line arguments (simple parsing, no external deps)
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut seed: Option<i64> = None;
    let mut duration_secs: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--duration" | "-d" => {
                if i + 1 < args.len() {
                    duration_secs = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: minegen_stream [CONFIG_PATH] [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <SEED>          Override the configured seed");
                println!("  -d, --duration <SECS>      Stop after N seconds");
                println!("  -h, --help                 Show this help");
                return ExitCode::SUCCESS;
            }
            path => config_path = Some(path.to_string()),
        }
        i += 1;
    }

    match run(config_path.as_deref(), seed, duration_secs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<&str>, seed: Option<i64>, duration_secs: Option<u64>) -> StreamResult<()> {
    let mut config = match config_path {
        Some(path) => StreamConfig::load(path)?,
        None => StreamConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }

    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Config:             {}", config_path.unwrap_or("(defaults)"));
    println!("│ Seed:               {}", config.seed);
    println!("│ Interval:           {} ms", config.interval_ms);
    println!("│ Columns / Tick:     {}", config.columns_per_tick);
    println!("│ Y Range:            [{}, {})", config.min_y, config.max_y);
    println!("│ Origin:             ({}, {})", config.origin[0], config.origin[1]);
    match config.max_ticks {
        Some(ticks) => println!("│ Max Ticks:          {ticks}"),
        None => println!("│ Max Ticks:          infinite"),
    }
    if let Some(d) = duration_secs {
        println!("│ Duration:           {d} seconds");
    }
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    let streamer = ColumnStreamer::new(config)?;
    let start = Instant::now();
    let mut ticker = streamer.start()?;

    match duration_secs {
        Some(secs) => {
            let deadline = start + Duration::from_secs(secs);
            while ticker.is_running() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(10));
            }
            ticker.stop();
        }
        None => ticker.join(),
    }

    let tally = streamer.tally();
    let total = tally.total();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                    STREAM SUMMARY                                ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Wall Time:          {:>10.2} s", start.elapsed().as_secs_f64());
    println!("║ Ticks:              {:>10}", tally.ticks());
    println!("║ Columns:            {:>10}", tally.columns());
    println!("║ Blocks:             {total:>10}");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    for (block_type, count) in tally.iter() {
        #[allow(clippy::cast_precision_loss)]
        let share = count as f64 / total.max(1) as f64 * 100.0;
        println!("║ {:<19} {count:>10} ({share:>5.1}%)", block_type.name());
    }
    println!("╚══════════════════════════════════════════════════════════════════╝");

    Ok(())
}
