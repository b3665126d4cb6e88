//! Throughput benchmark for number system parsing and formatting.
//!
//! Formats and parses a deterministic set of values in every positional base
//! and sign scheme, checking that each value survives the round trip.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use numsys::limits::MAX_BASE;
use numsys::{NumberSystem, SignScheme, format, parse};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_ITERATIONS: usize = 10;

/// Deterministic sample values covering small numbers, powers and extremes.
fn sample_values() -> Vec<i64> {
    let mut values: Vec<i64> = (-512..=512).collect();
    for shift in 10..63 {
        let power = 1i64 << shift;
        values.extend([power - 1, power, -power, -(power - 1)]);
    }
    // xorshift for a spread of large magnitudes
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..2048 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        values.push(state as i64);
    }
    values.extend([i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1]);
    values
}

fn systems() -> Vec<NumberSystem> {
    (2..=MAX_BASE)
        .flat_map(|base| SignScheme::ALL.map(|scheme| NumberSystem { base, scheme }))
        .collect()
}

struct PhaseStats {
    format_time: Duration,
    parse_time: Duration,
    chars: usize,
    failures: usize,
}

fn run_system(sys: NumberSystem, values: &[i64], iterations: usize) -> PhaseStats {
    let mut stats = PhaseStats {
        format_time: Duration::ZERO,
        parse_time: Duration::ZERO,
        chars: 0,
        failures: 0,
    };

    for _ in 0..iterations {
        let format_start = Instant::now();
        let texts: Vec<(String, i64)> = values
            .iter()
            .filter_map(|&v| match format(v, sys) {
                Ok(text) => Some((text, v)),
                Err(err) => {
                    tracing::error!(value = v, %sys, %err, "format failed");
                    None
                }
            })
            .collect();
        stats.format_time += format_start.elapsed();

        let parse_start = Instant::now();
        for (text, expected) in &texts {
            let expected = *expected;
            match parse(text, sys) {
                Ok(v) if v == expected => {}
                Ok(v) => {
                    tracing::error!(%sys, %text, expected, got = v, "round trip mismatch");
                    stats.failures += 1;
                }
                Err(err) => {
                    tracing::error!(%sys, %text, %err, "parse failed");
                    stats.failures += 1;
                }
            }
        }
        stats.parse_time += parse_start.elapsed();

        stats.chars += texts.iter().map(|(text, _)| text.len()).sum::<usize>();
        stats.failures += values.len() - texts.len();
    }
    stats
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let iterations = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("usage: bench-numsys [iterations]");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_ITERATIONS,
    };

    let values = sample_values();
    let systems = systems();
    println!(
        "Round-tripping {} values through {} systems, {} iterations",
        values.len(),
        systems.len(),
        iterations
    );

    let mut total_format = Duration::ZERO;
    let mut total_parse = Duration::ZERO;
    let mut total_chars = 0usize;
    let mut total_failures = 0usize;

    println!("\n=== Per Scheme ===");
    for scheme in SignScheme::ALL {
        let mut scheme_format = Duration::ZERO;
        let mut scheme_parse = Duration::ZERO;
        for sys in systems.iter().filter(|s| s.scheme == scheme) {
            let stats = run_system(*sys, &values, iterations);
            tracing::debug!(%sys, format = ?stats.format_time, parse = ?stats.parse_time, "system done");
            scheme_format += stats.format_time;
            scheme_parse += stats.parse_time;
            total_chars += stats.chars;
            total_failures += stats.failures;
        }
        println!(
            "{:<16} format: {:>10.2?}  parse: {:>10.2?}",
            scheme.name(),
            scheme_format,
            scheme_parse
        );
        total_format += scheme_format;
        total_parse += scheme_parse;
    }

    let ops = (values.len() * systems.len() * iterations) as f64;
    println!("\n=== Summary ===");
    println!("Operations:     {}", ops as u64);
    println!("Characters:     {}", total_chars);
    println!(
        "Format:         {:?} ({:.1} ns/op)",
        total_format,
        total_format.as_nanos() as f64 / ops
    );
    println!(
        "Parse:          {:?} ({:.1} ns/op)",
        total_parse,
        total_parse.as_nanos() as f64 / ops
    );
    println!("Failures:       {}", total_failures);

    if total_failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
