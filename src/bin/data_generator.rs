//! Delivery Event Data Generator
//!
//! Generates synthetic translation delivery events for benchmarking and
//! scale testing of the aggregation pipeline. Events are emitted in
//! non-decreasing timestamp order, starting at the current time and
//! advancing by a random number of minutes per event.

use chrono::Utc;
use clap::{Arg, Command};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde_json::{json, Value};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Language codes drawn for source/target pairs
const LANGUAGES: &[&str] = &["en", "fr", "es", "de", "pt", "it", "nl", "ja"];

/// Client accounts seen in production traffic
const CLIENTS: &[&str] = &[
    "airliberty",
    "umbrella_corp",
    "taxi-eats",
    "easyjet",
    "booking",
    "rapido",
];

const EVENT_NAME: &str = "translation_delivered";

fn random_translation_id(rng: &mut StdRng) -> String {
    const CHARS: &[u8] = b"0123456789abcdef";
    (0..20)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

fn generate_event(rng: &mut StdRng, timestamp: &str) -> Value {
    let source_language = LANGUAGES.choose(rng).unwrap_or(&"en");
    let target_language = LANGUAGES.choose(rng).unwrap_or(&"fr");

    json!({
        "timestamp": timestamp,
        "translation_id": random_translation_id(rng),
        "source_language": source_language,
        "target_language": target_language,
        "client_name": CLIENTS.choose(rng).unwrap_or(&"airliberty"),
        "event_name": EVENT_NAME,
        "nr_words": rng.gen_range(5..=500),
        "duration": rng.gen_range(1..=100),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Delivery Event Data Generator")
        .version("1.0")
        .about("Generates synthetic translation delivery events for aggregation benchmarks")
        .arg(
            Arg::new("count")
                .short('c')
                .long("count")
                .value_name("NUMBER")
                .help("Number of events to generate")
                .default_value("10000"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file")
                .default_value("generated-input.json"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Container format: json (one array) or jsonl (one object per line)")
                .default_value("json"),
        )
        .arg(
            Arg::new("max-gap")
                .short('g')
                .long("max-gap-minutes")
                .value_name("MINUTES")
                .help("Maximum gap between consecutive events, in minutes")
                .default_value("25"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("NUMBER")
                .help("RNG seed for reproducible output"),
        )
        .get_matches();

    let count: usize = matches
        .get_one::<String>("count")
        .map(String::as_str)
        .unwrap_or("10000")
        .parse()?;
    let output_file = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("generated-input.json");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");
    let max_gap: i64 = matches
        .get_one::<String>("max-gap")
        .map(String::as_str)
        .unwrap_or("25")
        .parse()?;

    if format != "json" && format != "jsonl" {
        return Err(format!("unsupported format: {format}").into());
    }
    if max_gap < 1 {
        return Err("max gap must be at least one minute".into());
    }

    let mut rng: StdRng = match matches.get_one::<String>("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    println!("Generating {} events into {}...", count, output_file);

    let file = File::create(output_file)?;
    let mut writer = BufWriter::new(file);

    let mut timestamp = Utc::now().naive_utc();

    if format == "json" {
        write!(writer, "[")?;
    }
    for i in 0..count {
        if i > 0 && i % 100_000 == 0 {
            println!("Generated {} events...", i);
        }

        let event = generate_event(&mut rng, &timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string());
        match format {
            "json" => {
                if i > 0 {
                    write!(writer, ", ")?;
                }
                serde_json::to_writer(&mut writer, &event)?;
            }
            _ => writeln!(writer, "{}", serde_json::to_string(&event)?)?,
        }

        timestamp += chrono::Duration::minutes(rng.gen_range(1..=max_gap));
    }
    if format == "json" {
        writeln!(writer, "]")?;
    }

    writer.flush()?;
    println!("Generated {} events in {}", count, output_file);

    Ok(())
}
