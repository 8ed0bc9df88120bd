use std::path::PathBuf;

use clap::Parser;
use delivery_metrics::{aggregate, output, JsonEventSource, WindowConfig};

#[derive(Parser)]
#[command(name = "delivery-metrics")]
#[command(about = "Per-minute moving average of translation delivery times", long_about = None)]
struct Cli {
    /// Path to the input events file (JSON array or one JSON object per line)
    #[arg(short, long)]
    input_file: PathBuf,

    /// Trailing window size in minutes
    #[arg(short, long)]
    window_size: u32,

    /// Output file (standard output when omitted)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt::init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let window = WindowConfig::new(cli.window_size)?;
    let source = JsonEventSource::open(&cli.input_file)?;
    let records = aggregate(source, &window)?;

    tracing::info!(
        records = records.len(),
        window_minutes = window.minutes(),
        "aggregation complete"
    );

    output::write_to_path(cli.output_file.as_deref(), &records, cli.pretty)?;

    Ok(())
}
