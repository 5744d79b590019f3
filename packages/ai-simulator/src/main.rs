//! AI Simulator CLI: fast in-memory Briscola games between two registered AIs.
//!
//! Games run without prompts or narration, so strategies can be compared over
//! thousands of deals.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use briscola::ai::create_ai;
use briscola::ai::registry::registered_ais;
use briscola::AiPlayer;
use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Briscola simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI in seat 0 (the human chair)
    #[arg(long, default_value = "Maestro")]
    seat0: String,

    /// AI in seat 1 (the computer chair)
    #[arg(long, default_value = "RandomPlayer")]
    seat1: String,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// List registered AIs and exit
    #[arg(long)]
    list_ais: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.list_ais {
        for factory in registered_ais() {
            println!("{} {}", factory.name, factory.version);
        }
        return Ok(());
    }

    let ai_types = [args.seat0.clone(), args.seat1.clone()];
    // Validate both names before writing any output.
    for name in &ai_types {
        build_ai(name, None)?;
    }
    if args.show_output {
        info!(games = args.games, seat0 = %ai_types[0], seat1 = %ai_types[1], "starting AI simulator");
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let detailed = matches!(args.metrics_level, MetricsLevel::Detailed);
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));
        let game_res = build_ai(&ai_types[0], Some(game_seed)).and_then(|seat0| {
            let seat1 = build_ai(&ai_types[1], Some(game_seed.rotate_left(32)))?;
            Simulator::new(game_seed, game_num)
                .simulate_game(seat0, seat1.as_ref(), ["seat0", "seat1"])
                .map_err(Into::into)
        });

        match game_res {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                    detailed,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!("Game {} completed: scores={:?}", game_num, result.final_scores);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.cloned());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

fn build_ai(name: &str, seed: Option<u64>) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    create_ai(name, seed).ok_or_else(|| format!("Unknown AI type: {name}").into())
}

fn print_summary(
    results: &[GameResult],
    ai_types: &[String; 2],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    let mut total_points = [0u64; 2];
    for result in results {
        match result.winner {
            Some(seat) => wins[usize::from(seat)] += 1,
            None => draws += 1,
        }
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_points[seat] += u64::from(score);
        }
    }

    println!("\n=== Results by Seat ===");
    let n = results.len() as f64;
    for seat in 0..2 {
        println!(
            "Seat {} ({}): avg={:.1}, wins={} ({:.1}%)",
            seat,
            ai_types[seat],
            total_points[seat] as f64 / n,
            wins[seat],
            f64::from(wins[seat]) / n * 100.0
        );
    }
    println!("Draws: {} ({:.1}%)", draws, f64::from(draws) / n * 100.0);
}
