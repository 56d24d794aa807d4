use anyhow::{anyhow, Result};
use brawl_autopilot::arena::run_duel;
use brawl_autopilot::benchmark::{resolve_engines, run_benchmark, BenchmarkConfig};
use brawl_autopilot::roster::{create_engine, describe_engines, engine_ids, DEFAULT_ENGINE_ID};
use brawl_autopilot::runner::serve_stdio;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "brawl-autopilot")]
#[command(about = "Fighting-game decision engines: protocol play, local duels, and benchmarking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available engines
    ListEngines,
    /// Answer frame requests on stdin with decision lines on stdout
    Play {
        #[arg(long, default_value = DEFAULT_ENGINE_ID)]
        engine: String,
    },
    /// Fight one local duel between two engines
    Duel {
        #[arg(long)]
        left: String,
        #[arg(long)]
        right: String,
        #[arg(long, default_value_t = 3_600)]
        max_frames: u32,
        #[arg(long, default_value_t = 300.0)]
        gap: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run a round-robin benchmark across engines
    Benchmark {
        #[arg(long)]
        engines: Option<String>,
        #[arg(long, default_value_t = 5)]
        rounds: u32,
        #[arg(long, default_value_t = 3_600)]
        max_frames: u32,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        jobs: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::ListEngines => {
            for (id, description) in describe_engines() {
                println!("{id:16} {description}");
            }
        }
        Commands::Play { engine } => {
            let engine = resolve_engine(&engine)?;
            let replies = serve_stdio(&engine)?;
            tracing::info!(replies, "input closed, session over");
        }
        Commands::Duel {
            left,
            right,
            max_frames,
            gap,
            format,
        } => {
            let left_engine = resolve_engine(&left)?;
            let right_engine = resolve_engine(&right)?;
            let report = run_duel(&left_engine, &right_engine, max_frames, gap);
            match format {
                OutputFormat::Text => {
                    println!("left={left}");
                    println!("right={right}");
                    println!(
                        "winner={}",
                        match report.winner {
                            Some(side) => format!("{side:?}").to_lowercase(),
                            None => "draw".to_string(),
                        }
                    );
                    println!("frames={}", report.frames);
                    println!("left_health={}", report.left_health);
                    println!("right_health={}", report.right_health);
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::Benchmark {
            engines,
            rounds,
            max_frames,
            out_dir,
            jobs,
        } => {
            let engines = resolve_engines(engines.as_deref())?;
            let out_dir = out_dir.unwrap_or_else(|| {
                PathBuf::from(format!("benchmarks/duels-{}", timestamp_suffix()))
            });

            let report = run_benchmark(BenchmarkConfig {
                engines,
                rounds,
                max_frames,
                out_dir: out_dir.clone(),
                jobs,
            })?;

            println!("duels={}", report.duel_count);
            println!(
                "jobs={}",
                report
                    .jobs
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "auto".to_string())
            );
            println!("out_dir={}", out_dir.display());
            println!("standings:");
            for (idx, standing) in report.standings.iter().enumerate() {
                println!(
                    "  {}. {}  win_rate={:.0}% wins={} losses={} draws={} avg_margin={:+.1} avg_frames={:.1}",
                    idx + 1,
                    standing.engine_id,
                    standing.win_rate * 100.0,
                    standing.wins,
                    standing.losses,
                    standing.draws,
                    standing.avg_health_margin,
                    standing.avg_frames,
                );
            }
        }
    }

    Ok(())
}

fn resolve_engine(id: &str) -> Result<brawl_core::policy::DecisionEngine> {
    create_engine(id).ok_or_else(|| {
        let available = engine_ids().join(", ");
        anyhow!("unknown engine '{id}'. available: {available}")
    })
}

fn timestamp_suffix() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{now}")
}
