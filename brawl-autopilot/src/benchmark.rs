//! Round-robin engine benchmarking over the local arena.
//!
//! Every ordered pair of distinct engines fights `rounds` duels, one per
//! spawn-gap in a fixed grid, so each engine plays both sides of every
//! matchup and the whole run is reproducible without a seed.

use crate::arena::{run_duel, DuelReport, Side};
use crate::roster::{create_engine, engine_ids};
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const SPAWN_GAPS: [f64; 5] = [140.0, 200.0, 240.0, 320.0, 420.0];

/// Spawn separation for a given round number; cycles through the grid.
pub fn spawn_gap_for_round(round: u32) -> f64 {
    SPAWN_GAPS[round as usize % SPAWN_GAPS.len()]
}

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub engines: Vec<String>,
    pub rounds: u32,
    pub max_frames: u32,
    pub out_dir: PathBuf,
    pub jobs: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelRecord {
    pub left: String,
    pub right: String,
    pub round: u32,
    pub spawn_gap: f64,
    pub winner: Option<Side>,
    pub frames: u32,
    pub left_health: i32,
    pub right_health: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineStanding {
    pub engine_id: String,
    pub duels: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f64,
    pub avg_health_margin: f64,
    pub avg_frames: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub generated_unix_s: u64,
    pub rounds: u32,
    pub max_frames: u32,
    pub jobs: Option<usize>,
    pub engines: Vec<String>,
    pub duel_count: usize,
    pub standings: Vec<EngineStanding>,
    pub duels: Vec<DuelRecord>,
}

/// Expand an optional comma-separated engine list; `None` means the whole
/// roster. `file:` ids are passed through untouched.
pub fn resolve_engines(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        None => Ok(engine_ids().iter().map(|id| (*id).to_string()).collect()),
        Some(raw) => {
            let mut engines = Vec::new();
            for token in raw.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                engines.push(token.to_string());
            }
            if engines.is_empty() {
                return Err(anyhow!("--engines resolved to empty list"));
            }
            Ok(engines)
        }
    }
}

pub fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkReport> {
    if config.engines.len() < 2 {
        return Err(anyhow!("benchmark requires at least two engines"));
    }
    if config.rounds == 0 {
        return Err(anyhow!("benchmark requires at least one round"));
    }
    if let Some(jobs) = config.jobs {
        if jobs == 0 {
            return Err(anyhow!("benchmark --jobs must be >= 1 when provided"));
        }
    }
    for id in &config.engines {
        if create_engine(id).is_none() {
            let available = engine_ids().join(", ");
            return Err(anyhow!("unknown engine '{id}'. available: {available}"));
        }
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed creating {}", config.out_dir.display()))?;

    let duel_jobs: Vec<(String, String, u32)> = config
        .engines
        .iter()
        .flat_map(|left| {
            config
                .engines
                .iter()
                .filter(move |right| *right != left)
                .flat_map(move |right| {
                    (0..config.rounds).map(move |round| (left.clone(), right.clone(), round))
                })
        })
        .collect();

    let run_one = |(left, right, round): &(String, String, u32)| -> Result<DuelRecord> {
        let left_engine =
            create_engine(left).ok_or_else(|| anyhow!("unknown engine '{left}'"))?;
        let right_engine =
            create_engine(right).ok_or_else(|| anyhow!("unknown engine '{right}'"))?;
        let spawn_gap = spawn_gap_for_round(*round);
        let report: DuelReport = run_duel(&left_engine, &right_engine, config.max_frames, spawn_gap);
        Ok(DuelRecord {
            left: left.clone(),
            right: right.clone(),
            round: *round,
            spawn_gap,
            winner: report.winner,
            frames: report.frames,
            left_health: report.left_health,
            right_health: report.right_health,
        })
    };

    let duel_results: Vec<Result<DuelRecord>> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| duel_jobs.par_iter().map(run_one).collect())
    } else {
        duel_jobs.par_iter().map(run_one).collect()
    };

    let mut duels = Vec::with_capacity(duel_results.len());
    for result in duel_results {
        duels.push(result?);
    }

    #[derive(Default)]
    struct Tally {
        duels: usize,
        wins: usize,
        losses: usize,
        draws: usize,
        margin_sum: i64,
        frames_sum: u64,
    }

    let mut grouped: HashMap<String, Tally> = HashMap::new();
    for record in &duels {
        let tally = grouped.entry(record.left.clone()).or_default();
        tally.duels += 1;
        match record.winner {
            Some(Side::Left) => tally.wins += 1,
            Some(Side::Right) => tally.losses += 1,
            None => tally.draws += 1,
        }
        tally.margin_sum += i64::from(record.left_health - record.right_health);
        tally.frames_sum += u64::from(record.frames);

        let tally = grouped.entry(record.right.clone()).or_default();
        tally.duels += 1;
        match record.winner {
            Some(Side::Right) => tally.wins += 1,
            Some(Side::Left) => tally.losses += 1,
            None => tally.draws += 1,
        }
        tally.margin_sum += i64::from(record.right_health - record.left_health);
        tally.frames_sum += u64::from(record.frames);
    }

    let mut standings: Vec<EngineStanding> = grouped
        .into_iter()
        .map(|(engine_id, tally)| EngineStanding {
            engine_id,
            duels: tally.duels,
            wins: tally.wins,
            losses: tally.losses,
            draws: tally.draws,
            win_rate: tally.wins as f64 / tally.duels as f64,
            avg_health_margin: tally.margin_sum as f64 / tally.duels as f64,
            avg_frames: tally.frames_sum as f64 / tally.duels as f64,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then_with(|| b.avg_health_margin.total_cmp(&a.avg_health_margin))
            .then_with(|| a.engine_id.cmp(&b.engine_id))
    });

    write_duels_csv(&config.out_dir.join("duels.csv"), &duels)?;
    write_standings_csv(&config.out_dir.join("standings.csv"), &standings)?;

    let report = BenchmarkReport {
        generated_unix_s: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        rounds: config.rounds,
        max_frames: config.max_frames,
        jobs: config.jobs,
        engines: config.engines,
        duel_count: duels.len(),
        standings,
        duels,
    };

    let report_path = config.out_dir.join("summary.json");
    fs::write(
        &report_path,
        serde_json::to_vec_pretty(&report).context("failed to serialize summary json")?,
    )
    .with_context(|| format!("failed writing {}", report_path.display()))?;

    Ok(report)
}

fn winner_label(winner: Option<Side>) -> &'static str {
    match winner {
        Some(Side::Left) => "left",
        Some(Side::Right) => "right",
        None => "draw",
    }
}

fn write_duels_csv(path: &Path, rows: &[DuelRecord]) -> Result<()> {
    let mut csv =
        String::from("left,right,round,spawn_gap,winner,frames,left_health,right_health\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            row.left,
            row.right,
            row.round,
            row.spawn_gap,
            winner_label(row.winner),
            row.frames,
            row.left_health,
            row.right_health
        ));
    }
    fs::write(path, csv).with_context(|| format!("failed writing {}", path.display()))
}

fn write_standings_csv(path: &Path, rows: &[EngineStanding]) -> Result<()> {
    let mut csv = String::from(
        "rank,engine_id,duels,wins,losses,draws,win_rate,avg_health_margin,avg_frames\n",
    );
    for (idx, row) in rows.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{:.4},{:.2},{:.2}\n",
            idx + 1,
            row.engine_id,
            row.duels,
            row.wins,
            row.losses,
            row.draws,
            row.win_rate,
            row.avg_health_margin,
            row.avg_frames
        ));
    }
    fs::write(path, csv).with_context(|| format!("failed writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_the_whole_roster() {
        let engines = resolve_engines(None).unwrap();
        assert_eq!(engines.len(), engine_ids().len());
    }

    #[test]
    fn resolve_splits_and_trims_csv_input() {
        let engines = resolve_engines(Some("scrapper, counterpuncher,, gambler ")).unwrap();
        assert_eq!(engines, vec!["scrapper", "counterpuncher", "gambler"]);
    }

    #[test]
    fn resolve_rejects_blank_input() {
        assert!(resolve_engines(Some(" , ,")).is_err());
    }

    #[test]
    fn spawn_gaps_cycle_through_the_grid() {
        assert_eq!(spawn_gap_for_round(0), spawn_gap_for_round(5));
        assert_eq!(spawn_gap_for_round(2), spawn_gap_for_round(7));
        assert!(spawn_gap_for_round(0) < spawn_gap_for_round(4));
    }

    #[test]
    fn bad_configs_are_rejected_before_any_io() {
        let base = BenchmarkConfig {
            engines: vec!["scrapper".to_string(), "counterpuncher".to_string()],
            rounds: 1,
            max_frames: 60,
            out_dir: PathBuf::from("never-created"),
            jobs: None,
        };

        let mut one_engine = base.clone();
        one_engine.engines.truncate(1);
        assert!(run_benchmark(one_engine).is_err());

        let mut no_rounds = base.clone();
        no_rounds.rounds = 0;
        assert!(run_benchmark(no_rounds).is_err());

        let mut zero_jobs = base.clone();
        zero_jobs.jobs = Some(0);
        assert!(run_benchmark(zero_jobs).is_err());

        let mut unknown = base;
        unknown.engines.push("omega-marathon".to_string());
        assert!(run_benchmark(unknown).is_err());
        assert!(!Path::new("never-created").exists());
    }
}
