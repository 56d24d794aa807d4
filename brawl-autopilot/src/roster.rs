//! The curated engine roster plus the `file:` escape hatch for bring-your-own
//! configs.

use std::fs;

use brawl_core::eval::EvalWeights;
use brawl_core::policy::{DecisionEngine, EngineConfig};
use brawl_core::search::SearchKind;

pub const DEFAULT_ENGINE_ID: &str = "counterpuncher";

#[derive(Clone, Copy, Debug)]
pub struct EngineProfile {
    pub id: &'static str,
    pub description: &'static str,
    pub config: EngineConfig,
}

// Curated roster: every profile here must survive EngineConfig::clamp
// unchanged, so loaded and listed configs mean the same thing.
pub fn engine_profiles() -> &'static [EngineProfile] {
    &[
        EngineProfile {
            id: "scrapper",
            description: "Alpha-beta baseline on the stock weight set.",
            config: EngineConfig {
                search: SearchKind::Minimax,
                depth: 2,
                opponent_top_k: 6,
                weights: EvalWeights {
                    health_margin: 3.0,
                    in_range_bonus: 80.0,
                    distance_penalty: 0.2,
                    light_ready_bonus: 100.0,
                    heavy_ready_bonus: 140.0,
                    air_contest_bonus: 60.0,
                    air_exposed_penalty: 80.0,
                    too_far_penalty: 70.0,
                    dash_escape_bonus: 15.0,
                },
            },
        },
        EngineProfile {
            id: "counterpuncher",
            description: "Flagship expectimax reader of the weighted opponent model.",
            config: EngineConfig {
                search: SearchKind::Expectimax,
                depth: 2,
                opponent_top_k: 6,
                weights: EvalWeights {
                    health_margin: 3.0,
                    in_range_bonus: 80.0,
                    distance_penalty: 0.2,
                    light_ready_bonus: 100.0,
                    heavy_ready_bonus: 140.0,
                    air_contest_bonus: 60.0,
                    air_exposed_penalty: 80.0,
                    too_far_penalty: 70.0,
                    dash_escape_bonus: 15.0,
                },
            },
        },
        EngineProfile {
            id: "headhunter",
            description: "Damage-first expectimax profile that pays to stay on top of the foe.",
            config: EngineConfig {
                search: SearchKind::Expectimax,
                depth: 2,
                opponent_top_k: 6,
                weights: EvalWeights {
                    health_margin: 5.0,
                    in_range_bonus: 120.0,
                    distance_penalty: 0.35,
                    light_ready_bonus: 120.0,
                    heavy_ready_bonus: 180.0,
                    air_contest_bonus: 80.0,
                    air_exposed_penalty: 60.0,
                    too_far_penalty: 40.0,
                    dash_escape_bonus: 10.0,
                },
            },
        },
        EngineProfile {
            id: "stonewall",
            description: "Defensive minimax profile that prices safety over openings.",
            config: EngineConfig {
                search: SearchKind::Minimax,
                depth: 2,
                opponent_top_k: 6,
                weights: EvalWeights {
                    health_margin: 6.0,
                    in_range_bonus: 50.0,
                    distance_penalty: 0.1,
                    light_ready_bonus: 70.0,
                    heavy_ready_bonus: 100.0,
                    air_contest_bonus: 40.0,
                    air_exposed_penalty: 120.0,
                    too_far_penalty: 90.0,
                    dash_escape_bonus: 40.0,
                },
            },
        },
        EngineProfile {
            id: "deepread",
            description: "Three-ply alpha-beta for slower, harder reads.",
            config: EngineConfig {
                search: SearchKind::Minimax,
                depth: 3,
                opponent_top_k: 6,
                weights: EvalWeights {
                    health_margin: 3.0,
                    in_range_bonus: 80.0,
                    distance_penalty: 0.2,
                    light_ready_bonus: 100.0,
                    heavy_ready_bonus: 140.0,
                    air_contest_bonus: 60.0,
                    air_exposed_penalty: 80.0,
                    too_far_penalty: 70.0,
                    dash_escape_bonus: 15.0,
                },
            },
        },
        EngineProfile {
            id: "gambler",
            description: "Expectimax trimmed to the foe's three likeliest replies.",
            config: EngineConfig {
                search: SearchKind::Expectimax,
                depth: 2,
                opponent_top_k: 3,
                weights: EvalWeights {
                    health_margin: 3.5,
                    in_range_bonus: 100.0,
                    distance_penalty: 0.25,
                    light_ready_bonus: 110.0,
                    heavy_ready_bonus: 150.0,
                    air_contest_bonus: 60.0,
                    air_exposed_penalty: 70.0,
                    too_far_penalty: 60.0,
                    dash_escape_bonus: 15.0,
                },
            },
        },
    ]
}

pub fn engine_ids() -> Vec<&'static str> {
    engine_profiles().iter().map(|profile| profile.id).collect()
}

pub fn describe_engines() -> Vec<(&'static str, &'static str)> {
    engine_profiles()
        .iter()
        .map(|profile| (profile.id, profile.description))
        .collect()
}

/// Resolve an engine id to a ready engine. `file:<path>` loads an
/// [`EngineConfig`] from JSON on disk; anything else must match the roster.
pub fn create_engine(id: &str) -> Option<DecisionEngine> {
    if let Some(path) = id.strip_prefix("file:") {
        return load_engine_file(path);
    }
    engine_profiles()
        .iter()
        .find(|profile| profile.id == id)
        .map(|profile| DecisionEngine::new(profile.config))
}

fn load_engine_file(path: &str) -> Option<DecisionEngine> {
    let raw = fs::read_to_string(path).ok()?;
    let mut config: EngineConfig = serde_json::from_str(&raw).ok()?;
    config.clamp();
    Some(DecisionEngine::new(config))
}
