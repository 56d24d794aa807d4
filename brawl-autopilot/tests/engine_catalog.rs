use anyhow::{anyhow, Result};
use brawl_autopilot::roster::{create_engine, describe_engines, engine_ids, DEFAULT_ENGINE_ID};
use brawl_core::search::SearchKind;
use std::collections::BTreeSet;
use std::fs;

#[test]
fn every_listed_engine_resolves() -> Result<()> {
    let ids = engine_ids();
    let unique: BTreeSet<&str> = ids.iter().copied().collect();
    if unique.len() != ids.len() {
        return Err(anyhow!("duplicate engine ids in roster: {ids:?}"));
    }
    if !ids.contains(&DEFAULT_ENGINE_ID) {
        return Err(anyhow!("default engine missing from roster"));
    }
    for id in ids {
        if create_engine(id).is_none() {
            return Err(anyhow!("listed engine does not resolve: {id}"));
        }
    }
    for (id, description) in describe_engines() {
        if description.trim().is_empty() {
            return Err(anyhow!("engine {id} has an empty description"));
        }
    }
    Ok(())
}

#[test]
fn file_configs_load_with_clamping() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("wild.json");
    fs::write(
        &path,
        r#"{
            "search": "minimax",
            "depth": 9,
            "opponent_top_k": 0,
            "weights": {
                "health_margin": 100.0,
                "in_range_bonus": 80.0,
                "distance_penalty": 0.2,
                "light_ready_bonus": 100.0,
                "heavy_ready_bonus": 140.0,
                "air_contest_bonus": 60.0,
                "air_exposed_penalty": 80.0,
                "too_far_penalty": 70.0,
                "dash_escape_bonus": 15.0
            }
        }"#,
    )?;

    let engine = create_engine(&format!("file:{}", path.display()))
        .ok_or_else(|| anyhow!("file config failed to load"))?;
    assert_eq!(engine.config().search, SearchKind::Minimax);
    assert_eq!(engine.config().depth, 4, "depth should clamp down");
    assert_eq!(engine.config().opponent_top_k, 1, "top_k should clamp up");
    assert_eq!(engine.config().weights.health_margin, 20.0);
    Ok(())
}

#[test]
fn sparse_file_configs_fall_back_to_defaults() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("sparse.json");
    fs::write(&path, r#"{"search": "expectimax"}"#)?;

    let engine = create_engine(&format!("file:{}", path.display()))
        .ok_or_else(|| anyhow!("sparse config failed to load"))?;
    assert_eq!(engine.config().search, SearchKind::Expectimax);
    assert_eq!(engine.config().depth, 2);
    assert_eq!(engine.config().opponent_top_k, 6);
    assert_eq!(engine.config().weights.heavy_ready_bonus, 140.0);
    Ok(())
}

#[test]
fn bad_file_configs_resolve_to_none() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    assert!(create_engine("file:/definitely/not/here.json").is_none());

    let junk = tmp.path().join("junk.json");
    fs::write(&junk, "not json at all")?;
    assert!(create_engine(&format!("file:{}", junk.display())).is_none());

    // Weights are all-or-nothing: a partial block is a config error, not
    // a silent mix of loaded and default values.
    let partial = tmp.path().join("partial.json");
    fs::write(&partial, r#"{"weights": {"health_margin": 1.0}}"#)?;
    assert!(create_engine(&format!("file:{}", partial.display())).is_none());

    Ok(())
}
