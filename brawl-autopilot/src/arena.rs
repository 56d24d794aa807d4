//! Local duel harness: two engines, one stage, sequential frame steps.
//!
//! Both sides decide from the same pre-frame snapshots, then the frame
//! resolves left-first through the shared simulator. Engines are pure, so
//! a duel between two given configs is fully deterministic.

use brawl_core::constants::ARENA_WIDTH;
use brawl_core::policy::DecisionEngine;
use brawl_core::sim::step;
use brawl_core::state::FighterState;
use serde::{Deserialize, Serialize};

pub const STARTING_HEALTH: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuelReport {
    /// `None` on a double knockout or a dead-even frame cap.
    pub winner: Option<Side>,
    pub frames: u32,
    pub left_health: i32,
    pub right_health: i32,
}

/// Fight one duel to knockout or the frame cap. `spawn_gap` is the
/// center-to-center separation at spawn, centered on the stage.
pub fn run_duel(
    left: &DecisionEngine,
    right: &DecisionEngine,
    max_frames: u32,
    spawn_gap: f64,
) -> DuelReport {
    let center = ARENA_WIDTH / 2.0;
    let mut left_state = FighterState::new(center - spawn_gap / 2.0, 0.0, STARTING_HEALTH);
    let mut right_state = FighterState::new(center + spawn_gap / 2.0, 0.0, STARTING_HEALTH);
    let mut left_counter = 0u64;
    let mut right_counter = 0u64;
    let mut frames = 0u32;

    while frames < max_frames {
        let (left_action, next_left) = left.decide(&left_state, &right_state, left_counter);
        let (right_action, next_right) = right.decide(&right_state, &left_state, right_counter);
        left_counter = next_left;
        right_counter = next_right;

        let (stepped_left, stepped_right) = step(&left_state, &right_state, left_action);
        let (stepped_right, stepped_left) = step(&stepped_right, &stepped_left, right_action);
        left_state = stepped_left;
        right_state = stepped_right;
        frames += 1;

        if left_state.knocked_out() || right_state.knocked_out() {
            break;
        }
    }

    let winner = match (left_state.knocked_out(), right_state.knocked_out()) {
        (true, true) => None,
        (true, false) => Some(Side::Right),
        (false, true) => Some(Side::Left),
        (false, false) => {
            if left_state.health > right_state.health {
                Some(Side::Left)
            } else if right_state.health > left_state.health {
                Some(Side::Right)
            } else {
                None
            }
        }
    };

    DuelReport {
        winner,
        frames,
        left_health: left_state.health,
        right_health: right_state.health,
    }
}
