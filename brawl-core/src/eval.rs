//! Heuristic scoring of a (self, opponent) snapshot pair.

use serde::{Deserialize, Serialize};

use crate::constants::TOO_FAR_RANGE;
use crate::geometry::in_attack_range;
use crate::state::FighterState;

/// Feature weights for [`EvalWeights::score`]. All penalties are stored as
/// positive magnitudes and subtracted where they apply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per point of health lead over the opponent. The dominant term.
    pub health_margin: f64,
    /// Flat bonus for being in attack range.
    pub in_range_bonus: f64,
    /// Per unit of horizontal separation while out of range.
    pub distance_penalty: f64,
    /// Light attack ready while in range.
    pub light_ready_bonus: f64,
    /// Heavy attack ready while in range; heavier because it pays double.
    pub heavy_ready_bonus: f64,
    /// Contesting an airborne opponent while airborne too.
    pub air_contest_bonus: f64,
    /// Caught grounded under an airborne opponent in range.
    pub air_exposed_penalty: f64,
    /// Flat penalty once separation passes the too-far line.
    pub too_far_penalty: f64,
    /// Dash ready while the opponent is mid-swing.
    pub dash_escape_bonus: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            health_margin: 3.0,
            in_range_bonus: 80.0,
            distance_penalty: 0.2,
            light_ready_bonus: 100.0,
            heavy_ready_bonus: 140.0,
            air_contest_bonus: 60.0,
            air_exposed_penalty: 80.0,
            too_far_penalty: 70.0,
            dash_escape_bonus: 15.0,
        }
    }
}

impl EvalWeights {
    /// Pull a loaded weight set back into sane ranges.
    pub fn clamp(&mut self) {
        self.health_margin = self.health_margin.clamp(0.5, 20.0);
        self.in_range_bonus = self.in_range_bonus.clamp(0.0, 500.0);
        self.distance_penalty = self.distance_penalty.clamp(0.0, 2.0);
        self.light_ready_bonus = self.light_ready_bonus.clamp(0.0, 500.0);
        self.heavy_ready_bonus = self.heavy_ready_bonus.clamp(0.0, 500.0);
        self.air_contest_bonus = self.air_contest_bonus.clamp(0.0, 300.0);
        self.air_exposed_penalty = self.air_exposed_penalty.clamp(0.0, 300.0);
        self.too_far_penalty = self.too_far_penalty.clamp(0.0, 300.0);
        self.dash_escape_bonus = self.dash_escape_bonus.clamp(0.0, 100.0);
    }

    /// Desirability of this pair of states for `me`; higher is better.
    /// Reads nothing but the two snapshots — lookahead is the search's job.
    pub fn score(&self, me: &FighterState, foe: &FighterState) -> f64 {
        let in_range = in_attack_range(me, foe);
        let gap = me.gap_to(foe);

        let mut score = self.health_margin * f64::from(me.health - foe.health);

        if in_range {
            score += self.in_range_bonus;
        } else {
            score -= self.distance_penalty * gap;
        }

        if in_range && me.light_cooldown == 0 {
            score += self.light_ready_bonus;
        }
        if in_range && me.heavy_cooldown == 0 {
            score += self.heavy_ready_bonus;
        }

        if foe.airborne && in_range {
            score += if me.airborne {
                self.air_contest_bonus
            } else {
                -self.air_exposed_penalty
            };
        }

        if gap > TOO_FAR_RANGE {
            score -= self.too_far_penalty;
        }

        if me.dash_cooldown == 0 && foe.attacking {
            score += self.dash_escape_bonus;
        }

        score
    }
}
