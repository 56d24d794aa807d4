//! The per-frame decision layer: forced-situation rules first, search last.
//!
//! The rules cover spots where lookahead is wasted motion — dodging an
//! active swing, contesting a jump-in, cashing a free hit, refusing a
//! stand-off. Everything else goes to the configured search engine.

use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_GAP_MARGIN, ARENA_WIDTH, DEFAULT_OPPONENT_TOP_K, DEFAULT_SEARCH_DEPTH, EDGE_MARGIN,
    MELEE_RANGE, PANIC_RANGE, PRESSURE_RANGE, STANDOFF_RANGE, TOO_FAR_RANGE,
};
use crate::eval::EvalWeights;
use crate::geometry::in_attack_range;
use crate::search::{choose_expectimax, choose_minimax, SearchKind};
use crate::state::{Action, AttackKind, Direction, FighterState};

/// Everything that distinguishes one engine variant from another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_search")]
    pub search: SearchKind,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_top_k")]
    pub opponent_top_k: usize,
    #[serde(default)]
    pub weights: EvalWeights,
}

fn default_search() -> SearchKind {
    SearchKind::Expectimax
}

fn default_depth() -> u32 {
    DEFAULT_SEARCH_DEPTH
}

fn default_top_k() -> usize {
    DEFAULT_OPPONENT_TOP_K
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: default_search(),
            depth: default_depth(),
            opponent_top_k: default_top_k(),
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Pull a loaded config back into ranges the frame budget tolerates.
    pub fn clamp(&mut self) {
        self.depth = self.depth.clamp(1, 4);
        self.opponent_top_k = self.opponent_top_k.clamp(1, 8);
        self.weights.clamp();
    }
}

/// One configured decision engine. Stateless between frames apart from the
/// opaque counter the caller threads through [`DecisionEngine::decide`].
#[derive(Clone, Copy, Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide this frame's action. Never mutates the inputs, never blocks,
    /// never fails; the counter comes back incremented by exactly one and
    /// has no influence on the choice.
    pub fn decide(
        &self,
        me: &FighterState,
        foe: &FighterState,
        counter: u64,
    ) -> (Action, u64) {
        let action = restrain_at_edges(me.x, self.pick(me, foe));
        (action, counter + 1)
    }

    fn pick(&self, me: &FighterState, foe: &FighterState) -> Action {
        let gap = me.gap_to(foe);
        let toward = me.facing(foe);
        let away = toward.opposite();

        // ── Forced situations ────────────────────────────────────────────

        if foe.attacking && gap < PRESSURE_RANGE {
            return Action {
                movement: Some(away),
                jump: gap < PANIC_RANGE,
                ..Action::idle()
            };
        }

        if foe.y < me.y - AIR_GAP_MARGIN && gap < PRESSURE_RANGE {
            let movement = if gap < MELEE_RANGE { Some(away) } else { None };
            return Action {
                movement,
                jump: true,
                ..Action::idle()
            };
        }

        if in_attack_range(me, foe) && !me.attacking {
            let light_ready = me.light_cooldown == 0;
            let heavy_ready = me.heavy_cooldown == 0;
            // Heavy is preferred unless the foe is mid-swing and the light
            // can punish faster.
            if heavy_ready && (!light_ready || !foe.attacking) {
                return Action {
                    attack: Some(AttackKind::Heavy),
                    ..Action::idle()
                };
            }
            if light_ready {
                return Action {
                    attack: Some(AttackKind::Light),
                    ..Action::idle()
                };
            }
        }

        if gap > TOO_FAR_RANGE {
            return Action {
                movement: Some(toward),
                ..Action::idle()
            };
        }

        // ── Search fallback ──────────────────────────────────────────────

        let mut action = match self.config.search {
            SearchKind::Minimax => {
                choose_minimax(&self.config.weights, me, foe, self.config.depth)
            }
            SearchKind::Expectimax => choose_expectimax(
                &self.config.weights,
                me,
                foe,
                self.config.depth,
                self.config.opponent_top_k,
            ),
        };

        // A do-nothing verdict at real distance reads as a stall; push in.
        if action.is_idle() && gap > STANDOFF_RANGE {
            action.movement = Some(toward);
        }
        action
    }
}

/// Null out movement that would carry the fighter off the stage.
fn restrain_at_edges(x: f64, mut action: Action) -> Action {
    if x < EDGE_MARGIN {
        if action.movement == Some(Direction::Left) {
            action.movement = None;
        }
        if action.dash == Some(Direction::Left) {
            action.dash = None;
        }
    }
    if x > ARENA_WIDTH - EDGE_MARGIN {
        if action.movement == Some(Direction::Right) {
            action.movement = None;
        }
        if action.dash == Some(Direction::Right) {
            action.dash = None;
        }
    }
    action
}
