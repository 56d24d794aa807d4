//! Bounded-depth lookahead over the forward model.
//!
//! Two engines share one recursive shape. Minimax treats the opponent as
//! adversarial and prunes with alpha-beta; expectimax replaces the
//! minimizing ply with an expectation over [`opponent_distribution`] and
//! never prunes, because pruning is unsound under expectation. One depth
//! unit is one ply, so the default depth of 2 covers a single exchange.

use serde::{Deserialize, Serialize};

use crate::actions::candidate_actions;
use crate::eval::EvalWeights;
use crate::opponent::opponent_distribution;
use crate::sim::step;
use crate::state::{Action, FighterState};

/// Which lookahead the decision policy falls back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Minimax,
    Expectimax,
}

/// Best action for `me` under adversarial lookahead. Resolves to idle when
/// the tree yields no candidate (depth 0 at the root).
pub fn choose_minimax(
    weights: &EvalWeights,
    me: &FighterState,
    foe: &FighterState,
    depth: u32,
) -> Action {
    minimax(
        weights,
        me,
        foe,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
    )
    .1
    .unwrap_or_else(Action::idle)
}

/// Best action for `me` against the modeled opponent distribution.
pub fn choose_expectimax(
    weights: &EvalWeights,
    me: &FighterState,
    foe: &FighterState,
    depth: u32,
    opponent_top_k: usize,
) -> Action {
    expectimax(weights, me, foe, depth, opponent_top_k, true)
        .1
        .unwrap_or_else(Action::idle)
}

fn terminal(me: &FighterState, foe: &FighterState, depth: u32) -> bool {
    depth == 0 || me.knocked_out() || foe.knocked_out()
}

fn minimax(
    weights: &EvalWeights,
    me: &FighterState,
    foe: &FighterState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> (f64, Option<Action>) {
    if terminal(me, foe, depth) {
        return (weights.score(me, foe), None);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        let mut chosen = None;
        for action in candidate_actions(me, foe) {
            let (next_me, next_foe) = step(me, foe, action);
            let (value, _) = minimax(weights, &next_me, &next_foe, depth - 1, alpha, beta, false);
            // Strict compare keeps the first candidate on ties.
            if value > best {
                best = value;
                chosen = Some(action);
            }
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        (best, chosen)
    } else {
        // The foe acts: swap roles for generation and simulation, then
        // score everything from our side again one ply down.
        let mut worst = f64::INFINITY;
        for action in candidate_actions(foe, me) {
            let (next_foe, next_me) = step(foe, me, action);
            let (value, _) = minimax(weights, &next_me, &next_foe, depth - 1, alpha, beta, true);
            if value < worst {
                worst = value;
            }
            beta = beta.min(worst);
            if beta <= alpha {
                break;
            }
        }
        (worst, None)
    }
}

fn expectimax(
    weights: &EvalWeights,
    me: &FighterState,
    foe: &FighterState,
    depth: u32,
    opponent_top_k: usize,
    maximizing: bool,
) -> (f64, Option<Action>) {
    if terminal(me, foe, depth) {
        return (weights.score(me, foe), None);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        let mut chosen = None;
        for action in candidate_actions(me, foe) {
            let (next_me, next_foe) = step(me, foe, action);
            let (value, _) = expectimax(
                weights,
                &next_me,
                &next_foe,
                depth - 1,
                opponent_top_k,
                false,
            );
            if value > best {
                best = value;
                chosen = Some(action);
            }
        }
        (best, chosen)
    } else {
        let mut expected = 0.0;
        for (action, probability) in opponent_distribution(foe, me, opponent_top_k) {
            let (next_foe, next_me) = step(foe, me, action);
            let (value, _) = expectimax(
                weights,
                &next_me,
                &next_foe,
                depth - 1,
                opponent_top_k,
                true,
            );
            expected += probability * value;
        }
        (expected, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DASH_UNAVAILABLE, DEFAULT_OPPONENT_TOP_K, DEFAULT_SEARCH_DEPTH};
    use crate::state::{AttackKind, Direction};

    fn fighter(x: f64, health: i32) -> FighterState {
        FighterState::new(x, 300.0, health)
    }

    /// Reference minimax with no pruning; must agree with the pruned one.
    fn plain_minimax(
        weights: &EvalWeights,
        me: &FighterState,
        foe: &FighterState,
        depth: u32,
        maximizing: bool,
    ) -> (f64, Option<Action>) {
        if terminal(me, foe, depth) {
            return (weights.score(me, foe), None);
        }
        if maximizing {
            let mut best = f64::NEG_INFINITY;
            let mut chosen = None;
            for action in candidate_actions(me, foe) {
                let (next_me, next_foe) = step(me, foe, action);
                let (value, _) = plain_minimax(weights, &next_me, &next_foe, depth - 1, false);
                if value > best {
                    best = value;
                    chosen = Some(action);
                }
            }
            (best, chosen)
        } else {
            let mut worst = f64::INFINITY;
            for action in candidate_actions(foe, me) {
                let (next_foe, next_me) = step(foe, me, action);
                let (value, _) = plain_minimax(weights, &next_me, &next_foe, depth - 1, true);
                if value < worst {
                    worst = value;
                }
            }
            (worst, None)
        }
    }

    fn scenario_grid() -> Vec<(FighterState, FighterState)> {
        let mut grid = Vec::new();
        for gap in [60.0, 150.0, 200.0, 280.0, 420.0] {
            for (light, heavy, dash) in [(0, 0, 0), (12, 0, DASH_UNAVAILABLE), (3, 70, 10)] {
                let mut me = fighter(400.0, 100);
                me.light_cooldown = light;
                me.heavy_cooldown = heavy;
                me.dash_cooldown = dash;
                let mut foe = fighter(400.0 + gap, 85);
                foe.heavy_cooldown = 20;
                grid.push((me, foe));

                let mut leaper = foe;
                leaper.airborne = true;
                leaper.attacking = true;
                grid.push((me, leaper));
            }
        }
        grid
    }

    #[test]
    fn pruning_never_changes_the_answer() {
        let weights = EvalWeights::default();
        for (me, foe) in scenario_grid() {
            for depth in 1..=3 {
                let pruned = minimax(
                    &weights,
                    &me,
                    &foe,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    true,
                );
                let plain = plain_minimax(&weights, &me, &foe, depth, true);
                assert_eq!(pruned.1, plain.1, "depth {depth} me {me:?} foe {foe:?}");
                assert!(
                    (pruned.0 - plain.0).abs() < 1e-9,
                    "depth {depth} me {me:?} foe {foe:?}"
                );
            }
        }
    }

    #[test]
    fn depth_zero_yields_idle() {
        let weights = EvalWeights::default();
        let me = fighter(400.0, 100);
        let foe = fighter(600.0, 100);
        assert!(choose_minimax(&weights, &me, &foe, 0).is_idle());
        assert!(choose_expectimax(&weights, &me, &foe, 0, DEFAULT_OPPONENT_TOP_K).is_idle());
    }

    #[test]
    fn lethal_strike_found_when_health_dominates() {
        // With the health margin cranked up, nothing outweighs the kill;
        // both engines must find it through the terminal check.
        let weights = EvalWeights {
            health_margin: 50.0,
            ..EvalWeights::default()
        };
        let me = fighter(400.0, 100);
        let foe = fighter(500.0, 10);

        let action = choose_minimax(&weights, &me, &foe, DEFAULT_SEARCH_DEPTH);
        // Both attacks end it; the light one comes first in candidate order
        // and leaves the heavy ready, so it wins.
        assert_eq!(action.attack, Some(AttackKind::Light));

        let action = choose_expectimax(
            &weights,
            &me,
            &foe,
            DEFAULT_SEARCH_DEPTH,
            DEFAULT_OPPONENT_TOP_K,
        );
        assert_eq!(action.attack, Some(AttackKind::Light));
    }

    #[test]
    fn finished_duels_resolve_to_idle() {
        let weights = EvalWeights::default();
        let me = fighter(400.0, 100);
        let downed = fighter(500.0, 0);

        assert!(choose_minimax(&weights, &me, &downed, DEFAULT_SEARCH_DEPTH).is_idle());
        assert!(choose_minimax(&weights, &downed, &me, DEFAULT_SEARCH_DEPTH).is_idle());
        assert!(
            choose_expectimax(&weights, &me, &downed, DEFAULT_SEARCH_DEPTH, 6).is_idle()
        );
    }

    #[test]
    fn closing_dash_outranks_waiting() {
        let weights = EvalWeights::default();
        let me = fighter(400.0, 100);
        let foe = fighter(600.0, 100);

        let action = choose_minimax(&weights, &me, &foe, DEFAULT_SEARCH_DEPTH);
        assert_eq!(action.dash, Some(Direction::Right));
    }

    #[test]
    fn depth_one_matches_a_greedy_scan() {
        let weights = EvalWeights::default();
        let me = fighter(400.0, 100);
        let foe = fighter(540.0, 90);

        let mut best = f64::NEG_INFINITY;
        let mut chosen = Action::idle();
        for action in candidate_actions(&me, &foe) {
            let (next_me, next_foe) = step(&me, &foe, action);
            let value = weights.score(&next_me, &next_foe);
            if value > best {
                best = value;
                chosen = action;
            }
        }

        assert_eq!(choose_minimax(&weights, &me, &foe, 1), chosen);
    }

    #[test]
    fn expectation_ply_is_the_weighted_child_sum() {
        let weights = EvalWeights::default();
        let mut me = fighter(400.0, 100);
        me.light_cooldown = 4;
        let mut foe = fighter(530.0, 80);
        foe.light_cooldown = 0;

        let (value, action) = expectimax(&weights, &me, &foe, 1, DEFAULT_OPPONENT_TOP_K, false);
        assert!(action.is_none());

        let mut expected = 0.0;
        for (foe_action, probability) in opponent_distribution(&foe, &me, DEFAULT_OPPONENT_TOP_K) {
            let (next_foe, next_me) = step(&foe, &me, foe_action);
            expected += probability * weights.score(&next_me, &next_foe);
        }
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn engines_are_deterministic() {
        let weights = EvalWeights::default();
        let mut me = fighter(410.0, 70);
        me.heavy_cooldown = 30;
        let mut foe = fighter(620.0, 90);
        foe.dash_cooldown = 0;

        let first = choose_expectimax(
            &weights,
            &me,
            &foe,
            DEFAULT_SEARCH_DEPTH,
            DEFAULT_OPPONENT_TOP_K,
        );
        let second = choose_expectimax(
            &weights,
            &me,
            &foe,
            DEFAULT_SEARCH_DEPTH,
            DEFAULT_OPPONENT_TOP_K,
        );
        assert_eq!(first, second);
        assert_eq!(
            choose_minimax(&weights, &me, &foe, 3),
            choose_minimax(&weights, &me, &foe, 3)
        );
    }
}
