//! One-frame forward model for a single acting side.
//!
//! `step` is the only way state advances anywhere in the engine: the search
//! alternates it between the two sides, and the arena replays it for real
//! matches. It is a pure function over copies; callers keep their originals.

use crate::constants::{
    DASH_BURST, DASH_COOLDOWN, HEAVY_COOLDOWN, HEAVY_DAMAGE, HEAVY_WHIFF_PENALTY, LIGHT_COOLDOWN,
    LIGHT_DAMAGE, LIGHT_WHIFF_PENALTY, WALK_SPEED,
};
use crate::geometry::in_attack_range;
use crate::state::{Action, AttackKind, Direction, FighterState};

/// Advance `actor` by one frame of `action`, resolving hits against
/// `target`. Effects apply in a fixed order: walk, dash, cooldown decay,
/// attack, jump flag. Only the actor's cooldowns tick; only the target's
/// health can drop, except for whiff self-damage.
pub fn step(
    actor: &FighterState,
    target: &FighterState,
    action: Action,
) -> (FighterState, FighterState) {
    let mut actor = *actor;
    let mut target = *target;

    match action.movement {
        Some(Direction::Left) => actor.x -= WALK_SPEED,
        Some(Direction::Right) => actor.x += WALK_SPEED,
        None => {}
    }

    let mut dash_stamped = false;
    if let Some(direction) = action.dash {
        if actor.dash_cooldown == 0 {
            actor.x += match direction {
                Direction::Left => -DASH_BURST,
                Direction::Right => DASH_BURST,
            };
            actor.dash_cooldown = DASH_COOLDOWN;
            dash_stamped = true;
        }
    }

    actor.light_cooldown = (actor.light_cooldown - 1).max(0);
    actor.heavy_cooldown = (actor.heavy_cooldown - 1).max(0);
    // A dash stamped this very frame keeps its full recharge.
    if !dash_stamped {
        actor.dash_cooldown = (actor.dash_cooldown - 1).max(0);
    }

    actor.attacking = false;

    match action.attack {
        Some(AttackKind::Light) if actor.light_cooldown == 0 => {
            actor.attacking = true;
            actor.light_cooldown = LIGHT_COOLDOWN;
            if in_attack_range(&actor, &target) {
                target.health = (target.health - LIGHT_DAMAGE).max(0);
            } else {
                actor.health = (actor.health - LIGHT_WHIFF_PENALTY).max(0);
            }
        }
        Some(AttackKind::Heavy) if actor.heavy_cooldown == 0 => {
            actor.attacking = true;
            actor.heavy_cooldown = HEAVY_COOLDOWN;
            if in_attack_range(&actor, &target) {
                target.health = (target.health - HEAVY_DAMAGE).max(0);
            } else {
                actor.health = (actor.health - HEAVY_WHIFF_PENALTY).max(0);
            }
        }
        _ => {}
    }

    actor.airborne = action.jump;

    (actor, target)
}
