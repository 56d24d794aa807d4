//! Tuning constants for the duel engine.
//!
//! Everything the simulator, evaluator, opponent model, and decision rules
//! treat as a fixed rule of the game lives here.

// Fighter bounding box (also the attack hitbox footprint)
pub const FIGHTER_WIDTH: f64 = 120.0;
pub const FIGHTER_HEIGHT: f64 = 180.0;

// Horizontal motion per frame
pub const WALK_SPEED: f64 = 5.0;
// One dash resolves as a single nudge of this size. The full travel of an
// uninterrupted dash is 10x this; the simulator models only the first frame.
pub const DASH_BURST: f64 = 30.0;

// Attack damage
pub const LIGHT_DAMAGE: i32 = 10;
pub const HEAVY_DAMAGE: i32 = 20;

// Self-damage for swinging at air. Zeroing both disables whiff punishment.
pub const LIGHT_WHIFF_PENALTY: i32 = 2;
pub const HEAVY_WHIFF_PENALTY: i32 = 4;

// Recharge frames stamped when the matching action triggers
pub const LIGHT_COOLDOWN: i32 = 25;
pub const HEAVY_COOLDOWN: i32 = 100;
pub const DASH_COOLDOWN: i32 = 50;

// Stand-in for a dash cooldown the caller never reported; big enough that
// no bounded search ever sees it reach zero.
pub const DASH_UNAVAILABLE: i32 = 999_999;

// Horizontal separation bands (units, center to center)
pub const MELEE_RANGE: f64 = 180.0; // opponent attack bias / anti-air backstep
pub const STANDOFF_RANGE: f64 = 190.0; // below this a no-op result is acceptable
pub const PRESSURE_RANGE: f64 = 220.0; // emergency defense / anti-air / far-close split
pub const JUMP_SCARE_RANGE: f64 = 240.0; // opponent jump bias; dash-in beyond it
pub const TOO_FAR_RANGE: f64 = 260.0; // over-extension penalty and forced approach

// Defensive rule tuning
pub const PANIC_RANGE: f64 = 160.0; // jump while retreating under attack
pub const AIR_GAP_MARGIN: f64 = 40.0; // vertical lead that counts as airborne

// Search defaults
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;
pub const DEFAULT_OPPONENT_TOP_K: usize = 6;

// Stage geometry for the edge guard
pub const ARENA_WIDTH: f64 = 1000.0;
pub const EDGE_MARGIN: f64 = 90.0;
