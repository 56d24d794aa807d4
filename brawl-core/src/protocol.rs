//! Line codec for the JSON frame protocol.
//!
//! One request line in, one response line out, once per frame. Decoding is
//! deliberately tolerant: numeric fields accept integers or floats,
//! negative counters clamp to zero, an unreported dash cooldown reads as
//! unavailable, and junk saved data resets the frame counter instead of
//! erroring. The engine itself never touches a socket or a stream; callers
//! own the transport and fall back to [`no_op_line`] when a line is
//! unparseable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DASH_UNAVAILABLE;
use crate::state::{Action, AttackKind, Direction, FighterState};

/// Canonical reply when a request can't be understood: do nothing, reset
/// the saved state.
pub const NO_OP_LINE: &str =
    r#"{"move":null,"attack":null,"jump":false,"dash":null,"debug":null,"saved_data":{}}"#;

pub fn no_op_line() -> &'static str {
    NO_OP_LINE
}

/// A decoded frame request: both fighters plus the pass-through counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRequest {
    pub fighter: FighterState,
    pub opponent: FighterState,
    pub counter: u64,
}

#[derive(Debug, Deserialize)]
struct RequestWire {
    fighter: FighterRecord,
    opponent: FighterRecord,
    #[serde(default)]
    saved_data: Value,
}

#[derive(Debug, Deserialize)]
struct FighterRecord {
    x: f64,
    y: f64,
    health: f64,
    #[serde(default)]
    attack_cooldown: [f64; 2],
    #[serde(default = "unreported_dash")]
    dash_cooldown: f64,
    #[serde(default)]
    attacking: bool,
    #[serde(default)]
    jump: bool,
}

fn unreported_dash() -> f64 {
    f64::from(DASH_UNAVAILABLE)
}

impl FighterRecord {
    fn into_state(self) -> FighterState {
        FighterState {
            x: self.x,
            y: self.y,
            health: clamp_count(self.health),
            light_cooldown: clamp_count(self.attack_cooldown[0]),
            heavy_cooldown: clamp_count(self.attack_cooldown[1]),
            dash_cooldown: clamp_count(self.dash_cooldown),
            attacking: self.attacking,
            airborne: self.jump,
        }
    }
}

fn clamp_count(raw: f64) -> i32 {
    raw.max(0.0) as i32
}

/// Counter lives at `saved_data.frame`; anything else means "start over".
fn read_counter(saved_data: &Value) -> u64 {
    match saved_data.get("frame") {
        Some(frame) => frame
            .as_u64()
            .or_else(|| frame.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or(0),
        None => 0,
    }
}

pub fn decode_request(line: &str) -> Result<FrameRequest, serde_json::Error> {
    let wire: RequestWire = serde_json::from_str(line)?;
    Ok(FrameRequest {
        fighter: wire.fighter.into_state(),
        opponent: wire.opponent.into_state(),
        counter: read_counter(&wire.saved_data),
    })
}

#[derive(Debug, Serialize)]
struct ResponseWire {
    #[serde(rename = "move")]
    movement: Option<Direction>,
    attack: Option<u8>,
    jump: bool,
    dash: Option<Direction>,
    debug: Option<()>,
    saved_data: SavedData,
}

#[derive(Debug, Serialize)]
struct SavedData {
    frame: u64,
}

fn attack_code(kind: AttackKind) -> u8 {
    match kind {
        AttackKind::Light => 1,
        AttackKind::Heavy => 2,
    }
}

pub fn encode_response(action: Action, counter: u64) -> Result<String, serde_json::Error> {
    let wire = ResponseWire {
        movement: action.movement,
        attack: action.attack.map(attack_code),
        jump: action.jump,
        dash: action.dash,
        debug: None,
        saved_data: SavedData { frame: counter },
    };
    serde_json::to_string(&wire)
}
