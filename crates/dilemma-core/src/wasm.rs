//! WASM bindings for frontend simulation

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::game;
use crate::history::Move;
use crate::strategy::StrategySpec;

fn parse_spec(json: &str, seat: &str) -> Result<StrategySpec, JsError> {
    serde_json::from_str(json)
        .map_err(|e| JsError::new(&format!("Invalid strategy {}: {}", seat, e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run a full batch simulation and return the interleaved move sequence.
///
/// # Arguments
/// * `strategy_a_json` - JSON serialized StrategySpec for seat A
/// * `strategy_b_json` - JSON serialized StrategySpec for seat B
/// * `rounds` - Number of complete rounds to play
#[wasm_bindgen]
pub fn play_rounds(
    strategy_a_json: &str,
    strategy_b_json: &str,
    rounds: u32,
) -> Result<JsValue, JsError> {
    let mut a = parse_spec(strategy_a_json, "A")?.build();
    let mut b = parse_spec(strategy_b_json, "B")?.build();

    let history = game::play_rounds(a.as_mut(), b.as_mut(), rounds as usize);
    to_js(&history)
}

/// Advance an existing history by a single turn.
///
/// Used by interactive "play one turn" drivers that render intermediate
/// states. Strategies are rebuilt from their specs each call; a scripted
/// strategy's cursor is fast-forwarded past the moves its seat already
/// made, so stepping turn by turn matches a batch run.
///
/// # Arguments
/// * `strategy_a_json` - JSON serialized StrategySpec for seat A
/// * `strategy_b_json` - JSON serialized StrategySpec for seat B
/// * `history_json` - JSON serialized move array accumulated so far
#[wasm_bindgen]
pub fn step_game(
    strategy_a_json: &str,
    strategy_b_json: &str,
    history_json: &str,
) -> Result<JsValue, JsError> {
    let history: Vec<Move> = serde_json::from_str(history_json)
        .map_err(|e| JsError::new(&format!("Invalid history: {}", e)))?;

    // Seat A owns even turn indices, so with N moves played A has made
    // ceil(N / 2) of them and B the rest.
    let mut a = parse_spec(strategy_a_json, "A")?.resume((history.len() + 1) / 2);
    let mut b = parse_spec(strategy_b_json, "B")?.resume(history.len() / 2);

    let next = game::step(a.as_mut(), b.as_mut(), &history);
    to_js(&next)
}

/// Human-readable description of a strategy spec.
#[wasm_bindgen]
pub fn describe_strategy(strategy_json: &str) -> Result<String, JsError> {
    Ok(parse_spec(strategy_json, "spec")?.describe())
}
