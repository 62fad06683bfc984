//! Round-stepping engine
//!
//! Interleaves two strategies into a single ordered move sequence. The
//! engine owns nothing: it reads the accumulated history, asks whichever
//! strategy is up for its next move, and returns a longer history.

use crate::history::Move;
use crate::strategy::Strategy;

/// Advance the game by a single turn.
///
/// Whose turn it is follows from history length: even means `s1`, odd
/// means `s2`. The chosen strategy sees the current history and its move
/// is appended to a fresh copy; the input is never mutated, so callers can
/// hold earlier snapshots.
///
/// A panicking strategy is a programming defect in that strategy and
/// propagates unmodified.
pub fn step<'a>(s1: &'a mut dyn Strategy, s2: &'a mut dyn Strategy, history: &[Move]) -> Vec<Move> {
    let mover = if history.len() % 2 == 0 { s1 } else { s2 };
    let mv = mover.decide(history);

    let mut next = Vec::with_capacity(history.len() + 1);
    next.extend_from_slice(history);
    next.push(mv);
    next
}

/// Run `rounds` complete rounds from an empty history.
///
/// One round is one move by each seat, so the result always holds
/// `rounds * 2` moves: even indices from `s1`, odd indices from `s2`.
/// Zero rounds yields an empty sequence.
pub fn play_rounds(s1: &mut dyn Strategy, s2: &mut dyn Strategy, rounds: usize) -> Vec<Move> {
    let mut history = Vec::new();

    for _ in 0..rounds * 2 {
        history = step(s1, s2, &history);
    }

    history
}
