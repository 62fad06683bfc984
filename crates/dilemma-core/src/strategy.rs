//! Strategy catalog

use serde::{Deserialize, Serialize};

use crate::history::{moves_from_str, opponent_view, Move, ParseMoveError};
use crate::random::{CoinFlip, EntropyCoin};

/// A decision rule over the interleaved move history.
///
/// `decide` receives every move made before the current turn, never the
/// move being decided. Strategies recompute whatever memory they exercise
/// from the history argument each call; the only state bound into an
/// instance is configuration (a forgiveness window) or a replay cursor.
///
/// The same strategy value may be seated as either agent, so
/// implementations derive opponent-vs-self views from history parity and
/// never assume a seat.
pub trait Strategy {
    fn decide(&mut self, history: &[Move]) -> Move;
}

/// Always cooperate, never defect.
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn decide(&mut self, _history: &[Move]) -> Move {
        Move::Cooperate
    }
}

/// Always defect, never cooperate.
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn decide(&mut self, _history: &[Move]) -> Move {
        Move::Defect
    }
}

/// Independent fair coin flip each turn.
pub struct Random<C: CoinFlip> {
    coin: C,
}

impl Random<EntropyCoin> {
    /// Unseeded, non-reproducible coin.
    pub fn fair() -> Self {
        Self { coin: EntropyCoin::new() }
    }
}

impl<C: CoinFlip> Random<C> {
    /// Inject a coin source. Tests pass a `SeededRng`.
    pub fn with_coin(coin: C) -> Self {
        Self { coin }
    }
}

impl<C: CoinFlip> Strategy for Random<C> {
    fn decide(&mut self, _history: &[Move]) -> Move {
        if self.coin.flip() {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}

/// Copy the opponent's last move. Start with cooperate.
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, history: &[Move]) -> Move {
        // The entry immediately preceding the current turn always belongs
        // to the opponent.
        history.last().copied().unwrap_or(Move::Cooperate)
    }
}

/// Cooperate until the opponent defects once, then defect forever.
///
/// There is no locked flag: the opponent view is recomputed from the full
/// history each call, and the defection never leaves the history, which is
/// what makes the trigger irrevocable.
pub struct GrimTrigger;

impl Strategy for GrimTrigger {
    fn decide(&mut self, history: &[Move]) -> Move {
        if opponent_view(history).contains(&Move::Defect) {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

/// Punish a defection for `window` opponent turns, then resume cooperating.
///
/// Inspects the trailing `window + 1` opponent moves (fewer when the game
/// is younger) and defects if any of them is a defection. Forgiveness is
/// the defection scrolling out of that fixed lookback, not a timer.
pub struct Forgive {
    window: usize,
}

impl Forgive {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Strategy for Forgive {
    fn decide(&mut self, history: &[Move]) -> Move {
        let opponent = opponent_view(history);
        let start = opponent.len().saturating_sub(self.window + 1);

        if opponent[start..].contains(&Move::Defect) {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

/// Replay a scripted move list cyclically, ignoring history.
///
/// The cursor advances on every `decide` call and wraps past the end of
/// the script. This is the one catalog member with per-call mutable state,
/// there to drive deterministic test scenarios. One instance serves one
/// game at a time: sharing it across games interleaves their cursors.
///
/// The script must be non-empty; deciding with an empty script is a caller
/// defect and panics.
pub struct Fixed {
    moves: Vec<Move>,
    cursor: usize,
}

impl Fixed {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves, cursor: 0 }
    }

    /// Build from move-string notation, e.g. `Fixed::from_script("CDC")`.
    pub fn from_script(script: &str) -> Result<Self, ParseMoveError> {
        Ok(Self::new(moves_from_str(script)?))
    }

    fn skip(mut self, calls_taken: usize) -> Self {
        if !self.moves.is_empty() {
            self.cursor = calls_taken % self.moves.len();
        }
        self
    }
}

impl Strategy for Fixed {
    fn decide(&mut self, _history: &[Move]) -> Move {
        let mv = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        mv
    }
}

/// Data-driven strategy description.
///
/// This is the form a frontend hands across the WASM boundary; `build`
/// turns it into a live strategy value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategySpec {
    AlwaysCooperate,
    AlwaysDefect,
    Random,
    TitForTat,
    GrimTrigger,
    Forgive { window: usize },
    Fixed { moves: Vec<Move> },
}

impl StrategySpec {
    /// Instantiate the described strategy for a fresh game.
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategySpec::AlwaysCooperate => Box::new(AlwaysCooperate),
            StrategySpec::AlwaysDefect => Box::new(AlwaysDefect),
            StrategySpec::Random => Box::new(Random::fair()),
            StrategySpec::TitForTat => Box::new(TitForTat),
            StrategySpec::GrimTrigger => Box::new(GrimTrigger),
            StrategySpec::Forgive { window } => Box::new(Forgive::new(*window)),
            StrategySpec::Fixed { moves } => Box::new(Fixed::new(moves.clone())),
        }
    }

    /// Instantiate mid-game: `calls_taken` is how many moves this seat has
    /// already contributed to the history, so a scripted cursor
    /// fast-forwards past them. Stateless strategies ignore it.
    pub fn resume(&self, calls_taken: usize) -> Box<dyn Strategy> {
        match self {
            StrategySpec::Fixed { moves } => Box::new(Fixed::new(moves.clone()).skip(calls_taken)),
            _ => self.build(),
        }
    }

    /// Human-readable description of a strategy.
    pub fn describe(&self) -> String {
        match self {
            StrategySpec::AlwaysCooperate => "Never defects. Always cooperates.".to_string(),
            StrategySpec::AlwaysDefect => "Never cooperates. Always defects.".to_string(),
            StrategySpec::Random => "Fair coin flip each round.".to_string(),
            StrategySpec::TitForTat => {
                "Copies opponent's last move. Starts by cooperating.".to_string()
            }
            StrategySpec::GrimTrigger => {
                "Cooperates until betrayed, then always defects.".to_string()
            }
            StrategySpec::Forgive { window } => {
                format!("Punishes a defection for {} rounds, then forgives.", window)
            }
            StrategySpec::Fixed { moves } => {
                format!("Replays a {}-move script cyclically.", moves.len())
            }
        }
    }
}


#[cfg(test)]
mod properties {
    use proptest::collection::vec;
    use proptest::prelude::{prop_assert_eq, prop_oneof, proptest, Just};
    use proptest::strategy::Strategy as _;

    use super::{Fixed, Forgive, GrimTrigger, Strategy, TitForTat};
    use crate::history::Move;

    fn arb_move() -> impl proptest::strategy::Strategy<Value = Move> {
        prop_oneof![Just(Move::Cooperate), Just(Move::Defect)]
    }

    /// Interleave opponent moves into a history where seat A decides next:
    /// A's own moves (all cooperation) at even indices, the opponent's at
    /// odd. Built by hand so these laws do not lean on `opponent_view`.
    fn seat_a_history(opponent: &[Move]) -> Vec<Move> {
        let mut history = Vec::with_capacity(opponent.len() * 2);
        for m in opponent {
            history.push(Move::Cooperate);
            history.push(*m);
        }
        history
    }

    proptest! {
        #[test]
        fn tit_for_tat_mirrors_last_move(history in vec(arb_move(), 1..40)) {
            prop_assert_eq!(TitForTat.decide(&history), *history.last().unwrap());
        }

        #[test]
        fn grim_trigger_never_relents(
            base in vec(arb_move(), 0..20),
            extension in vec((arb_move(), arb_move()), 1..10),
        ) {
            let mut history = base;
            history.push(Move::Defect); // opponent's latest move is a defection

            let mut grim = GrimTrigger;
            prop_assert_eq!(grim.decide(&history), Move::Defect);

            // Extend by whole rounds so the same seat keeps deciding.
            for (ours, theirs) in extension {
                history.push(ours);
                history.push(theirs);
                prop_assert_eq!(grim.decide(&history), Move::Defect);
            }
        }

        #[test]
        fn forgive_depends_only_on_trailing_window(
            prefix_a in vec(arb_move(), 0..15),
            prefix_b in vec(arb_move(), 0..15),
            tail in vec(arb_move(), 1..8),
            window in 0usize..6,
        ) {
            // Two games whose recent opponent rounds agree must look
            // identical to Forgive once the differing prefixes have
            // scrolled out of the lookback.
            let h1 = seat_a_history(&[prefix_a.as_slice(), tail.as_slice()].concat());
            let h2 = seat_a_history(&[prefix_b.as_slice(), tail.as_slice()].concat());

            if tail.len() >= window + 1 {
                let mut forgive = Forgive::new(window);
                let d1 = forgive.decide(&h1);
                let d2 = forgive.decide(&h2);
                prop_assert_eq!(d1, d2);
            }
        }

        #[test]
        fn forgive_window_bound(
            opponent in vec(arb_move(), 0..30),
            window in 0usize..6,
        ) {
            let history = seat_a_history(&opponent);
            let start = opponent.len().saturating_sub(window + 1);
            let expected = if opponent[start..].contains(&Move::Defect) {
                Move::Defect
            } else {
                Move::Cooperate
            };

            prop_assert_eq!(Forgive::new(window).decide(&history), expected);
        }

        #[test]
        fn fixed_replays_script_cyclically(
            script in vec(arb_move(), 1..10),
            calls in 1usize..50,
        ) {
            let mut fixed = Fixed::new(script.clone());
            for n in 0..calls {
                prop_assert_eq!(fixed.decide(&[]), script[n % script.len()]);
            }
        }
    }
}
