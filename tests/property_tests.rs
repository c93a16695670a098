//! Property tests for the rules engine invariants.
//!
//! Random input sequences are played against `GameState`; after every
//! attempt the drawn lines, bounce tracking, turn order and score must
//! stay consistent.

use std::collections::HashSet;

use paper_soccer::core::{Cell, Direction, FieldConfig, Player};
use paper_soccer::rules::{BounceKind, GameState, MoveOutcome, Phase};
use paper_soccer::session::{Key, Session};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Input {
    /// Any of the eight directions, legal or not.
    Any(usize),
    /// The n-th currently legal direction (wrapping).
    Legal(usize),
    /// Partial or full reset.
    Reset(bool),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => (0usize..8).prop_map(Input::Any),
        8 => (0usize..8).prop_map(Input::Legal),
        1 => any::<bool>().prop_map(Input::Reset),
    ]
}

fn kickoff() -> impl Strategy<Value = Cell> {
    // Anywhere on the default field except the two goals.
    (0i32..15, 0i32..10).prop_filter("not a goal", |&(c, r)| !(r == 5 && (c == 0 || c == 14)))
        .prop_map(|(c, r)| Cell::new(c, r))
}

#[derive(Debug, PartialEq, Eq)]
struct Observed {
    player: Player,
    position: Cell,
    lines: usize,
    bounce_count: u32,
    last_bounce: Option<BounceKind>,
    score_total: u32,
}

fn observe(state: &GameState) -> Observed {
    Observed {
        player: state.current_player(),
        position: state.position(),
        lines: state.graph().len(),
        bounce_count: state.bounce_count(),
        last_bounce: state.last_bounce(),
        score_total: state.score().total(),
    }
}

fn check_state(state: &GameState) -> Result<(), TestCaseError> {
    let keys: HashSet<_> = state.graph().iter().map(|e| e.key()).collect();
    prop_assert_eq!(keys.len(), state.graph().len(), "duplicate line drawn");

    prop_assert!(state.field().contains(state.position()));

    let fresh = state.graph().legal_directions(state.field(), state.position());
    prop_assert_eq!(state.legal_moves(), fresh.as_slice());

    prop_assert_eq!(state.bounce_count() == 0, state.phase() == Phase::PlayerToMove);
    prop_assert_eq!(state.bounce_count() == 0, state.last_bounce().is_none());
    Ok(())
}

fn check_transition(before: &Observed, outcome: MoveOutcome, state: &GameState) -> Result<(), TestCaseError> {
    let after = observe(state);
    match outcome {
        MoveOutcome::Rejected { .. } => {
            prop_assert_eq!(&after, before);
        }
        MoveOutcome::Continued => {
            prop_assert_eq!(after.player, before.player.opponent());
            prop_assert_eq!(after.bounce_count, 0);
            prop_assert_eq!(after.lines, before.lines + 1);
            prop_assert_eq!(after.score_total, before.score_total);
        }
        MoveOutcome::BouncedContinue { kind } => {
            prop_assert_eq!(after.player, before.player);
            prop_assert_eq!(after.bounce_count, before.bounce_count + 1);
            prop_assert_eq!(after.last_bounce, Some(kind));
            prop_assert_eq!(after.lines, before.lines + 1);
            if kind == BounceKind::Border {
                prop_assert_ne!(before.last_bounce, Some(BounceKind::Border));
            }
            // A bounce that did not end the rally leaves a playable step.
            let playable = Direction::ALL
                .into_iter()
                .any(|dir| !state.clone().attempt_move(dir).is_rejected());
            prop_assert!(playable, "bounce at {} left no playable step", state.position());
        }
        MoveOutcome::GoalAgainstCurrent { .. } | MoveOutcome::GoalForOpponentNoMoves { .. } => {
            prop_assert_eq!(after.score_total, before.score_total + 1);
            prop_assert_eq!(after.player, before.player);
            prop_assert_eq!(after.lines, 0);
            prop_assert_eq!(after.bounce_count, 0);
            prop_assert_eq!(after.last_bounce, None);
            prop_assert_eq!(after.position, state.field().kickoff());
        }
    }
    Ok(())
}

fn pick(state: &GameState, input: &Input) -> Option<Direction> {
    match *input {
        Input::Any(i) => Some(Direction::ALL[i]),
        Input::Legal(i) => {
            let legal = state.legal_moves();
            (!legal.is_empty()).then(|| legal[i % legal.len()])
        }
        Input::Reset(_) => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every reachable state keeps the engine invariants.
    #[test]
    fn prop_random_play_keeps_invariants(
        start in kickoff(),
        inputs in prop::collection::vec(input(), 0..300),
    ) {
        let config = FieldConfig::default().with_kickoff(start);
        let mut state = GameState::new(&config).unwrap();
        check_state(&state)?;

        for input in &inputs {
            if let Input::Reset(full) = *input {
                let score = state.score();
                state.reset(full);
                prop_assert_eq!(state.score().total(), if full { 0 } else { score.total() });
                check_state(&state)?;
                continue;
            }
            let Some(dir) = pick(&state, input) else { continue };

            let before = observe(&state);
            let outcome = state.attempt_move(dir);
            check_transition(&before, outcome, &state)?;
            check_state(&state)?;
        }
    }

    /// Scores never go down during a session without a full reset.
    #[test]
    fn prop_scores_are_monotonic(inputs in prop::collection::vec(0usize..8, 0..400)) {
        let mut state = GameState::default();
        let mut last = state.score();

        for i in inputs {
            let legal = state.legal_moves();
            let dir = if legal.is_empty() { Direction::ALL[i] } else { legal[i % legal.len()] };
            state.attempt_move(dir);

            let score = state.score();
            for p in Player::ALL {
                prop_assert!(score[p] >= last[p]);
            }
            last = score;
        }
    }

    /// Any stream of keyboard and pointer events leaves the session consistent.
    #[test]
    fn prop_session_events_are_safe(
        events in prop::collection::vec((0u8..4, 0usize..6, -1i32..16, -1i32..11), 0..200),
    ) {
        const KEYS: [Key; 6] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Confirm, Key::Reset];
        let mut session = Session::default();

        for (kind, key, col, row) in events {
            match kind {
                0 => { session.key_down(KEYS[key]); }
                1 => session.key_up(KEYS[key]),
                2 => { session.select_at_cell(Cell::new(col, row)); }
                _ => { session.click(); }
            }

            let snap = session.snapshot();
            prop_assert_eq!(snap.position, session.state().position());
            prop_assert_eq!(snap.history.len(), session.state().graph().len());
            prop_assert_eq!(snap.legal_moves.as_slice(), session.state().legal_moves());
            check_state(session.state())?;
        }
    }
}
