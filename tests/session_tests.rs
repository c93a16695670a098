//! Session integration tests.
//!
//! Drive a `Session` the way a front-end does: hover and click, key
//! presses, resets, and read the result back through snapshots.

use paper_soccer::core::{Cell, ConfigError, Direction, FieldConfig, Player};
use paper_soccer::rules::{BounceKind, MoveOutcome, Phase, RejectReason};
use paper_soccer::session::{Key, Session, Snapshot, Status};

/// Install a subscriber so `RUST_LOG=paper_soccer=trace` shows engine logs.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn session_at(col: i32, row: i32) -> Session {
    Session::new(FieldConfig::default().with_kickoff(Cell::new(col, row))).unwrap()
}

fn press(session: &mut Session, keys: &[Key]) -> Option<MoveOutcome> {
    let mut last = None;
    for &key in keys {
        if let Some(outcome) = session.key_down(key) {
            last = Some(outcome);
        }
    }
    for &key in keys {
        session.key_up(key);
    }
    last
}

// =============================================================================
// Pointer
// =============================================================================

/// Test that hovering then clicking plays the hovered neighbour.
#[test]
fn test_hover_and_click() {
    init_tracing();
    let mut session = Session::default();

    // Cell (6, 4) spans pixels 240..280 x 160..200.
    assert_eq!(session.select_at_pixel(250.0, 190.0), Some(Direction::UpLeft));
    assert_eq!(session.click(), Some(MoveOutcome::Continued));

    assert_eq!(session.state().position(), Cell::new(6, 4));
    assert_eq!(session.state().current_player(), Player::Two);
    assert_eq!(session.selected(), None);
    assert_eq!(session.status().to_string(), "Player 2 to move");
}

/// Test that hovering outside the ball's neighbourhood changes nothing.
#[test]
fn test_hover_far_away() {
    let mut session = Session::default();

    assert_eq!(session.select_at_pixel(20.0, 20.0), None);
    assert_eq!(session.select_at_pixel(-5.0, 190.0), None);
    assert_eq!(session.selected(), None);
    assert_eq!(session.click(), None);
    assert!(session.state().graph().is_empty());
}

/// Test that pointer selection follows the configured cell size.
#[test]
fn test_hover_with_custom_cell_size() {
    let config = FieldConfig::default().with_canvas(300, 200).with_cell_size(20);
    let mut session = Session::new(config).unwrap();
    assert_eq!(session.state().position(), Cell::new(7, 5));

    // Pixel (165, 115) lies in cell (8, 5).
    assert_eq!(session.select_at_pixel(165.0, 115.0), Some(Direction::Right));
}

// =============================================================================
// Keyboard
// =============================================================================

/// Test a keyboard turn: select with arrows, confirm with space.
#[test]
fn test_arrow_then_space() {
    let mut session = Session::default();

    assert_eq!(press(&mut session, &[Key::Up, Key::Right]), None);
    assert_eq!(session.selected(), Some(Direction::UpRight));

    assert_eq!(press(&mut session, &[Key::Confirm]), Some(MoveOutcome::Continued));
    assert_eq!(session.state().position(), Cell::new(8, 4));
}

/// Test that key selection can pick an off-field rebound.
#[test]
fn test_keys_can_select_rebound() {
    let mut session = session_at(14, 4);

    press(&mut session, &[Key::Right]);
    assert_eq!(session.selected(), Some(Direction::Right));
    assert!(!session.state().is_legal(Direction::Right));

    let outcome = press(&mut session, &[Key::Confirm]);
    assert_eq!(
        outcome,
        Some(MoveOutcome::BouncedContinue {
            kind: BounceKind::Border
        })
    );
    assert_eq!(
        session.status(),
        Status::Bounce {
            player: Player::One,
            count: 1
        }
    );
    assert_eq!(session.state().position(), Cell::new(14, 4));
}

/// Test that a refused move keeps the player and reports why.
#[test]
fn test_refused_move_status() {
    let mut session = session_at(14, 4);
    press(&mut session, &[Key::Right]);
    press(&mut session, &[Key::Confirm]);

    // Rebounding off the band again straight away is not allowed.
    press(&mut session, &[Key::Up, Key::Right]);
    let outcome = press(&mut session, &[Key::Confirm]);

    assert_eq!(
        outcome,
        Some(MoveOutcome::Rejected {
            reason: RejectReason::ConsecutiveBorderBounce
        })
    );
    assert_eq!(session.state().current_player(), Player::One);
    assert_eq!(session.state().phase(), Phase::BounceExtraMove);
    assert!(session.status().to_string().starts_with("Move not allowed"));
}

/// Test that holding R restarts the whole game.
#[test]
fn test_reset_key() {
    let mut session = session_at(1, 5);
    session.select_direction(Some(Direction::Left));
    assert_eq!(session.confirm_move(), MoveOutcome::GoalAgainstCurrent { scorer: Player::Two });
    assert_eq!(session.status(), Status::Goal { scorer: Player::Two });
    assert_eq!(session.state().score()[Player::Two], 1);

    session.key_down(Key::Reset);
    assert_eq!(session.state().score().total(), 0);
    assert_eq!(session.status(), Status::NewGame);

    // Arrows pressed while R is still down keep restarting.
    assert_eq!(session.key_down(Key::Left), None);
    assert_eq!(session.selected(), None);
    session.key_up(Key::Reset);
    session.key_up(Key::Left);
}

/// Test that a diagonal pair wins even with the opposing arrow held.
#[test]
fn test_diagonal_beats_opposing_arrow() {
    let mut session = Session::default();

    session.key_down(Key::Up);
    session.key_down(Key::Down);
    // Up+down alone selects nothing; the earlier selection stays.
    assert_eq!(session.selected(), Some(Direction::Up));

    session.key_down(Key::Left);
    assert_eq!(session.selected(), Some(Direction::UpLeft));
}

/// Test that key codes from the browser map onto the driver.
#[test]
fn test_dom_key_codes() {
    let mut session = Session::default();
    let codes = ["ArrowDown", "ArrowRight"];
    let keys: Vec<Key> = codes.iter().filter_map(|c| Key::from_code(c)).collect();

    press(&mut session, &keys);
    assert_eq!(session.selected(), Some(Direction::DownRight));
    assert_eq!(Key::from_code("Enter"), None);
}

// =============================================================================
// Snapshots
// =============================================================================

/// Test that snapshots track the game and stay detached from it.
#[test]
fn test_snapshot_follows_play() {
    let mut session = Session::default();
    let empty = session.snapshot();

    session.select_direction(Some(Direction::Up));
    session.confirm_move();
    session.select_at_cell(Cell::new(8, 4));
    let snap = session.snapshot();

    assert!(empty.history.is_empty());
    assert_eq!(snap.history.len(), 1);
    assert_eq!(snap.history[0].from, Cell::new(7, 5));
    assert_eq!(snap.history[0].to, Cell::new(7, 4));
    assert_eq!(snap.history[0].player, Player::One);
    assert_eq!(snap.current_player, Player::Two);
    assert_eq!(snap.selected, Some(Direction::Right));
    assert_eq!(snap.selected_target(), Some(Cell::new(8, 4)));
    assert!(!snap.legal_moves.contains(&Direction::Down));
    assert_eq!(snap.status, Status::PlayerToMove { player: Player::Two });
}

/// Test that a snapshot survives a JSON round trip for remote renderers.
#[test]
fn test_snapshot_json() {
    let mut session = session_at(14, 4);
    session.select_direction(Some(Direction::Right));
    session.confirm_move();

    let json = serde_json::to_string(&session.snapshot()).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, session.snapshot());
    assert_eq!(back.last_bounce, Some(BounceKind::Border));
    assert_eq!(back.bounce_count, 1);
}

// =============================================================================
// Configuration
// =============================================================================

/// Test loading a config from JSON with missing fields defaulted.
#[test]
fn test_config_from_json() {
    let config: FieldConfig = serde_json::from_str(r#"{"canvas_width": 400, "cell_size": 40}"#).unwrap();
    let session = Session::new(config).unwrap();

    let snap = session.snapshot();
    assert_eq!((snap.cols, snap.rows), (10, 10));
    assert_eq!(snap.goals, [Cell::new(0, 5), Cell::new(9, 5)]);
    assert_eq!(snap.position, Cell::new(5, 5));
}

/// Test that bad configs surface as errors, not panics.
#[test]
fn test_config_errors() {
    let tiny = FieldConfig::default().with_canvas(80, 400);
    assert!(matches!(
        Session::new(tiny),
        Err(ConfigError::FieldTooSmall { cols: 2, rows: 10 })
    ));

    let on_goal = FieldConfig::default().with_kickoff(Cell::new(0, 5));
    let err = Session::new(on_goal).unwrap_err();
    assert_eq!(err.to_string(), "kick-off cell (0, 5) is a goal");
}
