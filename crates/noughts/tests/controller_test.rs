//! Session flow tests for the controller.

mod common;

use common::{Event, controller, started};
use noughts::{SessionError, SessionPhase};
use noughts_core::{GameStatus, Marker, PlayerId};

#[test]
fn test_setup_assigns_one_marker_each() {
    let c = started(1);
    let players = c.board().players();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name(), "Ann");
    assert_eq!(players[1].name(), "Bob");
    assert_ne!(players[0].marker(), players[1].marker());
    assert_eq!(c.phase(), SessionPhase::InProgress);
}

#[test]
fn test_setup_echoes_assignment_then_instructions() {
    let c = started(1);
    let events = &c.output().events;

    assert_eq!(events[0], Event::Notify("Create your players".to_string()));
    assert_eq!(events[1], Event::Send("Enter 1st player's name".to_string()));
    assert_eq!(events[2], Event::Send("Enter 2nd player's name".to_string()));

    let ann_marker = c.board().players()[0].marker().symbol();
    assert_eq!(
        events[3],
        Event::Notify(format!(
            "1st player's name is Ann and their marker is {ann_marker}"
        ))
    );
    assert_eq!(events.last(), Some(&Event::Instructions));
}

#[test]
fn test_same_seed_same_markers() {
    for seed in 0..8 {
        let a = started(seed);
        let b = started(seed);
        assert_eq!(a.board().players(), b.board().players());
    }
}

#[test]
fn test_both_assignments_occur() {
    let firsts: Vec<Marker> = (0..64)
        .map(|seed| *started(seed).board().players()[0].marker())
        .collect();
    assert!(firsts.contains(&Marker::X));
    assert!(firsts.contains(&Marker::O));
}

#[test]
fn test_top_row_win_after_five_moves() {
    let mut c = controller(&["Ann", "Bob", "t1", "c1", "t2", "c2", "t3", "b3"], 3);
    let status = c.run().unwrap();

    assert_eq!(status, GameStatus::Won(PlayerId::First));
    assert_eq!(c.board().step(), 5);
    assert_eq!(c.phase(), SessionPhase::Terminated);
    assert_eq!(
        c.output().results(),
        [&Event::Result(
            GameStatus::Won(PlayerId::First),
            Some("Ann".to_string())
        )]
    );
}

#[test]
fn test_draw_is_reported() {
    // X O X / X O O / O X X
    let mut c = controller(
        &["Ann", "Bob", "t1", "t2", "t3", "c2", "c1", "c3", "b2", "b1", "b3"],
        4,
    );
    let status = c.run().unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(c.board().step(), 9);
    assert_eq!(
        c.output().results(),
        [&Event::Result(GameStatus::Draw, None)]
    );
}

#[test]
fn test_occupied_cell_keeps_turn() {
    let mut c = started(5);
    c.handle("c2").unwrap();
    let renders = c.output().renders();

    assert_eq!(c.handle("C2").unwrap(), SessionPhase::InProgress);

    assert_eq!(c.board().step(), 1);
    assert_eq!(c.output().renders(), renders);
    assert_eq!(
        c.output().notifications().last(),
        Some(&"This position is already taken, try another")
    );
    c.handle("who").unwrap();
    assert_eq!(
        c.output().notifications().last(),
        Some(&"Current player is Bob")
    );
}

#[test]
fn test_accepted_move_announces_then_renders() {
    let mut c = started(5);
    c.handle("b1").unwrap();
    let events = &c.output().events;
    let n = events.len();

    assert_eq!(events[n - 2], Event::Notify("Ann makes a move:".to_string()));
    assert!(matches!(&events[n - 1], Event::Render(grid) if grid.lines().nth(2).unwrap().starts_with(['X', 'O'])));
}

#[test]
fn test_stop_mid_game_skips_evaluation() {
    let mut c = controller(&["Ann", "Bob", "t1", "c2", "stop", "b3"], 6);
    let status = c.run().unwrap();

    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(c.phase(), SessionPhase::Terminated);
    assert_eq!(c.board().step(), 2);
    assert!(c.output().results().is_empty());
}

#[test]
fn test_unknown_command_changes_nothing() {
    let mut c = started(2);
    let before = c.board().clone();

    assert_eq!(c.handle("d4").unwrap(), SessionPhase::InProgress);

    assert_eq!(c.board(), &before);
    assert_eq!(
        c.output().notifications().last(),
        Some(&"Unknown command, check 'help'")
    );
}

#[test]
fn test_help_shows_instructions() {
    let mut c = started(2);
    let before = c.output().events.len();
    c.handle(" HELP ").unwrap();
    assert_eq!(c.output().events[before..], [Event::Instructions]);
}

#[test]
fn test_terminated_is_absorbing() {
    let mut c = controller(&["Ann", "Bob", "t1", "c1", "t2", "c2", "t3"], 8);
    c.run().unwrap();
    let board = c.board().clone();

    assert_eq!(c.handle("b3").unwrap(), SessionPhase::Terminated);

    assert_eq!(c.board(), &board);
    assert_eq!(c.output().results().len(), 2);
}

#[test]
fn test_no_evaluation_before_fifth_move() {
    let mut c = started(9);
    for token in ["t1", "c1", "t2", "c2"] {
        c.handle(token).unwrap();
        assert_eq!(c.board().status(), GameStatus::InProgress);
    }
    assert_eq!(c.handle("t3").unwrap(), SessionPhase::Terminated);
}

#[test]
fn test_players_alternate_through_controller() {
    let mut c = controller(&["Ann", "Bob", "b2", "b2", "t1", "who", "c3", "t3"], 10);
    c.run().unwrap();

    let history = c.board().history();
    assert_eq!(history.len(), 4);
    for (step, mv) in history.iter().enumerate() {
        assert_eq!(mv.player, PlayerId::from_step(step));
    }
}

#[test]
fn test_setup_aborted_without_names() {
    let mut c = controller(&[], 0);
    assert!(matches!(c.run(), Err(SessionError::SetupAborted)));
}
