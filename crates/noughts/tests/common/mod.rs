//! Shared helpers for session tests.

#![allow(dead_code)]

use noughts::{Controller, OutputSink, ScriptedInput};
use noughts_core::{Board, GameStatus, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One call made on the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Render(String),
    Notify(String),
    Send(String),
    Instructions,
    Result(GameStatus, Option<String>),
}

/// Output sink that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Notify(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn results(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Result(..)))
            .collect()
    }

    pub fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Render(_)))
            .count()
    }
}

impl OutputSink for RecordingSink {
    fn render(&mut self, board: &Board) {
        self.events.push(Event::Render(board.to_string()));
    }

    fn notify(&mut self, message: &str) {
        self.events.push(Event::Notify(message.to_string()));
    }

    fn send(&mut self, message: &str) {
        self.events.push(Event::Send(message.to_string()));
    }

    fn show_instructions(&mut self) {
        self.events.push(Event::Instructions);
    }

    fn show_result(&mut self, status: &GameStatus, winner: Option<&Player>) {
        self.events
            .push(Event::Result(*status, winner.map(|p| p.name().clone())));
    }
}

pub type TestController = Controller<ScriptedInput, RecordingSink, StdRng>;

/// Builds a controller fed by `lines`, seeded for repeatable markers.
pub fn controller(lines: &[&str], seed: u64) -> TestController {
    Controller::new(
        ScriptedInput::from_lines(lines.iter().copied()),
        RecordingSink::default(),
        StdRng::seed_from_u64(seed),
    )
}

/// Builds a controller that has completed setup with players Ann and Bob.
pub fn started(seed: u64) -> TestController {
    let mut c = controller(&["Ann", "Bob"], seed);
    c.setup().expect("setup");
    c
}
